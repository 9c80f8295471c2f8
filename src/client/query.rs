use std::{borrow::Cow, fmt};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Characters escaped in query keys and values. Only characters that would break the query string's structure are
/// escaped; list separators (`,`), bracketed keys (`ids[songs]`) and `+`-joined search terms go through as-is.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'&').add(b'<').add(b'>').add(b'`');

/// Characters left as-is in form-encoded values; everything else but ASCII alphanumerics is escaped.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// An insertion-ordered query string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    params: Vec<(Cow<'static, str>, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. The parameter is emitted even if the value is empty.
    pub fn append<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append a parameter only if its value isn't empty.
    pub fn append_non_empty<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        let value = value.into();

        if !value.is_empty() {
            self.params.push((key.into(), value));
        }

        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the value of the first parameter with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }

            write!(
                f,
                "{}={}",
                utf8_percent_encode(key, QUERY_COMPONENT),
                utf8_percent_encode(value, QUERY_COMPONENT)
            )?;
        }

        Ok(())
    }
}

/// Joins the given items into a comma-separated list.
pub(crate) fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Form-encodes a value the way HTML forms do: spaces become `+` and every other reserved character is
/// percent-encoded, including `,`. The result goes through [Query] unchanged.
pub(crate) fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_COMPONENT)
        .to_string()
        // a literal % in the input is encoded as %25, so %20 only ever comes from a space
        .replace("%20", "+")
}

/// Joins a path and a query into the form sent to the API. An empty query leaves out the `?`.
pub(crate) fn path_and_query(path: &str, query: &Query) -> String {
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}
