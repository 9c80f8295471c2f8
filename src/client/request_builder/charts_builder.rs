use crate::client::{
    object,
    query::{self, Query},
    request_builder::{BaseRequestBuilderContainer, RequestBuilder},
};

/// The default number of resources per chart.
pub const DEFAULT_CHARTS_LIMIT: u32 = 20;

/// A builder for fetching catalog charts.
///
/// Unlike the other paginated endpoints, the limit is sent as given; the API's own maximum of 50 isn't enforced by
/// the library. The `types` and `genre` values are form-encoded, so the comma-separated types are sent as
/// `types=songs%2Calbums` and spaces in the genre as `+`.
#[derive(Debug, Clone)]
pub struct ChartsRequestBuilder<TClient> {
    base: RequestBuilder<TClient>,
    types: String,
    genre: String,
    limit: u32,
    offset: u32,
}

impl<TClient> ChartsRequestBuilder<TClient> {
    pub(crate) fn new(base: RequestBuilder<TClient>) -> Self {
        Self {
            base,
            types: String::new(),
            genre: String::new(),
            limit: DEFAULT_CHARTS_LIMIT,
            offset: 0,
        }
    }

    /// The kinds of charts to fetch; `albums`, `songs`, `music-videos` or `playlists`. Accepts any iterator of
    /// strings or [ResourceKinds](crate::model::ResourceKind).
    pub fn types<I, S>(self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            types: query::join_list(types),
            ..self
        }
    }

    /// The identifier of the genre to use in the chart results. An empty genre is left out of the request.
    pub fn genre<S>(self, genre: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            genre: genre.into(),
            ..self
        }
    }

    /// The number of resources to include per chart.
    ///
    /// Default: 20.
    pub fn limit(self, limit: u32) -> Self {
        Self { limit, ..self }
    }

    /// The next page or group of objects to fetch.
    ///
    /// Default: 0.
    pub fn offset(self, offset: u32) -> Self {
        Self { offset, ..self }
    }
}

impl<TClient> BaseRequestBuilderContainer<TClient> for ChartsRequestBuilder<TClient> {
    fn base_builder(&self) -> &RequestBuilder<TClient> {
        &self.base
    }

    fn base_builder_mut(&mut self) -> &mut RequestBuilder<TClient> {
        &mut self.base
    }

    fn take_base_builder(self) -> RequestBuilder<TClient> {
        self.base
    }

    fn append_query_params(&self, query: &mut Query) {
        query
            .append(object::TYPES_QUERY, query::form_encode(&self.types))
            .append(object::OFFSET_QUERY, self.offset.to_string())
            .append(object::LIMIT_QUERY, self.limit.to_string())
            .append_non_empty(object::GENRE_QUERY, query::form_encode(&self.genre));
    }
}
