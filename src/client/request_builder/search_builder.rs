use crate::client::{
    object,
    query::Query,
    request_builder::{BaseRequestBuilderContainer, RequestBuilder},
};

/// A builder for a search in a storefront's catalog. New instances are returned by the
/// [search-function](crate::client::CatalogClient::search) in [CatalogClient](crate::client::CatalogClient).
///
/// The search term should have its words joined with `+` characters instead of spaces, e.g. `james+brown`.
#[derive(Debug, Clone)]
pub struct SearchBuilder<TClient> {
    base: RequestBuilder<TClient>,
    term: String,
    types: String,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl<TClient> SearchBuilder<TClient> {
    pub(crate) fn new(base: RequestBuilder<TClient>, term: String, types: String) -> Self {
        Self {
            base,
            term,
            types,
            limit: None,
            offset: None,
        }
    }

    /// The maximum number of results to return for each resource type. Left out of the request unless set, in which
    /// case the API's default applies.
    pub fn limit(self, limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    /// The index of the first result to return for each resource type. Left out of the request unless set.
    pub fn offset(self, offset: u32) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }
}

impl<TClient> BaseRequestBuilderContainer<TClient> for SearchBuilder<TClient> {
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
            .append(object::TERM_QUERY, self.term.as_str())
            .append(object::TYPES_QUERY, self.types.as_str());

        if let Some(limit) = self.limit {
            query.append(object::LIMIT_QUERY, limit.to_string());
        }

        if let Some(offset) = self.offset {
            query.append(object::OFFSET_QUERY, offset.to_string());
        }
    }
}
