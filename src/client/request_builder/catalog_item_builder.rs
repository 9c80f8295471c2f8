use crate::client::{
    object,
    query::{self, Query},
    request_builder::{BaseRequestBuilderContainer, RequestBuilder},
};

/// A builder type for retrieving catalog and storefront resources.
///
/// The `include` query parameter is always sent, even if no relationships are [included](Self::include). In that case
/// the request ends with an empty `include=`.
#[derive(Debug, Clone)]
pub struct CatalogItemRequestBuilder<TClient> {
    base: RequestBuilder<TClient>,
    include: String,
}

impl<TClient> CatalogItemRequestBuilder<TClient> {
    pub(crate) fn new(base: RequestBuilder<TClient>) -> Self {
        Self {
            base,
            include: String::new(),
        }
    }

    /// Additional relationships to include in the response, such as an album's `tracks` or `artists`.
    pub fn include<I, S>(self, relationships: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            include: query::join_list(relationships),
            ..self
        }
    }
}

impl<TClient> BaseRequestBuilderContainer<TClient> for CatalogItemRequestBuilder<TClient> {
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
        query.append(object::INCLUDE_QUERY, self.include.as_str());
    }
}
