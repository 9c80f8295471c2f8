use crate::client::{
    object,
    query::{self, Query},
    request_builder::{BaseRequestBuilderContainer, RequestBuilder},
};

/// A builder type for paginated resource collections.
///
/// Every endpoint has its own default and maximum limit. A limit larger than the endpoint's maximum is clamped down to
/// the maximum. The offset is sent as given. The query string is always in the order `offset`, `limit`, `include`,
/// where `include` is sent even if no relationships are [included](Self::include).
#[derive(Debug, Clone)]
pub struct PagedRequestBuilder<TClient> {
    base: RequestBuilder<TClient>,
    limit: u32,
    max_limit: u32,
    offset: u32,
    include: String,
}

impl<TClient> PagedRequestBuilder<TClient> {
    pub(crate) fn new(base: RequestBuilder<TClient>, default_limit: u32, max_limit: u32) -> Self {
        Self {
            base,
            limit: default_limit,
            max_limit,
            offset: 0,
            include: String::new(),
        }
    }

    /// The maximum number of resources to return. Values above the endpoint's maximum are clamped to the maximum.
    pub fn limit(self, limit: u32) -> Self {
        Self { limit, ..self }
    }

    /// The index of the first resource to return. By combining this with [limit](Self::limit), you may request
    /// further pages of resources.
    ///
    /// Default: 0.
    pub fn offset(self, offset: u32) -> Self {
        Self { offset, ..self }
    }

    /// Additional relationships to include in the response.
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

    /// Returns the limit that will be sent, after clamping.
    pub fn effective_limit(&self) -> u32 {
        self.limit.min(self.max_limit)
    }
}

impl<TClient> BaseRequestBuilderContainer<TClient> for PagedRequestBuilder<TClient> {
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
            .append(object::OFFSET_QUERY, self.offset.to_string())
            .append(object::LIMIT_QUERY, self.effective_limit().to_string())
            .append(object::INCLUDE_QUERY, self.include.as_str());
    }
}
