mod catalog_item_builder;
mod charts_builder;
mod paged_builder;
mod search_builder;
mod song_ids_builder;

mod private {
    use super::RequestBuilder;
    use crate::client::query::Query;

    pub trait BaseRequestBuilderContainer<TClient>
    where
        Self: Sized,
    {
        fn base_builder(&self) -> &RequestBuilder<TClient>;
        fn base_builder_mut(&mut self) -> &mut RequestBuilder<TClient>;
        fn take_base_builder(self) -> RequestBuilder<TClient>;

        /// Appends the builder's own query parameters after the base builder's. Builders with parameters that have to
        /// be in a fixed position in the query string, regardless of when they were set, override this.
        fn append_query_params(&self, _query: &mut Query) {}
    }
}

use std::{borrow::Cow, time::Duration};

use log::{debug, trace};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Method,
};
use serde::Serialize;
#[cfg(any(feature = "async", feature = "sync"))]
use serde_json::Value;

pub(crate) use self::private::BaseRequestBuilderContainer;
pub use self::{
    catalog_item_builder::CatalogItemRequestBuilder, charts_builder::ChartsRequestBuilder,
    paged_builder::PagedRequestBuilder, search_builder::SearchBuilder, song_ids_builder::SongIdsRequestBuilder,
};
use crate::{
    client::{
        http_client::PreparedRequest,
        query::{self, Query},
    },
    error::Result,
};

/// Options available in each request builder.
pub trait BaseRequestBuilder<TClient>
where
    Self: private::BaseRequestBuilderContainer<TClient> + Sized,
{
    /// Set a deadline for the request. The value is passed on to the HTTP collaborator as-is.
    fn timeout(mut self, timeout: Duration) -> Self {
        self.base_builder_mut().timeout = Some(timeout);
        self
    }

    /// Returns the path and query string this request would be sent to, relative to the API base URL.
    fn path_and_query(&self) -> String {
        let mut query = self.base_builder().query.clone();
        self.append_query_params(&mut query);

        query::path_and_query(&self.base_builder().path, &query)
    }

    /// Returns the body this request would be sent with.
    fn body<'a>(&'a self) -> Option<&'a str>
    where
        TClient: 'a,
    {
        self.base_builder().body.as_deref()
    }
}

/// Asynchronous request builder functionality, namely sending the request and returning its response asynchronously.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncRequestBuilder<TClient>
where
    Self: BaseRequestBuilder<TClient> + Send,
    TClient: super::private::SendApiRequestAsync,
{
    /// Send the request and return the structured response body.
    async fn send_async(self) -> Result<Value> {
        let (client, request) = prepare(self);
        client.send_api_request_async(request).await
    }
}

/// Synchronous request builder functionality, namely sending the request and returning its response synchronously.
#[cfg(feature = "sync")]
pub trait SyncRequestBuilder<TClient>
where
    Self: BaseRequestBuilder<TClient>,
    TClient: super::private::SendApiRequestSync,
{
    /// Send the request and return the structured response body.
    fn send_sync(self) -> Result<Value> {
        let (client, request) = prepare(self);
        client.send_api_request_sync(request)
    }
}

/// A "base" request builder that doesn't include any special functionality. The commonly available options are
/// available in the [BaseRequestBuilder]-trait.
#[derive(Debug, Clone)]
pub struct RequestBuilder<TClient> {
    client: TClient,
    method: Method,
    path: Cow<'static, str>,
    query: Query,
    headers: HeaderMap,
    body: Option<String>,
    timeout: Option<Duration>,
}

impl<TClient> RequestBuilder<TClient> {
    pub(crate) fn new<S>(method: Method, path: S, client: TClient) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            client,
            method,
            path: path.into(),
            query: Query::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Create a new builder with a raw body that isn't sent as JSON.
    pub(crate) fn new_with_raw_body<S, B>(method: Method, path: S, body: B, client: TClient) -> Self
    where
        S: Into<Cow<'static, str>>,
        B: Into<String>,
    {
        Self {
            body: Some(body.into()),
            ..Self::new(method, path, client)
        }
    }

    /// Create a new builder with the given body serialized as JSON.
    pub(crate) fn new_with_json_body<S, B>(method: Method, path: S, body: &B, client: TClient) -> Result<Self>
    where
        S: Into<Cow<'static, str>>,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        let mut builder = Self::new_with_raw_body(method, path, body, client);

        builder
            .headers
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(builder)
    }

    pub(crate) fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    pub(crate) fn append_query<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        self.query.append(key, value);
        self
    }
}

impl<TClient> private::BaseRequestBuilderContainer<TClient> for RequestBuilder<TClient> {
    fn base_builder(&self) -> &RequestBuilder<TClient> {
        self
    }

    fn base_builder_mut(&mut self) -> &mut RequestBuilder<TClient> {
        self
    }

    fn take_base_builder(self) -> RequestBuilder<TClient> {
        self
    }
}

impl<TBuilder, TClient> BaseRequestBuilder<TClient> for TBuilder where
    TBuilder: private::BaseRequestBuilderContainer<TClient>
{
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<TBuilder, TClient> AsyncRequestBuilder<TClient> for TBuilder
where
    TBuilder: BaseRequestBuilder<TClient> + Send,
    TClient: super::private::SendApiRequestAsync,
{
}

#[cfg(feature = "sync")]
impl<TBuilder, TClient> SyncRequestBuilder<TClient> for TBuilder
where
    TBuilder: BaseRequestBuilder<TClient>,
    TClient: super::private::SendApiRequestSync,
{
}

/// Finalises a builder into its client and the request it'd send.
pub(crate) fn prepare<TBuilder, TClient>(builder: TBuilder) -> (TClient, PreparedRequest)
where
    TBuilder: private::BaseRequestBuilderContainer<TClient>,
{
    let path_and_query = builder.path_and_query();
    let common = builder.take_base_builder();

    debug!("Prepared request: {} {}", common.method, path_and_query);

    if let Some(body) = &common.body {
        trace!("Request body: {body:?}");
    }

    let request = PreparedRequest {
        method: common.method,
        path_and_query,
        headers: common.headers,
        body: common.body,
        timeout: common.timeout,
    };

    (common.client, request)
}
