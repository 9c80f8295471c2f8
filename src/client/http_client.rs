//! The HTTP collaborator the client sends its requests through.
//!
//! The client itself only builds [ApiRequests](ApiRequest). Actually sending them is left to an implementation of
//! [AsyncHttpClient] or [SyncHttpClient]. The library ships with reqwest-backed implementations of both;
//! [AsyncClient] and [SyncClient]. Custom implementations may be given to
//! [AppleMusicClientBuilder::build_with_http_client](crate::client::AppleMusicClientBuilder::build_with_http_client).

#[cfg(feature = "async")]
mod async_client {
    use reqwest::Url;
    use serde_json::Value;

    use super::{build_url, handle_response, ApiRequest, AsyncHttpClient, MUSIC_USER_TOKEN_HEADER};
    use crate::error::Result;

    /// An asynchronous HTTP collaborator backed by [reqwest::Client].
    #[derive(Debug, Clone)]
    pub struct AsyncClient {
        http_client: reqwest::Client,
        base_url: Url,
    }

    impl AsyncClient {
        pub fn new(base_url: Url) -> Self {
            Self::with_client(reqwest::Client::new(), base_url)
        }

        /// Use an existing reqwest client, for example one with customised default headers or timeouts.
        pub fn with_client(http_client: reqwest::Client, base_url: Url) -> Self {
            Self { http_client, base_url }
        }

        pub fn base_url(&self) -> &Url {
            &self.base_url
        }
    }

    #[async_trait::async_trait]
    impl AsyncHttpClient for AsyncClient {
        async fn request(&self, request: ApiRequest) -> Result<Value> {
            let url = build_url(&self.base_url, &request.path_and_query)?;

            let mut builder = self
                .http_client
                .request(request.method, url)
                .headers(request.headers)
                .bearer_auth(request.credentials.developer_token());

            if let Some(music_user_token) = request.credentials.music_user_token() {
                builder = builder.header(MUSIC_USER_TOKEN_HEADER, music_user_token);
            }

            if let Some(timeout) = request.timeout {
                builder = builder.timeout(timeout);
            }

            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.text().await?;

            handle_response(status, &headers, &body)
        }
    }
}

#[cfg(feature = "sync")]
mod sync_client {
    use reqwest::Url;
    use serde_json::Value;

    use super::{build_url, handle_response, ApiRequest, SyncHttpClient, MUSIC_USER_TOKEN_HEADER};
    use crate::error::Result;

    /// A synchronous HTTP collaborator backed by [reqwest::blocking::Client].
    #[derive(Debug, Clone)]
    pub struct SyncClient {
        http_client: reqwest::blocking::Client,
        base_url: Url,
    }

    impl SyncClient {
        /// Create a new client. This must not be called within an async runtime, since the blocking reqwest client
        /// spawns its own runtime.
        pub fn new(base_url: Url) -> Self {
            Self::with_client(reqwest::blocking::Client::new(), base_url)
        }

        pub fn with_client(http_client: reqwest::blocking::Client, base_url: Url) -> Self {
            Self { http_client, base_url }
        }

        pub fn base_url(&self) -> &Url {
            &self.base_url
        }
    }

    impl SyncHttpClient for SyncClient {
        fn request(&self, request: ApiRequest) -> Result<Value> {
            let url = build_url(&self.base_url, &request.path_and_query)?;

            let mut builder = self
                .http_client
                .request(request.method, url)
                .headers(request.headers)
                .bearer_auth(request.credentials.developer_token());

            if let Some(music_user_token) = request.credentials.music_user_token() {
                builder = builder.header(MUSIC_USER_TOKEN_HEADER, music_user_token);
            }

            if let Some(timeout) = request.timeout {
                builder = builder.timeout(timeout);
            }

            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send()?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.text()?;

            handle_response(status, &headers, &body)
        }
    }
}

use std::time::Duration;

use log::{error, trace, warn};
use reqwest::{header, header::HeaderMap, Method, StatusCode, Url};
use serde_json::Value;

#[cfg(feature = "async")]
pub use self::async_client::AsyncClient;
#[cfg(feature = "sync")]
pub use self::sync_client::SyncClient;
use crate::{
    error::{Error, Result},
    model::error::ApiErrorResponse,
};

/// Header the music user token is sent in.
pub const MUSIC_USER_TOKEN_HEADER: &str = "Music-User-Token";

/// A snapshot of the client's credentials at the time a request was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    developer_token: String,
    music_user_token: Option<String>,
}

/// A fully built request, ready to be sent by an HTTP collaborator.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// The request method.
    pub method: Method,
    /// The path and query string relative to the API base URL, e.g. `catalog/us/albums/310730204?include=`.
    pub path_and_query: String,
    /// Request-specific headers, such as the content type of a JSON body. Authentication headers are not included;
    /// they're to be built from [credentials](ApiRequest::credentials).
    pub headers: HeaderMap,
    /// The raw request body, if any.
    pub body: Option<String>,
    /// The credentials to authenticate the request with.
    pub credentials: Credentials,
    /// An optional deadline for the request. The library doesn't interpret this value in any way.
    pub timeout: Option<Duration>,
}

/// A request built by a request builder that's still missing the credentials it'll be sent with.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub(crate) method: Method,
    pub(crate) path_and_query: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

/// An asynchronous HTTP collaborator.
///
/// An implementation is responsible for prefixing the API base URL to the request's path, attaching the
/// `Authorization: Bearer {developer token}` header and the `Music-User-Token` header (if there is one), sending the
/// request, decoding the JSON response into a [Value] and returning an [Error] for unsuccessful responses or transport
/// failures.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncHttpClient: Send + Sync {
    async fn request(&self, request: ApiRequest) -> Result<Value>;
}

/// A synchronous HTTP collaborator. See [AsyncHttpClient] for what an implementation is responsible for.
#[cfg(feature = "sync")]
pub trait SyncHttpClient {
    fn request(&self, request: ApiRequest) -> Result<Value>;
}

impl Credentials {
    pub fn new<S>(developer_token: S, music_user_token: Option<String>) -> Self
    where
        S: Into<String>,
    {
        Self {
            developer_token: developer_token.into(),
            music_user_token,
        }
    }

    pub fn developer_token(&self) -> &str {
        &self.developer_token
    }

    pub fn music_user_token(&self) -> Option<&str> {
        self.music_user_token.as_deref()
    }

    pub(crate) fn set_developer_token(&mut self, developer_token: String) {
        self.developer_token = developer_token;
    }

    pub(crate) fn set_music_user_token(&mut self, music_user_token: Option<String>) {
        self.music_user_token = music_user_token;
    }
}

impl PreparedRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path_and_query(&self) -> &str {
        &self.path_and_query
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub(crate) fn with_credentials(self, credentials: Credentials) -> ApiRequest {
        ApiRequest {
            method: self.method,
            path_and_query: self.path_and_query,
            headers: self.headers,
            body: self.body,
            credentials,
            timeout: self.timeout,
        }
    }
}

pub(crate) fn build_url(base_url: &Url, path_and_query: &str) -> Result<Url> {
    base_url
        .join(path_and_query)
        .map_err(|err| Error::InvalidUrl(format!("{base_url} + {path_and_query}: {err}")))
}

/// Maps a response into the structured value in its body, or an error if the response is unsuccessful. An empty body
/// in a successful response is returned as [Value::Null].
pub(crate) fn handle_response(status: StatusCode, headers: &HeaderMap, body: &str) -> Result<Value> {
    trace!("Response {status}: {body}");

    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Got 401 Unauthorized response");
            Err(Error::Unauthorized)
        }

        StatusCode::FORBIDDEN => {
            error!("Got 403 Forbidden response");
            Err(Error::Forbidden)
        }

        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = extract_rate_limit_retry_after(headers)?;
            warn!("Got rate limited, retry after {retry_after} seconds");

            Err(Error::RateLimit(retry_after))
        }

        status if status.is_success() => {
            if body.trim().is_empty() {
                Ok(Value::Null)
            } else {
                Ok(serde_json::from_str(body)?)
            }
        }

        status => {
            error!("Got unsuccessful response {status}");

            match serde_json::from_str::<ApiErrorResponse>(body)
                .ok()
                .and_then(|response| response.into_api_error(status.as_u16()))
            {
                Some(err) => Err(err),
                None => Err(Error::UnhandledApiResponseStatusCode(status.as_u16())),
            }
        }
    }
}

fn extract_rate_limit_retry_after(headers: &HeaderMap) -> Result<u64> {
    if let Some(wait_time) = headers
        .get(header::RETRY_AFTER)
        .and_then(|header| header.to_str().ok())
        .and_then(|header_str| header_str.parse::<u64>().ok())
    {
        Ok(wait_time)
    } else {
        warn!("Invalid rate-limit response");
        Err(Error::InvalidRateLimitResponse)
    }
}
