//! Contains the [AppleMusicClient] and its builder, and the [CatalogClient] and [LibraryClient] traits that contain
//! all the endpoints.
//!
//! # Usage
//!
//! ```no_run
//! # use ferrimusic::client::AppleMusicClientBuilder;
//! # use ferrimusic::prelude::*;
//! # async fn foo() -> ferrimusic::error::Result<()> {
//! // build a new client with a developer token. the token's lifecycle is up to you
//! let client = AppleMusicClientBuilder::new("developer token")
//!     // a music user token is required only for the endpoints in LibraryClient
//!     .music_user_token("music user token")
//!     // a synchronous client may be built with .build_sync()
//!     .build_async();
//!
//! let album = client
//!     .catalog_album("us", "310730204")
//!     .include(["artists"])
//!     .send_async()
//!     .await?;
//!
//! let playlists = client.library_playlists().limit(50).send_async().await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod catalog;
pub(crate) mod http_client;
pub(crate) mod library;
pub(crate) mod object;
pub(crate) mod private;
pub(crate) mod query;
pub mod request_builder;

use std::sync::{Arc, RwLock};

use const_format::concatcp;
use reqwest::Url;

#[cfg(feature = "async")]
pub use self::http_client::{AsyncClient, AsyncHttpClient};
#[cfg(feature = "sync")]
pub use self::http_client::{SyncClient, SyncHttpClient};
pub use self::{
    catalog::CatalogClient,
    http_client::{ApiRequest, Credentials, PreparedRequest, MUSIC_USER_TOKEN_HEADER},
    library::LibraryClient,
    query::Query,
};

/// The base URL every endpoint is relative to.
pub const API_BASE_URL: &str = "https://api.music.apple.com/v1/";

// catalog endpoints
const API_STOREFRONTS_ENDPOINT: &str = "storefronts";
const API_CATALOG_ENDPOINT: &str = "catalog";

// personalised endpoints
const API_ME_ENDPOINT: &str = "me";
const API_USER_STOREFRONT_ENDPOINT: &str = concatcp!(API_ME_ENDPOINT, "/storefront");
const API_RECENTLY_PLAYED_ENDPOINT: &str = concatcp!(API_ME_ENDPOINT, "/recent/played");
const API_LIBRARY_ENDPOINT: &str = concatcp!(API_ME_ENDPOINT, "/library");
const API_LIBRARY_PLAYLISTS_ENDPOINT: &str = concatcp!(API_LIBRARY_ENDPOINT, "/playlists");
const API_LIBRARY_ALBUMS_ENDPOINT: &str = concatcp!(API_LIBRARY_ENDPOINT, "/albums");
const API_LIBRARY_ARTISTS_ENDPOINT: &str = concatcp!(API_LIBRARY_ENDPOINT, "/artists");
const API_LIBRARY_MUSIC_VIDEOS_ENDPOINT: &str = concatcp!(API_LIBRARY_ENDPOINT, "/music-videos");

/// A client for the Apple Music API.
///
/// The client holds the developer token and the optional music user token, and sends all its requests through an
/// HTTP collaborator `C`. Cloning the client is cheap; clones share the same credentials, so updating a token in one
/// clone updates it in all of them. Every request reads both tokens at once when it's sent.
///
/// The endpoints are in the [CatalogClient] and [LibraryClient] traits, which are easiest to bring into scope with
/// the [prelude](crate::prelude).
#[derive(Debug, Clone)]
pub struct AppleMusicClient<C> {
    inner: Arc<AppleMusicClientRef>,
    http_client: C,
}

#[derive(Debug)]
struct AppleMusicClientRef {
    credentials: RwLock<Credentials>,
}

/// An asynchronous client using the reqwest-backed [AsyncClient].
#[cfg(feature = "async")]
pub type AsyncAppleMusicClient = AppleMusicClient<AsyncClient>;

/// A synchronous client using the reqwest-backed [SyncClient].
#[cfg(feature = "sync")]
pub type SyncAppleMusicClient = AppleMusicClient<SyncClient>;

#[derive(Debug, Clone)]
pub struct AppleMusicClientBuilder {
    developer_token: String,
    music_user_token: Option<String>,
    api_base_url: Option<Url>,
}

impl<C> AppleMusicClient<C> {
    /// Returns a snapshot of the client's current credentials.
    pub fn credentials(&self) -> Credentials {
        self.inner
            .credentials
            .read()
            .expect("credentials rwlock poisoned")
            .clone()
    }

    pub fn developer_token(&self) -> String {
        self.credentials().developer_token().to_owned()
    }

    /// Replace the developer token used for all further requests.
    pub fn set_developer_token<S>(&self, developer_token: S)
    where
        S: Into<String>,
    {
        self.inner
            .credentials
            .write()
            .expect("credentials rwlock poisoned")
            .set_developer_token(developer_token.into());
    }

    pub fn music_user_token(&self) -> Option<String> {
        self.credentials().music_user_token().map(str::to_owned)
    }

    /// Replace the music user token used for all further requests.
    pub fn set_music_user_token<S>(&self, music_user_token: S)
    where
        S: Into<String>,
    {
        self.inner
            .credentials
            .write()
            .expect("credentials rwlock poisoned")
            .set_music_user_token(Some(music_user_token.into()));
    }

    /// Remove the music user token. Further requests are sent with only the developer token.
    pub fn clear_music_user_token(&self) {
        self.inner
            .credentials
            .write()
            .expect("credentials rwlock poisoned")
            .set_music_user_token(None);
    }

    /// Returns the HTTP collaborator this client sends its requests with.
    pub fn http_client(&self) -> &C {
        &self.http_client
    }
}

impl AppleMusicClientBuilder {
    pub fn new<S>(developer_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            developer_token: developer_token.into(),
            music_user_token: None,
            api_base_url: None,
        }
    }

    /// Set the music user token. The token is required for the endpoints in [LibraryClient].
    pub fn music_user_token<S>(self, music_user_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            music_user_token: Some(music_user_token.into()),
            ..self
        }
    }

    /// Send the requests to a different base URL than [API_BASE_URL]. Only applies to clients built with
    /// [build_async](Self::build_async) or [build_sync](Self::build_sync).
    pub fn api_base_url(self, api_base_url: Url) -> Self {
        Self {
            api_base_url: Some(api_base_url),
            ..self
        }
    }

    /// Build a new asynchronous client.
    #[cfg(feature = "async")]
    pub fn build_async(self) -> AsyncAppleMusicClient {
        let base_url = self.base_url();
        self.build_with_http_client(AsyncClient::new(base_url))
    }

    /// Build a new synchronous client. This must not be called within an async runtime.
    #[cfg(feature = "sync")]
    pub fn build_sync(self) -> SyncAppleMusicClient {
        let base_url = self.base_url();
        self.build_with_http_client(SyncClient::new(base_url))
    }

    /// Build a new client that sends its requests with the given HTTP collaborator.
    pub fn build_with_http_client<C>(self, http_client: C) -> AppleMusicClient<C> {
        AppleMusicClient {
            inner: Arc::new(AppleMusicClientRef {
                credentials: RwLock::new(Credentials::new(self.developer_token, self.music_user_token)),
            }),
            http_client,
        }
    }

    #[cfg(any(feature = "async", feature = "sync"))]
    fn base_url(&self) -> Url {
        match &self.api_base_url {
            // relative paths are joined onto the base URL, which replaces the base's last segment unless it ends with
            // a slash
            Some(url) if !url.path().ends_with('/') => {
                let mut url = url.clone();
                let path = format!("{}/", url.path());
                url.set_path(&path);
                url
            }

            Some(url) => url.clone(),
            // the constant is a valid URL; if parsing it fails, there's a bug in the library
            None => Url::parse(API_BASE_URL).expect("failed to parse API base URL (this is likely a bug)"),
        }
    }
}

impl<C> private::Sealed for AppleMusicClient<C> {}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<C> private::SendApiRequestAsync for AppleMusicClient<C>
where
    C: AsyncHttpClient,
{
    async fn send_api_request_async(&self, request: PreparedRequest) -> crate::error::Result<serde_json::Value> {
        let request = request.with_credentials(self.credentials());
        self.http_client.request(request).await
    }
}

#[cfg(feature = "sync")]
impl<C> private::SendApiRequestSync for AppleMusicClient<C>
where
    C: SyncHttpClient,
{
    fn send_api_request_sync(&self, request: PreparedRequest) -> crate::error::Result<serde_json::Value> {
        let request = request.with_credentials(self.credentials());
        self.http_client.request(request)
    }
}

impl<C> CatalogClient for AppleMusicClient<C> where C: Clone {}
impl<C> LibraryClient for AppleMusicClient<C> where C: Clone {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_shared_between_clones() {
        let client = AppleMusicClientBuilder::new("developer").build_with_http_client(());
        let clone = client.clone();

        assert_eq!(client.music_user_token(), None);

        clone.set_music_user_token("user");
        clone.set_developer_token("developer 2");

        assert_eq!(client.developer_token(), "developer 2");
        assert_eq!(client.music_user_token().as_deref(), Some("user"));

        client.clear_music_user_token();
        assert_eq!(clone.credentials(), Credentials::new("developer 2", None));
    }

    #[cfg(feature = "async")]
    #[test]
    fn base_url_gets_trailing_slash() {
        let builder = AppleMusicClientBuilder::new("developer")
            .api_base_url(Url::parse("http://localhost:8080/v1").unwrap());

        assert_eq!(builder.base_url().as_str(), "http://localhost:8080/v1/");

        let default = AppleMusicClientBuilder::new("developer");
        assert_eq!(default.base_url().as_str(), API_BASE_URL);
    }
}
