//! # ferrimusic
//!
//! ferrimusic is a wrapper for the Apple Music API. It builds correctly shaped requests for the catalog, storefront
//! and personal library endpoints and hands them to an HTTP collaborator, which sends them and decodes the responses
//! into [serde_json::Value]s.
//!
//! # Credentials
//!
//! Every request is authenticated with a developer token. The personalised endpoints (the ones under `me/`) also
//! require a music user token. Acquiring and refreshing either token is up to you; the client only holds them and
//! attaches them to requests. Both may be replaced at any time with
//! [set_developer_token](client::AppleMusicClient::set_developer_token) and
//! [set_music_user_token](client::AppleMusicClient::set_music_user_token).
//!
//! # Usage
//!
//! All endpoints are in the [CatalogClient](client::CatalogClient) and [LibraryClient](client::LibraryClient)
//! traits. Each endpoint function returns a request builder that may be used to set the endpoint's optional
//! parameters before sending the request.
//!
//! ```no_run
//! # use ferrimusic::client::AppleMusicClientBuilder;
//! # use ferrimusic::model::{LibraryResource, LibraryResourceAddRequest, ResourceKind};
//! # use ferrimusic::prelude::*;
//! # async fn foo() -> ferrimusic::error::Result<()> {
//! let client = AppleMusicClientBuilder::new("developer token")
//!     .music_user_token("music user token")
//!     .build_async();
//!
//! // GET catalog/us/charts?types=songs%2Calbums&offset=0&limit=10
//! let charts = client
//!     .catalog_charts("us")
//!     .types([ResourceKind::Songs, ResourceKind::Albums])
//!     .limit(10)
//!     .send_async()
//!     .await?;
//!
//! // POST me/library?ids[songs]=203709340,201281527
//! let mut add_request = LibraryResourceAddRequest::new();
//! add_request
//!     .add_song(LibraryResource::new(ResourceKind::Songs, "203709340")?)
//!     .add_song(LibraryResource::new(ResourceKind::Songs, "201281527")?);
//!
//! client.add_resources_to_library(&add_request).send_async().await?;
//!
//! let song_ids = client.song_ids_for_album("us", "310730204").send_async().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Asynchronous and synchronous clients
//!
//! The library supports both asynchronous and synchronous clients, enabled by the `async` and `sync` features
//! respectively. `async` is enabled by default. Asynchronous requests are sent with `send_async()` and synchronous
//! ones with `send_sync()`.
//!
//! # Custom HTTP collaborators
//!
//! The clients built with `build_async()` and `build_sync()` send their requests with reqwest. Any other
//! implementation of [AsyncHttpClient](client::AsyncHttpClient) or [SyncHttpClient](client::SyncHttpClient) may be
//! used instead with
//! [build_with_http_client](client::AppleMusicClientBuilder::build_with_http_client).
//!
//! # Crate features
//!
//! - `async`: enables the asynchronous client. Enabled by default.
//! - `sync`: enables the synchronous client.
//! - `native-tls`: use the system's native TLS implementation in reqwest. Enabled by default.
//! - `rustls-tls`: use rustls in reqwest.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod client;
pub mod error;
pub mod model;

/// Contains all the traits required to use the library's clients and request builders.
pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::client::request_builder::AsyncRequestBuilder;
    #[cfg(feature = "sync")]
    pub use crate::client::request_builder::SyncRequestBuilder;
    pub use crate::client::{request_builder::BaseRequestBuilder, CatalogClient, LibraryClient};
}
