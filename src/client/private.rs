#[cfg(any(feature = "async", feature = "sync"))]
use serde_json::Value;

#[cfg(any(feature = "async", feature = "sync"))]
use crate::{client::http_client::PreparedRequest, error::Result};

pub trait Sealed {}

/// Every client able to send requests asynchronously implements this trait.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait SendApiRequestAsync: Sealed + Send + Sync {
    /// Attaches the client's current credentials to the request and sends it with the client's HTTP collaborator. You
    /// probably shouldn't call this function directly; instead use
    /// [send_async](crate::client::request_builder::AsyncRequestBuilder::send_async) in a request builder.
    async fn send_api_request_async(&self, request: PreparedRequest) -> Result<Value>;
}

/// Every client able to send requests synchronously implements this trait.
#[cfg(feature = "sync")]
pub trait SendApiRequestSync: Sealed {
    /// Attaches the client's current credentials to the request and sends it with the client's HTTP collaborator. You
    /// probably shouldn't call this function directly; instead use
    /// [send_sync](crate::client::request_builder::SyncRequestBuilder::send_sync) in a request builder.
    fn send_api_request_sync(&self, request: PreparedRequest) -> Result<Value>;
}
