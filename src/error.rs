use std::convert::Infallible;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid relationship given: {0:?}. Only 'playlists' is allowed at the moment")]
    InvalidRelationship(String),
    #[error("Invalid resource kind: {0:?}")]
    InvalidResourceKind(String),
    #[error("Invalid library resource: {0}")]
    InvalidResource(String),
    #[error("Invalid response for album with id {0:?}")]
    MalformedResponse(String),

    #[error("Failed to build request URL: {0}")]
    InvalidUrl(String),
    #[error("The developer token or music user token was rejected")]
    Unauthorized,
    #[error(
        "The endpoint is forbidden. The developer token may be invalid or the user may have revoked the \
         application's access to their library"
    )]
    Forbidden,
    #[error("Request rate limit hit; retry after {0} seconds")]
    RateLimit(u64),
    #[error("Missing or invalid Retry-After header in 429 rate-limit response")]
    InvalidRateLimitResponse,
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("Unhandled API response status code {0}")]
    UnhandledApiResponseStatusCode(u16),

    #[error("Failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}

// lets infallible conversions (e.g. LibraryResource into itself) be used wherever a fallible one is accepted
impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
