use serde::Deserialize;

use crate::error::Error;

/// The error body the API returns with unsuccessful responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub errors: Vec<ApiErrorObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ApiErrorObject {
    // these fields aren't used by the library but keep them around for logging purposes
    #[allow(dead_code)]
    pub id: Option<String>,
    #[allow(dead_code)]
    pub code: Option<String>,

    pub title: Option<String>,
    pub detail: Option<String>,
}

impl ApiErrorResponse {
    /// Converts the response into an [Error::ApiError] with a message built from the first error object. Returns
    /// None if the response doesn't contain any errors.
    pub fn into_api_error(self, status: u16) -> Option<Error> {
        let first = self.errors.into_iter().next()?;

        let message = match (first.title, first.detail) {
            (Some(title), Some(detail)) => format!("{title}: {detail}"),
            (Some(message), None) | (None, Some(message)) => message,
            (None, None) => return None,
        };

        Some(Error::ApiError { status, message })
    }
}
