use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no usable `Authorization` header.
    ///
    /// Either the header is absent or its scheme is neither `Token` nor `Bearer`.
    /// Results in a 401 Unauthorized response.
    #[error("Authorization header is missing or malformed")]
    MissingToken,

    /// The presented token does not exist or belongs to an inactive account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid authentication token")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants answer 401 Unauthorized with a short message. The failure is logged at
/// debug level so token probing does not flood the logs.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let message = match self {
            Self::MissingToken => "Authentication credentials were not provided.",
            Self::InvalidToken => "Invalid token.",
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
