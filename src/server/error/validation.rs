use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::data::scoped::Scope};

/// Input rejected before (or while) it is written.
///
/// Every variant knows which request field it concerns, so the response body can point
/// the client at the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Another record in the same scope already uses the slug.
    #[error("This {scope} already has a {entity} with this slug.")]
    DuplicateSlug { entity: &'static str, scope: Scope },

    /// Another record in the same scope already uses the order value.
    #[error("This {scope} already has a {entity} at this order position.")]
    DuplicateOrder { entity: &'static str, scope: Scope },

    /// Another record in the same scope already uses the name.
    #[error("This {scope} already has a {entity} with this name.")]
    DuplicateName { entity: &'static str, scope: Scope },

    /// A slug was derived from `source` but normalized to nothing.
    #[error("Cannot derive a slug from the {source_field}, please provide one.")]
    EmptySlug { source_field: &'static str },

    /// An explicit slug is not in normalized form.
    #[error("Slug may only contain lowercase letters, digits and single hyphens.")]
    InvalidSlug,

    /// An explicit order value below 1.
    #[error("Order must be a positive integer.")]
    InvalidOrder,

    /// A numeric field that must not be negative.
    #[error("Ensure {field} is greater than or equal to 0.")]
    Negative { field: &'static str },

    /// A text field exceeds its maximum length.
    #[error("Ensure {field} has no more than {max} characters.")]
    TooLong { field: &'static str, max: usize },

    /// A required text field is empty.
    #[error("The {field} field is required.")]
    Required { field: &'static str },

    /// An uploaded file does not look like a supported image.
    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),
}

impl ValidationError {
    /// Name of the request field the error concerns.
    pub fn field(&self) -> &'static str {
        match self {
            Self::DuplicateSlug { .. } | Self::EmptySlug { .. } | Self::InvalidSlug => "slug",
            Self::DuplicateOrder { .. } | Self::InvalidOrder => "order",
            Self::DuplicateName { .. } => "name",
            Self::TooLong { field, .. } | Self::Required { field } | Self::Negative { field } => {
                field
            }
            Self::UnsupportedImage(_) => "image",
        }
    }
}

/// Converts validation errors into 400 Bad Request responses carrying the field name.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected write on field {}: {}", self.field(), self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::with_field(self.to_string(), self.field())),
        )
            .into_response()
    }
}
