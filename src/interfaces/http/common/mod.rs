//! Common HTTP response shapes

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CatalogError, ErrorClass};

/// Standard success envelope. All endpoints wrap their payload in this.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded.
    pub success: bool,
    /// Payload. `null` on error.
    pub data: Option<T>,
    /// Error description. `null` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error payload for domain failures: stable code plus human message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status the error was served with.
    pub status: u16,
    /// Symbolic error name, e.g. `BRAND_NOT_FOUND`.
    pub name: String,
    /// Stable machine-readable code, e.g. `P001`.
    pub code: String,
    pub message: String,
}

fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::BadRequest => StatusCode::BAD_REQUEST,
        ErrorClass::Conflict => StatusCode::CONFLICT,
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = status_for(self.class());
        let body = ErrorBody {
            status: status.as_u16(),
            name: self.name().to_string(),
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_their_status_family() {
        assert_eq!(
            CatalogError::BrandNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::InvalidCategory.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::DataSaveError.into_response().status(),
            StatusCode::CONFLICT
        );
    }
}
