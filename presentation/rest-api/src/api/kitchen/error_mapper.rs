use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::kitchen::errors::KitchenError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for KitchenError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            KitchenError::Repository(e) => e.to_string(),
            other => other.to_string(),
        };
        error_response(self.kind(), message)
    }
}
