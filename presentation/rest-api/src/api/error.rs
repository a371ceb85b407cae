use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::ErrorKind;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Picks the transport status for a domain error kind.
pub fn error_response(kind: ErrorKind, message: String) -> (StatusCode, Json<ErrorResponse>) {
    let (status, name) = match kind {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "Conflict"),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "ValidationError"),
        ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
        ErrorKind::Transient => (StatusCode::SERVICE_UNAVAILABLE, "Unavailable"),
        ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
    };

    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message,
        }),
    )
}

pub fn validation_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    error_response(ErrorKind::Validation, message.to_string())
}

/// Routes an error status to the matching variant of a response enum.
///
/// The enum must declare `BadRequest`, `Forbidden`, `NotFound`, `Conflict`,
/// `Unavailable` and `InternalError` variants carrying `Json<ErrorResponse>`.
macro_rules! impl_error_variants {
    ($($response:ident),+ $(,)?) => {
        $(
            impl
                From<(
                    poem::http::StatusCode,
                    poem_openapi::payload::Json<$crate::api::error::ErrorResponse>,
                )> for $response
            {
                fn from(
                    (status, json): (
                        poem::http::StatusCode,
                        poem_openapi::payload::Json<$crate::api::error::ErrorResponse>,
                    ),
                ) -> Self {
                    match status.as_u16() {
                        400 => $response::BadRequest(json),
                        403 => $response::Forbidden(json),
                        404 => $response::NotFound(json),
                        409 => $response::Conflict(json),
                        503 => $response::Unavailable(json),
                        _ => $response::InternalError(json),
                    }
                }
            }
        )+
    };
}

pub(crate) use impl_error_variants;
