use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            CatalogError::Repository(e) => e.to_string(),
            other => other.to_string(),
        };
        error_response(self.kind(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_in_use_to_conflict() {
        let (status, json) = CatalogError::CategoryInUse { blocking: 2 }.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "catalog.category_in_use");
    }

    #[test]
    fn should_map_forbidden_and_not_found() {
        let (forbidden, _) = CatalogError::Forbidden.into_error_response();
        let (missing, _) = CatalogError::ProductNotFound.into_error_response();

        assert_eq!(forbidden, StatusCode::FORBIDDEN);
        assert_eq!(missing, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_expose_repository_code() {
        let (status, json) =
            CatalogError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.database_error");
    }
}
