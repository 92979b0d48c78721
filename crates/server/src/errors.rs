use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// JSON error envelope: `{"error": title, "detail": message}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let detail = Some(e.to_string());
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", detail),
            // Conflicts (second specification for a motorcycle) answer 400
            ServiceError::Conflict(_) | ServiceError::Model(ModelError::Conflict(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "Conflict", detail)
            }
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", detail)
            }
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                error!(err = detail.as_deref().unwrap_or(""), "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let nf: JsonApiError = ServiceError::NotFound("motorcycle 7 not found".into()).into();
        assert_eq!(nf.status, StatusCode::NOT_FOUND);

        let conflict: JsonApiError = ServiceError::Conflict("already has one".into()).into();
        assert_eq!(conflict.status, StatusCode::BAD_REQUEST);

        let validation: JsonApiError =
            ServiceError::Model(ModelError::Validation("name required".into())).into();
        assert_eq!(validation.status, StatusCode::UNPROCESSABLE_ENTITY);

        let db: JsonApiError = ServiceError::Db("connection reset".into()).into();
        assert_eq!(db.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn race_lost_unique_violation_maps_to_conflict() {
        let e: JsonApiError =
            ServiceError::Model(ModelError::Conflict("motorcycle 1 already has a specification".into()))
                .into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
    }
}
