use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::use_cases::{ChangeSeatsError, ErrorKind};

#[derive(Serialize)]
pub struct ApiError {
    success: bool,
    message: String,
}

/// Ошибка HTTP-слоя: каждая категория отображается в свой статус.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ChangeSeatsError> for AppError {
    fn from(err: ChangeSeatsError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => AppError::NotFound(err.to_string()),
            ErrorKind::Forbidden => AppError::Unauthorized(err.to_string()),
            ErrorKind::Validation => AppError::Validation(err.to_string()),
            ErrorKind::Storage => {
                tracing::error!("Storage failure: {:?}", err);
                // Детали хранилища клиенту не отдаём
                AppError::Storage("database error".to_string())
            }
        }
    }
}

// Тело не разобралось: такой же 400 и JSON-ответ, как у остальных ошибок
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiError {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::RepositoryError;

    #[test]
    fn maps_use_case_errors_to_statuses() {
        let cases = [
            (ChangeSeatsError::WebinarNotFound("x".to_string()), StatusCode::NOT_FOUND),
            (ChangeSeatsError::NotOrganizer, StatusCode::UNAUTHORIZED),
            (
                ChangeSeatsError::SeatsNotIncreased { current: 10, requested: 5 },
                StatusCode::BAD_REQUEST,
            ),
            (
                ChangeSeatsError::TooManySeats { requested: 1500, max: 1000 },
                StatusCode::BAD_REQUEST,
            ),
            (
                ChangeSeatsError::Repository(RepositoryError::Poisoned("lock".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn storage_details_are_hidden() {
        let err = AppError::from(ChangeSeatsError::Repository(RepositoryError::MissingRow(
            "secret-id".to_string(),
        )));
        assert!(!err.to_string().contains("secret-id"));
        assert_eq!(err.to_string(), "database error");
    }
}
