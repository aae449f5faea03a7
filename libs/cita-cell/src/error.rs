// libs/cita-cell/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use shared_models::error::AppError;

use crate::models::{CitaError, MSG_CITA_NO_ENCONTRADA, MSG_ERROR_CITAS_HOY};

/// The handler an error surfaced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
    ListByMonth,
    ListToday,
}

impl Operation {
    /// Store failures during writes are reported as client errors.
    pub fn is_write(&self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }
}

impl CitaError {
    pub fn into_app_error(self, operation: Operation) -> AppError {
        match self {
            CitaError::MissingParameter(message) | CitaError::InvalidInput(message) => {
                AppError::BadRequest(message)
            }
            CitaError::Validation(message) | CitaError::Upstream(message) => {
                if operation.is_write() {
                    AppError::BadRequest(message)
                } else {
                    AppError::Internal(message)
                }
            }
        }
    }
}

pub fn cita_not_found() -> AppError {
    AppError::NotFound(MSG_CITA_NO_ENCONTRADA.to_string())
}

/// Failure body of `GET /citas/hoy`: `{ "mensaje": ..., "error": ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaFailure {
    pub error: String,
}

impl From<CitaError> for AgendaFailure {
    fn from(error: CitaError) -> Self {
        Self { error: error.to_string() }
    }
}

impl IntoResponse for AgendaFailure {
    fn into_response(self) -> Response {
        tracing::error!("{}: {}", MSG_ERROR_CITAS_HOY, self.error);

        let body = Json(json!({
            "mensaje": MSG_ERROR_CITAS_HOY,
            "error": self.error
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operation; 7] = [
        Operation::Create,
        Operation::List,
        Operation::Get,
        Operation::Update,
        Operation::Delete,
        Operation::ListByMonth,
        Operation::ListToday,
    ];

    #[test]
    fn test_upstream_errors_split_by_operation() {
        for operation in ALL {
            let mapped = CitaError::Upstream("connection refused".to_string()).into_app_error(operation);
            let expected = if operation.is_write() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            assert_eq!(mapped.status(), expected, "{:?}", operation);
            assert_eq!(mapped.message(), "connection refused");
        }
    }

    #[test]
    fn test_validation_on_create_is_bad_request_verbatim() {
        let mapped = CitaError::Validation("missing field `fecha`".to_string())
            .into_app_error(Operation::Create);
        assert_eq!(mapped, AppError::BadRequest("missing field `fecha`".to_string()));
    }

    #[test]
    fn test_same_failure_on_list_is_internal() {
        let mapped = CitaError::Validation("missing field `fecha`".to_string())
            .into_app_error(Operation::List);
        assert_eq!(mapped, AppError::Internal("missing field `fecha`".to_string()));
    }

    #[test]
    fn test_parameter_errors_are_always_bad_request() {
        for operation in ALL {
            assert_eq!(
                CitaError::MissingParameter("m".into()).into_app_error(operation).status(),
                StatusCode::BAD_REQUEST
            );
            assert_eq!(
                CitaError::InvalidInput("m".into()).into_app_error(operation).status(),
                StatusCode::BAD_REQUEST
            );
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = cita_not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Cita no encontrada");
    }

    #[test]
    fn test_agenda_failure_response() {
        let failure = AgendaFailure::from(CitaError::Upstream("timeout".to_string()));
        assert_eq!(failure.error, "timeout");
        assert_eq!(failure.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
