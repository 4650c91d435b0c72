use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use club_server_domain::ServiceError;

use crate::views;

/// Handler error rendered as an HTML error page.
#[derive(Debug)]
pub enum AppError {
    Service(ServiceError),
    /// A request body or path an extractor could not parse.
    Rejected { status: StatusCode, message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Service(ServiceError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Service(ServiceError::Unauthorized(msg)) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Service(ServiceError::BadRequest(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Service(ServiceError::Internal(msg)) => {
                log::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side. Please try again later.".to_string(),
                )
            }
            AppError::Rejected { status, message } => {
                log::debug!("Rejected request: {} {}", status.as_u16(), message);
                (status, message)
            }
        };
        (status, views::error_page(status, &message)).into_response()
    }
}
