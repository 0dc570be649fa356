use actix_web::{
    HttpResponse, ResponseError,
    error::{BlockingError, JsonPayloadError},
    http::{StatusCode, header::ContentType},
    web::Json,
};

use argon2::password_hash::errors::Error as Argon2Error;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

pub type ServiceResult<T> = core::result::Result<T, ServiceError>;

macro_rules! static_error {
    ($name:ident, $kind:expr, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                error: $kind,
                param: None,
                message: message.to_string(),
                code: $status.as_u16(),
            }
        }
    };

    ($name:ident, $kind:expr, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                error: $kind,
                param: None,
                message: $default.to_string(),
                code: $status.as_u16(),
            }
        }
    };
}

macro_rules! param_error {
    ($name:ident, $kind:expr, $status:expr, $prefix:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(param: impl ToString) -> AppError {
            let param = param.to_string();
            AppError {
                error: $kind,
                message: format!("{}: {}", $prefix, param),
                param: Some(param),
                code: $status.as_u16(),
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ErrorKind {
    EmptyData,
    MissingParam,
    InvalidParam,
    ServerError,
    BadRequest,
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub error: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub message: String,
    pub code: u16,
}

#[rustfmt::skip]
pub mod message {
    pub static EMPTY_DATA: &str = "No sign up data was received";
    pub static MISSING_PARAM: &str = "Missing param";
    pub static INVALID_PARAM: &str = "Invalid param";
    pub static PASSWORD_MISMATCH: &str = "Invalid param: password and password confirmation are not the same";
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, ErrorKind::BadRequest, StatusCode::BAD_REQUEST);
    static_error!(ServerError, ErrorKind::ServerError, StatusCode::INTERNAL_SERVER_ERROR);

    // 2. Errors naming the offending field
    param_error!(MissingParam, ErrorKind::MissingParam, StatusCode::BAD_REQUEST, message::MISSING_PARAM);
    param_error!(InvalidParam, ErrorKind::InvalidParam, StatusCode::BAD_REQUEST, message::INVALID_PARAM);

    // 3. Errors with Default Message
    static_error!(EmptyData, ErrorKind::EmptyData, StatusCode::BAD_REQUEST, message::EMPTY_DATA);

    #[allow(non_snake_case)]
    pub fn PasswordMismatch() -> AppError {
        AppError {
            message: message::PASSWORD_MISMATCH.to_string(),
            ..AppError::InvalidParam("passwordConfirmation")
        }
    }

    pub fn example_400() -> AppError {
        AppError::MissingParam("name")
    }

    pub fn example_500() -> AppError {
        AppError::ServerError(message::INTERNAL_ERROR)
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

/// Failure raised by a sign up collaborator: the email check, the password
/// encrypter or the account repository.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{0}")]
    PasswordHash(String),
    #[error("{0}")]
    Unexpected(String),
}

impl From<Argon2Error> for ServiceError {
    fn from(error: Argon2Error) -> Self {
        ServiceError::PasswordHash(error.to_string())
    }
}

impl From<BlockingError> for ServiceError {
    fn from(error: BlockingError) -> Self {
        ServiceError::Unexpected(error.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(error: ServiceError) -> Self {
        AppError::ServerError(error)
    }
}
