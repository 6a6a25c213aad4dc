use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "internal server error";
const BASIC_CHALLENGE: &str = r#"Basic realm="Restricted", charset="UTF-8""#;

/// Error response for both JSON and HTML routes. Internal failures are
/// reduced to a fixed message; the cause is logged where it was observed.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    validation_errors: Vec<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "validation failed".into(),
                validation_errors: errors.messages(),
            },
            ApplicationError::BadRequest(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Infrastructure(_) => Self::internal(),
            ApplicationError::Domain(DomainError::Validation(msg)) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "validation failed".into(),
                validation_errors: vec![msg],
            },
            ApplicationError::Domain(DomainError::Persistence(_)) => Self::internal(),
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            validation_errors: Vec::new(),
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status;
        let payload = ErrorBody {
            error: status.canonical_reason().unwrap_or("error").to_string(),
            message: self.message,
            validation_errors: self.validation_errors,
        };
        let mut response = (status, Json(payload)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(BASIC_CHALLENGE));
        }
        response
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    validation_errors: Vec<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
