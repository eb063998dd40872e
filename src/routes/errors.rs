use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{
    HttpResponse,
    ResponseError,
};
use custom_error::custom_error;
use serde::Serialize;

use crate::domain::MalformedInput;
use crate::upstream::UpstreamError;

custom_error! {
///! Error inside route handler
pub RouteError
    InvalidInput{source:MalformedInput} = "{source}",
    Upstream{source:UpstreamError} = "{source}",
    MalformedAiResponse{source:serde_json::Error} = "The AI response is not valid JSON: {source}",
    UnexpectedQuestionShape{message:String} = "The AI response is not a valid question set: \
    {message}",
}

/// Whether upstream failure details reach the caller.
#[derive(Clone, Copy, Debug)]
pub struct ErrorReporting {
    pub expose_details: bool,
}

impl ErrorReporting {
    /// Logs `error` and wraps it in the response sent for a failed `summary`.
    pub fn report(&self, summary: &'static str, error: RouteError) -> ApiError {
        match &error {
            RouteError::InvalidInput { .. } => tracing::warn!("{}: {}", summary, error),
            _ => tracing::error!("{}: {}", summary, error),
        }
        ApiError {
            summary,
            error,
            expose_details: self.expose_details,
        }
    }
}

/// A [`RouteError`] as seen by the caller.
#[derive(Debug)]
pub struct ApiError {
    summary: &'static str,
    error: RouteError,
    expose_details: bool,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    fn details(&self) -> Option<String> {
        if self.expose_details {
            Some(self.error.to_string())
        } else {
            None
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.error {
            RouteError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            RouteError::Upstream { .. }
            | RouteError::MalformedAiResponse { .. }
            | RouteError::UnexpectedQuestionShape { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match &self.error {
            RouteError::InvalidInput { source } => HttpResponse::BadRequest().json(ErrorBody {
                error: &source.to_string(),
                details: None,
            }),
            RouteError::Upstream { .. } => HttpResponse::InternalServerError().json(ErrorBody {
                error: self.summary,
                details: self.details(),
            }),
            RouteError::MalformedAiResponse { .. }
            | RouteError::UnexpectedQuestionShape { .. } => {
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: "Failed to parse AI response",
                    details: self.details(),
                })
            }
        }
    }
}
