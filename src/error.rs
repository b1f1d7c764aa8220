//! Common error type and alias.
//!
//! Every failure the handler can produce is one of these variants. Method and
//! field problems are answered locally; everything from the upstream call on
//! collapses into a 500 carrying only the display text.
use axum::http::StatusCode;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing required fields: originalImage and maskImage are required")]
    MissingFields,

    #[error("Inpainting API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("No output received from inpainting API")]
    NoOutput,

    #[error("{0}")]
    HttpClient(#[from] reqwest::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::NoOutput | AppError::HttpClient(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Caller-facing text. Never empty.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            msg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_rejections_keep_their_status() {
        assert_eq!(AppError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(AppError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MethodNotAllowed.message(), "Method not allowed");
        assert_eq!(
            AppError::MissingFields.message(),
            "Missing required fields: originalImage and maskImage are required"
        );
    }

    #[test]
    fn upstream_failures_are_internal_errors() {
        let err = AppError::Upstream { status: 503, body: "overloaded".into() };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Inpainting API error: 503 - overloaded");

        assert_eq!(AppError::NoOutput.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::NoOutput.message(), "No output received from inpainting API");
    }

    #[test]
    fn upstream_error_with_empty_body_still_has_a_message() {
        let err = AppError::Upstream { status: 502, body: String::new() };
        assert_eq!(err.message(), "Inpainting API error: 502 - ");
    }
}
