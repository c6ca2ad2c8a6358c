use std::fmt::Display;

use axum::http::StatusCode;

use super::{envy::Envy, models::api_error::ApiError};

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
        }
    }

    /// Logs `e` and converts it into the generic error, keeping the
    /// underlying message only when debug mode is on.
    pub fn from_error(e: &dyn Display, envy: &Envy) -> ApiError {
        tracing::error!(%e);

        match envy.debug {
            true => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            },
            false => Self::InternalServerError.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_detail_outside_debug_mode() {
        let envy = Envy::default();
        let error = DefaultApiError::from_error(&"disk I/O error", &envy);

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "An internal server error occurred.");
    }

    #[test]
    fn exposes_detail_in_debug_mode() {
        let envy = Envy {
            debug: true,
            ..Envy::default()
        };
        let error = DefaultApiError::from_error(&"disk I/O error", &envy);

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "disk I/O error");
    }
}
