use reqwest::StatusCode;
use serde::Deserialize;

pub type Result<T> = std::result::Result<T, Error>;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Session expired, login required")]
    SessionExpired,

    #[error(transparent)]
    StageEdit(#[from] crate::editor::StageEditError),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body shapes returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl Error {
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::BadRequest(message),
            StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
            StatusCode::FORBIDDEN => Error::Forbidden(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            StatusCode::CONFLICT => Error::Conflict(message),
            other => Error::Api {
                status: other.as_u16(),
                message,
            },
        }
    }

    /// Picks the server-supplied message out of an error body, falling back to
    /// the raw text and then to the status reason.
    pub fn server_message(status: StatusCode, body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(msg) = parsed.message.or(parsed.error) {
                if !msg.trim().is_empty() {
                    return msg;
                }
            }
        }
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::BadRequest(_) => Some(400),
            Error::Unauthorized(_) | Error::SessionExpired => Some(401),
            Error::Forbidden(_) => Some(403),
            Error::NotFound(_) => Some(404),
            Error::Conflict(_) => Some(409),
            Error::Api { status, .. } => Some(*status),
            Error::Reqwest(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Text for a transient notice. Backend and validation messages pass
    /// through verbatim; transport and unknown failures get a generic text.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(err) => err.to_string(),
            Error::BadRequest(msg)
            | Error::Unauthorized(msg)
            | Error::Forbidden(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg) => msg.clone(),
            Error::Api { message, .. } => message.clone(),
            Error::SessionExpired => "Your session has expired. Please log in again.".to_string(),
            Error::StageEdit(err) => err.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses_to_variants() {
        assert!(matches!(
            Error::from_status(StatusCode::NOT_FOUND, "Processo não encontrado"),
            Error::NotFound(_)
        ));
        assert!(matches!(
            Error::from_status(StatusCode::UNPROCESSABLE_ENTITY, "x"),
            Error::BadRequest(_)
        ));
        assert!(matches!(
            Error::from_status(StatusCode::CONFLICT, "x"),
            Error::Conflict(_)
        ));
        assert!(matches!(
            Error::from_status(StatusCode::BAD_GATEWAY, "x"),
            Error::Api { status: 502, .. }
        ));
    }

    #[test]
    fn server_message_prefers_json_fields() {
        let status = StatusCode::NOT_FOUND;
        assert_eq!(
            Error::server_message(status, r#"{"message":"Processo seletivo não encontrado"}"#),
            "Processo seletivo não encontrado"
        );
        assert_eq!(
            Error::server_message(status, r#"{"error":"not_found"}"#),
            "not_found"
        );
        assert_eq!(Error::server_message(status, "plain text"), "plain text");
        assert_eq!(Error::server_message(status, ""), "Not Found");
    }

    #[test]
    fn user_message_hides_transport_details() {
        let err = Error::Internal("pool exhausted".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE);

        let err = Error::Conflict("Processo já finalizado".to_string());
        assert_eq!(err.user_message(), "Processo já finalizado");
        assert_eq!(err.http_status(), Some(409));
    }
}
