use thiserror::Error;

/// WNC client error types
#[derive(Error, Debug)]
pub enum WncError {
    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {path} timed out")]
    Timeout { path: String },

    #[error("Failed to decode response from {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// Result type for WNC operations
pub type WncResult<T> = Result<T, WncError>;

impl WncError {
    /// Create an API error from a status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn auth_error(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status carried by the error, if the controller answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(_) => Some(401),
            Self::PermissionDenied(_) => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_variant() {
        assert_eq!(WncError::not_found("x").status(), Some(404));
        assert_eq!(WncError::api_error(503, "busy").status(), Some(503));
        assert_eq!(WncError::config("no host").status(), None);
        assert!(WncError::not_found("x").is_not_found());
        assert!(!WncError::auth_error("denied").is_not_found());
    }

    #[test]
    fn display_includes_path() {
        let err = WncError::not_found("Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data");
        assert_eq!(
            err.to_string(),
            "Not found: Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data"
        );
    }
}
