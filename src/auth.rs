use crate::error::{WncError, WncResult};
use base64::{engine::general_purpose, Engine};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;

/// Authentication applied to every RESTCONF request
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Apply authentication to the request headers
    async fn apply_auth(&self, headers: &mut HeaderMap) -> WncResult<()>;
}

fn authorization_value(value: String) -> WncResult<HeaderValue> {
    let mut header: HeaderValue = value
        .parse()
        .map_err(|e| WncError::auth_error(format!("Invalid auth header: {}", e)))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Basic authentication for the controller's local user database.
///
/// The controller expects the usual `user:password` pair base64 encoded;
/// tooling around the 9800 frequently hands out that token pre-encoded,
/// which [`BasicAuth::from_token`] accepts as-is.
#[derive(Clone)]
pub struct BasicAuth {
    token: String,
}

impl BasicAuth {
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        Self {
            token: general_purpose::STANDARD.encode(credentials.as_bytes()),
        }
    }

    /// Use an already encoded `base64(user:password)` token
    pub fn from_token(token: impl Into<String>) -> WncResult<Self> {
        let token = token.into();
        let decoded = general_purpose::STANDARD
            .decode(token.trim())
            .map_err(|e| WncError::config(format!("access token is not valid base64: {}", e)))?;
        if !decoded.contains(&b':') {
            return Err(WncError::config(
                "access token must encode `username:password`",
            ));
        }
        Ok(Self {
            token: token.trim().to_string(),
        })
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth").field("token", &"<redacted>").finish()
    }
}

#[async_trait::async_trait]
impl Authentication for BasicAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> WncResult<()> {
        headers.insert(
            AUTHORIZATION,
            authorization_value(format!("Basic {}", self.token))?,
        );
        Ok(())
    }
}

/// Bearer token authentication
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").field("token", &"<redacted>").finish()
    }
}

#[async_trait::async_trait]
impl Authentication for BearerAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> WncResult<()> {
        headers.insert(
            AUTHORIZATION,
            authorization_value(format!("Bearer {}", self.token))?,
        );
        Ok(())
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authentication for NoAuth {
    async fn apply_auth(&self, _headers: &mut HeaderMap) -> WncResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn basic_auth_encodes_credentials() {
        let mut headers = HeaderMap::new();
        BasicAuth::new("admin", "secret")
            .apply_auth(&mut headers)
            .await
            .unwrap();
        assert_eq!(headers[AUTHORIZATION], "Basic YWRtaW46c2VjcmV0");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[tokio::test]
    async fn token_is_used_verbatim() {
        let mut headers = HeaderMap::new();
        BasicAuth::from_token("YWRtaW46c2VjcmV0\n")
            .unwrap()
            .apply_auth(&mut headers)
            .await
            .unwrap();
        assert_eq!(headers[AUTHORIZATION], "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(matches!(
            BasicAuth::from_token("not base64!"),
            Err(WncError::Config(_))
        ));
        // "admin" without a colon
        assert!(BasicAuth::from_token("YWRtaW4=").is_err());
    }

    #[tokio::test]
    async fn bearer_and_none() {
        let mut headers = HeaderMap::new();
        BearerAuth::new("abc").apply_auth(&mut headers).await.unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");

        let mut headers = HeaderMap::new();
        NoAuth.apply_auth(&mut headers).await.unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn debug_redacts_secrets() {
        let shown = format!("{:?}", BasicAuth::new("admin", "secret"));
        assert!(!shown.contains("YWRtaW46c2VjcmV0"));
        assert!(format!("{:?}", BearerAuth::new("abc")).contains("redacted"));
    }
}
