use crate::{
    auth::{Authentication, BasicAuth, BearerAuth},
    error::{WncError, WncResult},
};
use std::{env, fmt, sync::Arc, time::Duration};
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const ENV_CONTROLLER: &str = "WNC_CONTROLLER";
pub const ENV_ACCESS_TOKEN: &str = "WNC_ACCESS_TOKEN";
pub const ENV_USERNAME: &str = "WNC_USERNAME";
pub const ENV_PASSWORD: &str = "WNC_PASSWORD";
pub const ENV_INSECURE: &str = "WNC_INSECURE";
pub const ENV_TIMEOUT_SECS: &str = "WNC_TIMEOUT_SECS";

/// Everything needed to build a [`WncClient`](crate::WncClient)
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) base_url: Url,
    pub(crate) auth: Arc<dyn Authentication>,
    pub(crate) timeout: Duration,
    pub(crate) insecure_skip_verify: bool,
    pub(crate) user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build a configuration from `WNC_*` environment variables.
    ///
    /// `WNC_ACCESS_TOKEN` takes precedence over `WNC_USERNAME`/`WNC_PASSWORD`.
    pub fn from_env() -> WncResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> WncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let controller = lookup(ENV_CONTROLLER)
            .ok_or_else(|| WncError::config(format!("{} is not set", ENV_CONTROLLER)))?;
        let mut builder = Self::builder().controller(controller);

        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|t| !t.is_empty()) {
            builder = builder.access_token(token);
        } else if let (Some(user), Some(pass)) = (lookup(ENV_USERNAME), lookup(ENV_PASSWORD)) {
            builder = builder.basic_auth(user, pass);
        }

        if let Some(flag) = lookup(ENV_INSECURE) {
            builder = builder.insecure_skip_verify(parse_flag(&flag)?);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                WncError::config(format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    pub(crate) fn http_client(&self) -> WncResult<reqwest::Client> {
        let builder = reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.insecure_skip_verify);

        builder
            .build()
            .map_err(|e| WncError::config(format!("failed to build HTTP client: {}", e)))
    }
}

fn parse_flag(value: &str) -> WncResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(WncError::config(format!(
            "{} must be a boolean, got `{}`",
            ENV_INSECURE, other
        ))),
    }
}

enum Credentials {
    Basic { username: String, password: String },
    Token(String),
    Bearer(String),
    Custom(Arc<dyn Authentication>),
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    controller: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    insecure_skip_verify: bool,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Controller address: `host`, `host:port` or a full `https://` URL
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Pre-encoded `base64(user:password)` token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Token(token.into()));
        self
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(token.into()));
        self
    }

    pub fn auth(mut self, auth: impl Authentication + 'static) -> Self {
        self.credentials = Some(Credentials::Custom(Arc::new(auth)));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Accept self-signed controller certificates
    pub fn insecure_skip_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify = insecure;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> WncResult<ClientConfig> {
        let controller = self
            .controller
            .ok_or_else(|| WncError::config("controller address is required"))?;
        let base_url = parse_controller(&controller)?;

        let auth: Arc<dyn Authentication> = match self.credentials {
            Some(Credentials::Basic { username, password }) => {
                if username.is_empty() {
                    return Err(WncError::config("username must not be empty"));
                }
                Arc::new(BasicAuth::new(username, password))
            }
            Some(Credentials::Token(token)) => Arc::new(BasicAuth::from_token(token)?),
            Some(Credentials::Bearer(token)) => {
                if token.is_empty() {
                    return Err(WncError::config("bearer token must not be empty"));
                }
                Arc::new(BearerAuth::new(token))
            }
            Some(Credentials::Custom(auth)) => auth,
            None => return Err(WncError::config("credentials are required")),
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(WncError::config("timeout must be greater than zero"));
        }

        Ok(ClientConfig {
            base_url,
            auth,
            timeout,
            insecure_skip_verify: self.insecure_skip_verify,
            user_agent: self.user_agent.unwrap_or_else(|| {
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
            }),
        })
    }
}

/// Normalize a controller address into a base URL ending in `/`
pub(crate) fn parse_controller(controller: &str) -> WncResult<Url> {
    let controller = controller.trim();
    if controller.is_empty() {
        return Err(WncError::config("controller address must not be empty"));
    }

    let with_scheme = if controller.contains("://") {
        controller.to_string()
    } else {
        format!("https://{}", controller)
    };

    let mut url = Url::parse(&with_scheme)
        .map_err(|e| WncError::config(format!("invalid controller address `{}`: {}", controller, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(WncError::config(format!(
            "unsupported scheme `{}` for controller",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(WncError::config(format!("controller `{}` has no host", controller)));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
