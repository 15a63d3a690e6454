use crate::{
    apis::{
        AfcApi, ApApi, ClientApi, Dot11Api, GeneralApi, GeolocationApi, McastApi, PolicyTagApi,
        RfApi, RfTagApi, RrmApi, WlanApi,
    },
    auth::Authentication,
    config::{ClientConfig, DEFAULT_TIMEOUT},
    error::{WncError, WncResult},
    restconf::{self, RestconfErrors, YANG_DATA_JSON},
};
use bytes::Bytes;
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, ACCEPT, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, sync::Arc, time::Duration};
use url::Url;

/// RESTCONF client for a single Catalyst 9800 controller.
///
/// Cloning is cheap: clones share the connection pool and credentials.
#[derive(Clone)]
pub struct WncClient {
    client: Client,
    base_url: Url,
    auth: Arc<dyn Authentication>,
    request_timeout: Option<Duration>,
}

impl fmt::Debug for WncClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WncClient")
            .field("base_url", &self.base_url.as_str())
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl WncClient {
    /// Create a new client with authentication and default transport settings
    pub fn new(
        controller: impl AsRef<str>,
        auth: impl Authentication + 'static,
    ) -> WncResult<Self> {
        let config = ClientConfig::builder()
            .controller(controller.as_ref())
            .auth(auth)
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &ClientConfig) -> WncResult<Self> {
        Ok(Self {
            client: config.http_client()?,
            base_url: config.base_url.clone(),
            auth: Arc::clone(&config.auth),
            request_timeout: None,
        })
    }

    /// Build a client from `WNC_*` environment variables
    pub fn from_env() -> WncResult<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    /// Create a client with a custom reqwest client
    pub fn with_client(
        client: Client,
        controller: impl AsRef<str>,
        auth: impl Authentication + 'static,
    ) -> WncResult<Self> {
        Ok(Self {
            client,
            base_url: crate::config::parse_controller(controller.as_ref())?,
            auth: Arc::new(auth),
            request_timeout: None,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A handle whose requests must complete within `timeout`.
    ///
    /// Expiry surfaces as [`WncError::Timeout`]; the original client is
    /// left untouched.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            request_timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn ap(&self) -> ApApi<'_> {
        ApApi::new(self)
    }

    pub fn general(&self) -> GeneralApi<'_> {
        GeneralApi::new(self)
    }

    pub fn rrm(&self) -> RrmApi<'_> {
        RrmApi::new(self)
    }

    pub fn wlan(&self) -> WlanApi<'_> {
        WlanApi::new(self)
    }

    /// Policy tags (WLAN profile to policy profile mappings)
    pub fn policy_tags(&self) -> PolicyTagApi<'_> {
        PolicyTagApi::new(self)
    }

    pub fn rf(&self) -> RfApi<'_> {
        RfApi::new(self)
    }

    pub fn rf_tags(&self) -> RfTagApi<'_> {
        RfTagApi::new(self)
    }

    pub fn mcast(&self) -> McastApi<'_> {
        McastApi::new(self)
    }

    pub fn afc(&self) -> AfcApi<'_> {
        AfcApi::new(self)
    }

    pub fn dot11(&self) -> Dot11Api<'_> {
        Dot11Api::new(self)
    }

    pub fn geolocation(&self) -> GeolocationApi<'_> {
        GeolocationApi::new(self)
    }

    /// Wireless client operational data
    pub fn clients(&self) -> ClientApi<'_> {
        ClientApi::new(self)
    }

    /// `{base}/restconf/data/{path}`
    pub fn data_url(&self, path: &str) -> WncResult<Url> {
        Ok(self
            .base_url
            .join(&format!("{}/{}", restconf::DATA_ROOT, path.trim_start_matches('/')))?)
    }

    /// `{base}/restconf/operations/{operation}`
    pub fn operations_url(&self, operation: &str) -> WncResult<Url> {
        Ok(self.base_url.join(&format!(
            "{}/{}",
            restconf::OPERATIONS_ROOT,
            operation.trim_start_matches('/')
        ))?)
    }

    /// Build a request to the given URL with authentication
    pub async fn request(&self, method: Method, url: Url) -> WncResult<RequestBuilder> {
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, YANG_DATA_JSON);

        // Apply authentication
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;
        request = request.headers(headers);

        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        Ok(request)
    }

    /// GET a datastore resource and decode it into `T`.
    ///
    /// An empty body (the controller answers `204` for empty containers)
    /// decodes as `{}`.
    pub async fn get<T>(&self, path: &str) -> WncResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_raw(path).await?;
        decode(path, &body)
    }

    /// Like [`get`](Self::get), but a `404` becomes `Ok(None)`
    pub async fn get_optional<T>(&self, path: &str) -> WncResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(WncError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// GET a datastore resource and return the undecoded body
    pub async fn get_raw(&self, path: &str) -> WncResult<Bytes> {
        let url = self.data_url(path)?;
        let response = self.send(Method::GET, url, path, None).await?;
        response.bytes().await.map_err(|e| transport_error(e, path))
    }

    pub async fn post_void<B>(&self, path: &str, body: &B) -> WncResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.write(Method::POST, path, body).await
    }

    pub async fn put_void<B>(&self, path: &str, body: &B) -> WncResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.write(Method::PUT, path, body).await
    }

    pub async fn patch_void<B>(&self, path: &str, body: &B) -> WncResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.write(Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> WncResult<()> {
        let url = self.data_url(path)?;
        self.send(Method::DELETE, url, path, None).await?;
        Ok(())
    }

    /// Invoke a YANG RPC: POST `{"<module>:input": input}` to the
    /// operations resource
    pub async fn rpc<I>(&self, operation: &str, input: &I) -> WncResult<()>
    where
        I: Serialize + ?Sized,
    {
        let mut wrapper = serde_json::Map::new();
        wrapper.insert(restconf::rpc_input_key(operation), encode_value(operation, input)?);
        let body = encode(operation, &wrapper)?;

        let url = self.operations_url(operation)?;
        self.send(Method::POST, url, operation, Some(body)).await?;
        Ok(())
    }

    async fn write<B>(&self, method: Method, path: &str, body: &B) -> WncResult<()>
    where
        B: Serialize + ?Sized,
    {
        let body = encode(path, body)?;
        let url = self.data_url(path)?;
        self.send(method, url, path, Some(body)).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> WncResult<Response> {
        debug!("HTTP {} {}", method, url);
        let mut request = self.request(method, url).await?;

        if let Some(body) = body {
            debug!("Request body: {}", String::from_utf8_lossy(&body));
            request = request.header(CONTENT_TYPE, YANG_DATA_JSON).body(body);
        }

        let response = request.send().await.map_err(|e| transport_error(e, path))?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            self.handle_error_response(status, response, path).await
        }
    }

    /// Handle error responses
    async fn handle_error_response<T>(
        &self,
        status: StatusCode,
        response: Response,
        path: &str,
    ) -> WncResult<T> {
        // Try to parse the RESTCONF error envelope
        let error_message = match response.text().await {
            Ok(text) => serde_json::from_str::<RestconfErrors>(&text)
                .ok()
                .and_then(|errors| errors.summary())
                .unwrap_or_else(|| format!("HTTP {}", status)),
            Err(_) => format!("HTTP {}", status),
        };
        warn!("{} failed with {}: {}", path, status, error_message);

        match status {
            StatusCode::UNAUTHORIZED => Err(WncError::auth_error(error_message)),
            StatusCode::FORBIDDEN => Err(WncError::PermissionDenied(error_message)),
            StatusCode::NOT_FOUND => Err(WncError::not_found(path)),
            StatusCode::BAD_REQUEST => Err(WncError::invalid_param(error_message)),
            _ => Err(WncError::api_error(status.as_u16(), error_message)),
        }
    }
}

fn transport_error(error: reqwest::Error, path: &str) -> WncError {
    if error.is_timeout() {
        WncError::Timeout {
            path: path.to_string(),
        }
    } else {
        WncError::Http(error)
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> WncResult<T> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|source| WncError::Json {
        path: path.to_string(),
        source,
    })
}

fn encode<B: Serialize + ?Sized>(path: &str, body: &B) -> WncResult<Vec<u8>> {
    serde_json::to_vec(body).map_err(|source| WncError::Json {
        path: path.to_string(),
        source,
    })
}

fn encode_value<B: Serialize + ?Sized>(path: &str, body: &B) -> WncResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|source| WncError::Json {
        path: path.to_string(),
        source,
    })
}
