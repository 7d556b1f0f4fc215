//! HTTP client for the wapi2 REST API.
//!
//! Owns the connection pool, applies bearer authentication and the
//! per-request timeout, and turns every exchange into either a typed
//! `ApiResponse<T>` or a classified `WapiError`. No request is retried.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use wapi_core::config::ClientConfig;
use wapi_core::constants;
use wapi_core::error::{WapiError, WapiResult};

use crate::response::{self, ApiResponse};

/// Client for the wapi2 messaging gateway.
///
/// Cheap to clone; clones share one connection pool and one shutdown
/// state. Safe to use from many tasks at once.
#[derive(Clone)]
pub struct WapiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Connection pool; `None` once the client has been shut down.
    http: RwLock<Option<Client>>,
    /// Base URL every endpoint path is appended to.
    base_url: Url,
    /// Per-request timeout.
    timeout: Duration,
}

impl WapiClient {
    /// Create a client from configuration.
    ///
    /// Fails with a Validation error when the token is empty or the base
    /// URL is not an absolute http(s) URL.
    pub fn new(config: &ClientConfig) -> WapiResult<Self> {
        if config.token.is_empty() {
            return Err(WapiError::validation("authentication token is required"));
        }

        let sanitized = ClientConfig::sanitize_base_url(&config.base_url);
        let base_url = Url::parse(&sanitized)
            .map_err(|e| WapiError::validation(format!("invalid base url {sanitized:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(WapiError::validation(format!(
                "invalid base url {sanitized:?}: expected an http or https URL"
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| WapiError::validation("authentication token contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let timeout = Duration::from_millis(config.timeout_ms);
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(constants::default_user_agent);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90));

        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| {
            WapiError::unexpected(format!("failed to build HTTP client: {e}"), format!("{e:?}"))
        })?;

        debug!("wapi client created for {base_url}");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http: RwLock::new(Some(http)),
                base_url,
                timeout,
            }),
        })
    }

    /// Create a client for the default base URL.
    pub fn with_token(token: impl Into<String>) -> WapiResult<Self> {
        Self::new(&ClientConfig::with_token(token))
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Release the connection pool. Later calls are no-ops and every
    /// operation afterwards fails without network I/O.
    pub async fn shutdown(&self) {
        let mut guard = self.inner.http.write().await;
        if guard.take().is_some() {
            debug!("wapi client shut down, connection pool released");
        }
    }

    /// Whether `shutdown` has been called on this client or a clone.
    pub async fn is_shut_down(&self) -> bool {
        self.inner.http.read().await.is_none()
    }

    /// Build the URL for an endpoint from path segments and an optional
    /// `session_id` query parameter. Segments are percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str], session_id: Option<&str>) -> WapiResult<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WapiError::validation("base url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        if let Some(id) = session_id {
            url.query_pairs_mut().append_pair("session_id", id);
        }
        Ok(url)
    }

    // --- HTTP primitives ---

    /// GET and decode the response envelope.
    pub(crate) async fn get<T>(&self, url: Url) -> WapiResult<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.send(Method::GET, url, None).await
    }

    /// POST a JSON body and decode the response envelope.
    pub(crate) async fn post<T, B>(&self, url: Url, body: &B) -> WapiResult<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_string(body).map_err(|e| {
            WapiError::unexpected(format!("failed to serialize request body: {e}"), format!("{e:?}"))
        })?;
        self.send(Method::POST, url, Some(json)).await
    }

    /// POST without a body.
    pub(crate) async fn post_empty<T: DeserializeOwned + Default>(
        &self,
        url: Url,
    ) -> WapiResult<ApiResponse<T>> {
        self.send(Method::POST, url, None).await
    }

    async fn transport(&self) -> WapiResult<Client> {
        self.inner
            .http
            .read()
            .await
            .clone()
            .ok_or_else(|| WapiError::unknown("client has been shut down"))
    }

    async fn send<T: DeserializeOwned + Default>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> WapiResult<ApiResponse<T>> {
        let http = self.transport().await?;
        let path = url.path().to_string();
        debug!("{} {}", method, path);

        let mut builder = http.request(method.clone(), url);
        if let Some(json) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(json);
        }

        let result = Self::exchange(builder)
            .await
            .and_then(|(status, text)| response::parse_response(status, &text));

        if let Err(ref e) = result {
            warn!(
                kind = %e.kind(),
                status = e.status_code(),
                "{} {} failed: {}",
                method,
                path,
                e
            );
        }
        result
    }

    /// Send the request and read the full body as text.
    async fn exchange(builder: RequestBuilder) -> WapiResult<(u16, String)> {
        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;
        Ok((status, body))
    }
}

impl fmt::Debug for WapiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WapiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Classify a reqwest error into a WapiError.
fn classify_error(e: reqwest::Error) -> WapiError {
    if e.is_timeout() {
        WapiError::timeout()
    } else if e.is_connect() || e.is_request() || e.is_body() {
        WapiError::network(format!("connection failed: {e}"))
    } else {
        WapiError::unexpected(&e, format!("{e:?}"))
    }
}
