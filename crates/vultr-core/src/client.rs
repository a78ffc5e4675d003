//! The request dispatcher.
//!
//! [`VultrApi`] turns `(method, path, params)` into one authenticated HTTP exchange and
//! wraps whatever comes back in a [`VultrResponse`]. It is cheap to clone; every command
//! family holds its own copy.
//!
//! Wire behavior per generation:
//!
//! | | v1 | v2 |
//! |---|---|---|
//! | credential | `API-Key` header | `Authorization: Bearer` |
//! | POST/PUT/PATCH body | form-encoded parameters | JSON object, omitted when empty |
//! | GET | query string | query string |
//! | DELETE | no body | no body |
//!
//! Connections are never reused between requests and redirects are never followed.

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, RequestBuilder};
use secrecy::ExposeSecret;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::config::VultrConfig;
use crate::error::{Error, Result};
use crate::observer::{RequestObserver, RequestRecord, TracingObserver};
use crate::query::{form_pairs, Params};
use crate::response::VultrResponse;
use crate::types::{ApiVersion, LEGACY_KEY_HEADER};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("vultr-rs/", env!("CARGO_PKG_VERSION"));

/// Idle connections kept per host; zero disables reuse.
pub const IDLE_POOL_SIZE: usize = 0;

/// Builder for [`VultrApi`].
pub struct VultrApiBuilder {
    config: VultrConfig,
    observer: Arc<dyn RequestObserver>,
    user_agent: String,
}

impl VultrApiBuilder {
    /// Start from a configuration.
    #[must_use]
    pub fn new(config: VultrConfig) -> Self {
        Self {
            config,
            observer: Arc::new(TracingObserver),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Replace the request observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when the configuration is invalid, the key cannot
    /// be carried in a header, or the HTTP client cannot be created.
    pub fn build(self) -> Result<VultrApi> {
        let config = self.config.validated()?;
        let base_url = config.versioned_base_url()?;
        let (auth_name, auth_value) = auth_header(&config)?;

        let mut builder = Client::builder()
            .user_agent(self.user_agent)
            .timeout(config.timeout())
            .pool_max_idle_per_host(IDLE_POOL_SIZE)
            .redirect(Policy::none());

        if !config.tls_verify {
            warn!(base_url = %base_url, "TLS verification disabled for Vultr API client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(VultrApi {
            http,
            base_url,
            version: config.api_version,
            auth_name,
            auth_value,
            observer: self.observer,
        })
    }
}

fn auth_header(config: &VultrConfig) -> Result<(HeaderName, HeaderValue)> {
    let key = config.api_key.expose_secret();
    let (name, value) = match config.api_version {
        ApiVersion::V1 => (HeaderName::from_static("api-key"), key.to_string()),
        ApiVersion::V2 => (AUTHORIZATION, format!("Bearer {key}")),
    };

    let mut value = HeaderValue::from_str(&value).map_err(|_| {
        Error::ConfigError(format!(
            "API key contains characters that cannot be sent in the {} header",
            match config.api_version {
                ApiVersion::V1 => LEGACY_KEY_HEADER,
                ApiVersion::V2 => "Authorization",
            }
        ))
    })?;
    value.set_sensitive(true);
    Ok((name, value))
}

/// Authenticated dispatcher for one Vultr API generation.
#[derive(Clone)]
pub struct VultrApi {
    http: Client,
    base_url: Url,
    version: ApiVersion,
    auth_name: HeaderName,
    auth_value: HeaderValue,
    observer: Arc<dyn RequestObserver>,
}

impl fmt::Debug for VultrApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VultrApi")
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl VultrApi {
    /// Construct a dispatcher with the default observer.
    ///
    /// # Errors
    ///
    /// See [`VultrApiBuilder::build`].
    pub fn new(config: &VultrConfig) -> Result<Self> {
        VultrApiBuilder::new(config.clone()).build()
    }

    /// Versioned API root that request paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API generation this dispatcher talks to.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Perform one request and wrap the outcome.
    ///
    /// Never fails. A request that cannot be sent or gets no response is reported to the
    /// observer once and answered with a synthesized transport-failure envelope.
    pub async fn execute(&self, method: Method, path: &str, params: Params) -> VultrResponse {
        let target = format!("{}{}", self.base_url, path.trim_matches('/'));
        let record = RequestRecord::new(method.as_str(), target.clone(), params);

        self.observer.on_request(&record);

        let url = match Url::parse(&target) {
            Ok(url) => url,
            Err(err) => {
                self.observer
                    .on_transport_error(&record, &format!("Invalid request URL: {err}"));
                return VultrResponse::transport_failure(self.version);
            }
        };

        debug!(method = %method, url = %url, version = %self.version, "Executing Vultr request");

        let response = match self.prepare(method, url, &record.params).send().await {
            Ok(response) => response,
            Err(err) => {
                self.observer.on_transport_error(&record, &err.to_string());
                return VultrResponse::transport_failure(self.version);
            }
        };

        let status = response.status().as_u16();
        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(url = %record.url, status, error = %err, "Failed to read Vultr response body");
                String::new()
            }
        };

        debug!(url = %record.url, status, bytes = raw.len(), "Received Vultr response");
        VultrResponse::new(self.version, raw, status)
    }

    fn prepare(&self, method: Method, url: Url, params: &Params) -> RequestBuilder {
        let carries_body = matches!(method, Method::POST | Method::PUT | Method::PATCH);
        let is_get = method == Method::GET;

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(self.auth_name.clone(), self.auth_value.clone());

        match self.version {
            ApiVersion::V2 => {
                request = request.header(CONTENT_TYPE, "application/json");
                if carries_body && !params.is_empty() {
                    request = request.json(params);
                }
            }
            ApiVersion::V1 => {
                if carries_body {
                    request = request.form(&form_pairs(params));
                }
            }
        }

        if is_get && !params.is_empty() {
            request = request.query(&form_pairs(params));
        }

        request
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str, params: Params) -> VultrResponse {
        self.execute(Method::GET, path, params).await
    }

    /// Issue a POST request.
    pub async fn post(&self, path: &str, params: Params) -> VultrResponse {
        self.execute(Method::POST, path, params).await
    }

    /// Issue a PUT request.
    pub async fn put(&self, path: &str, params: Params) -> VultrResponse {
        self.execute(Method::PUT, path, params).await
    }

    /// Issue a PATCH request.
    pub async fn patch(&self, path: &str, params: Params) -> VultrResponse {
        self.execute(Method::PATCH, path, params).await
    }

    /// Issue a DELETE request. Parameters are not sent.
    pub async fn delete(&self, path: &str, params: Params) -> VultrResponse {
        self.execute(Method::DELETE, path, params).await
    }

    /// Answer an operation this API generation does not offer, without a network call.
    #[must_use]
    pub fn unsupported(&self, action: &str) -> VultrResponse {
        warn!(action, version = %self.version, "Operation not available in this Vultr API");
        VultrResponse::unsupported(self.version, action)
    }
}
