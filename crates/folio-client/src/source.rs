//! Template source trait and HTTP implementation.
//!
//! [`TemplateSource`] is the only place the adapter touches the network.
//! [`HttpTemplateSource`] talks to the template API with `reqwest`; tests
//! substitute a mock.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::envelope::unwrap_envelope;
use crate::error::{Error, Result};
use crate::schema::BackendTemplateSchema;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where templates come from.
///
/// One call is one request: implementations do not retry or cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch one template schema by id.
    async fn fetch_template(&self, template_id: &str) -> Result<BackendTemplateSchema>;

    /// Fetch every template schema the backend knows.
    async fn fetch_templates(&self) -> Result<Vec<BackendTemplateSchema>>;

    /// Create or replace a template schema on the backend.
    async fn push_template(&self, schema: &BackendTemplateSchema) -> Result<()>;
}

// ============================================================================
// ClientConfig
// ============================================================================

/// Connection settings for [`HttpTemplateSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without the `/api` suffix
    pub base_url: String,
    /// Bearer token sent with every request, if set
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Config for the given base URL with default timeout and no token.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn templates_url(&self) -> String {
        format!("{}/api/templates", self.base_url.trim_end_matches('/'))
    }

    fn template_url(&self, template_id: &str) -> String {
        format!("{}/{template_id}", self.templates_url())
    }
}

// ============================================================================
// HttpTemplateSource
// ============================================================================

/// [`TemplateSource`] backed by the template REST API.
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTemplateSource {
    /// Build a source with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::config("template API base URL is empty"));
        }
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// The connection settings in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_payload(response: reqwest::Response, url: &str) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        let body: Value = serde_json::from_slice(&bytes)?;
        unwrap_envelope(body)
    }

    async fn get(&self, url: &str) -> Result<Value> {
        log::debug!("GET {url}");
        let response = self.authorize(self.client.get(url)).send().await?;
        Self::read_payload(response, url).await
    }
}

#[async_trait]
impl TemplateSource for HttpTemplateSource {
    async fn fetch_template(&self, template_id: &str) -> Result<BackendTemplateSchema> {
        let url = self.config.template_url(template_id);
        let payload = self.get(&url).await?;
        let schema: BackendTemplateSchema = serde_json::from_value(payload)?;
        log::info!("Fetched template '{template_id}' from backend");
        Ok(schema)
    }

    async fn fetch_templates(&self) -> Result<Vec<BackendTemplateSchema>> {
        let url = self.config.templates_url();
        let payload = self.get(&url).await?;
        let schemas: Vec<BackendTemplateSchema> = serde_json::from_value(payload)?;
        log::info!("Fetched {} templates from backend", schemas.len());
        Ok(schemas)
    }

    async fn push_template(&self, schema: &BackendTemplateSchema) -> Result<()> {
        let template_id = schema
            .template_id
            .as_deref()
            .ok_or_else(|| Error::config("cannot push a template schema without templateId"))?;
        let url = self.config.template_url(template_id);

        log::debug!("PUT {url}");
        let response = self
            .authorize(self.client.put(&url))
            .json(schema)
            .send()
            .await?;
        Self::read_payload(response, &url).await?;
        log::info!("Pushed template '{template_id}' to backend");
        Ok(())
    }
}
