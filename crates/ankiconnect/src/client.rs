//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::actions::{DeckActions, GuiActions, MediaActions, MiscActions, ModelActions, NoteActions};
use crate::error::{Error, Result};
use crate::request::{PROTOCOL_VERSION, Request, Response};

/// Default URL for AnkiConnect.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable overriding the endpoint URL.
pub const URL_ENV: &str = "ANKICONNECT_URL";

/// Environment variable supplying the API key.
pub const API_KEY_ENV: &str = "ANKICONNECT_API_KEY";

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// The main client for interacting with AnkiConnect.
///
/// Operations are grouped by domain and reached through borrowed views
/// such as [`decks()`](Self::decks) or [`notes()`](Self::notes).
///
/// # Example
///
/// ```no_run
/// use ankiconnect::AnkiClient;
///
/// # async fn example() -> ankiconnect::Result<()> {
/// let client = AnkiClient::new()?;
/// let version = client.misc().version().await?;
/// println!("AnkiConnect version: {}", version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
    version: u32,
}

impl AnkiClient {
    /// Create a client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 60 second timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// The protocol version sent with each request.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether a server reporting `found` speaks this client's protocol.
    pub fn supports(&self, found: u32) -> bool {
        found >= self.version
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access model (note type) operations.
    pub fn models(&self) -> ModelActions<'_> {
        ModelActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access media operations.
    pub fn media(&self) -> MediaActions<'_> {
        MediaActions { client: self }
    }

    /// Access GUI operations.
    pub fn gui(&self) -> GuiActions<'_> {
        GuiActions { client: self }
    }

    /// Access version, sync and other miscellaneous operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// Execute an action with parameters and decode its result.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.post(action, Some(params)).await?.into_result()
    }

    /// Execute an action without parameters and decode its result.
    pub(crate) async fn invoke_bare<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.post(action, None::<()>).await?.into_result()
    }

    /// Execute an action whose result carries no information.
    pub(crate) async fn invoke_unit<P>(&self, action: &str, params: P) -> Result<()>
    where
        P: Serialize,
    {
        self.post(action, Some(params)).await?.into_unit()
    }

    /// Execute a parameterless action whose result carries no information.
    pub(crate) async fn invoke_unit_bare(&self, action: &str) -> Result<()> {
        self.post(action, None::<()>).await?.into_unit()
    }

    async fn post<P: Serialize>(&self, action: &str, params: Option<P>) -> Result<Response> {
        let request = Request::new(action, self.version, self.api_key.as_deref(), params);
        let body = serde_json::to_vec(&request)?;

        debug!(action, url = %self.base_url, "sending AnkiConnect request");

        let response = self
            .http_client
            .post(&self.base_url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))
            .header(ACCEPT, HeaderValue::from_static(JSON_UTF8))
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        trace!(action, status = status.as_u16(), len = bytes.len(), "received response");

        if !status.is_success() {
            return match serde_json::from_slice::<Response>(&bytes) {
                Ok(Response {
                    error: Some(message),
                    ..
                }) => {
                    warn!(action, status = status.as_u16(), error = %message, "AnkiConnect error");
                    Err(Error::from_envelope(message))
                }
                _ => Err(Error::Status(status.as_u16())),
            };
        }

        let envelope: Response = serde_json::from_slice(&bytes)?;
        if let Some(message) = &envelope.error {
            warn!(action, error = %message, "AnkiConnect error");
        }
        Ok(envelope)
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ankiconnect::AnkiClient;
///
/// # fn example() -> ankiconnect::Result<()> {
/// let client = AnkiClient::builder()
///     .host("localhost")
///     .port(8765)
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    version: u32,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            version: PROTOCOL_VERSION,
        }
    }

    /// Create a builder from the defaults plus `ANKICONNECT_URL` and
    /// `ANKICONNECT_API_KEY`, when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Self::new();
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.is_empty()) {
            builder = builder.url(url);
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            builder = builder.api_key(key);
        }
        builder
    }

    /// Set the full AnkiConnect URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Point at `http://{host}:{port}`, keeping the current port.
    pub fn host(self, host: &str) -> Self {
        let port = self.port_or_default();
        self.url(format!("http://{host}:{port}"))
    }

    /// Change the port, keeping the current host.
    pub fn port(self, port: u16) -> Self {
        let host = self.host_or_default();
        self.url(format!("http://{host}:{port}"))
    }

    /// Set the API key for authentication.
    ///
    /// Only required if AnkiConnect is configured to require one.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout. Defaults to 60 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Set the protocol version sent with requests. Defaults to 6.
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AnkiClient> {
        if self.base_url.is_empty() {
            return Err(Error::Config("AnkiConnect URL is empty".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "AnkiConnect URL must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        let http_client = Client::builder().timeout(self.timeout).build()?;

        Ok(AnkiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
            version: self.version,
        })
    }

    fn authority(&self) -> &str {
        let rest = self
            .base_url
            .split_once("://")
            .map_or(self.base_url.as_str(), |(_, rest)| rest);
        rest.split('/').next().unwrap_or(rest)
    }

    /// Split the authority into host and port; bracketed IPv6 hosts keep
    /// their colons.
    fn host_and_port(&self) -> (&str, Option<&str>) {
        let authority = self.authority();
        if authority.starts_with('[') {
            return match authority.split_once(']') {
                Some((_, rest)) => {
                    let host = &authority[..authority.len() - rest.len()];
                    (host, rest.strip_prefix(':'))
                }
                None => (authority, None),
            };
        }
        match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    }

    fn host_or_default(&self) -> String {
        self.host_and_port().0.to_string()
    }

    fn port_or_default(&self) -> u16 {
        self.host_and_port()
            .1
            .and_then(|port| port.parse().ok())
            .unwrap_or(8765)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
