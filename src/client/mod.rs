//! Client layer: validates, applies per-call overrides, posts and classifies replies.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use tracing::debug;
use url::Url;

use crate::domain::{
    AuthorizationError, BinaryMessage, MessageResponse, OutgoingMessage, StatusCode, TextMessage,
    ValidationError, validate_credentials, validate_message,
};
use crate::transport::{WireMessage, decode_message_response};

const DEFAULT_BASE_URL: &str = "https://api.websms.com/json";
const CLIENT_ID: &str = "websms Rust SDK Client";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Holds the `Authorization` header value; never formatted or logged.
#[derive(Clone)]
struct HttpRequest {
    url: String,
    authorization: String,
    user_agent: String,
    body: String,
}

/// A response whose status line arrived. A failed body read keeps the status.
#[derive(Debug)]
struct HttpResponse {
    status: u16,
    body: Result<String, Box<dyn StdError + Send + Sync>>,
}

trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&request.url)
                .header(AUTHORIZATION, request.authorization)
                .header(CONTENT_TYPE, "application/json")
                .header(USER_AGENT, request.user_agent)
                .body(request.body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| Box::new(err) as Box<dyn StdError + Send + Sync>);
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Gateway account credentials used for HTTP Basic authentication.
///
/// Values are stored as given. Emptiness is reported when a message is sent, not here.
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn validate(&self) -> Result<(), AuthorizationError> {
        validate_credentials(&self.username, &self.password)
    }

    /// `Authorization` header value.
    fn basic_authorization(&self) -> String {
        let token = BASE64.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WebsmsClient`].
///
/// A send operation fails with exactly one of `Authorization`, `Validation`,
/// `HttpConnection` or `Api`. `Configuration` is only produced while building a client.
pub enum WebsmsError {
    /// Credentials are missing locally or were rejected by the gateway (HTTP 401).
    #[error("{0}")]
    Authorization(#[from] AuthorizationError),

    /// The message was not sent because it is malformed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No usable HTTP exchange. `status` is `0` when no response was received at all.
    #[error("{message} (HTTP status {status})")]
    HttpConnection {
        status: u16,
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The gateway answered but rejected the message.
    #[error("API error {status_code}: {status_message}")]
    Api {
        status_code: StatusCode,
        status_message: String,
    },

    /// Invalid base URL or HTTP client settings.
    #[error("configuration error: {0}")]
    Configuration(#[source] Box<dyn StdError + Send + Sync>),
}

impl WebsmsError {
    fn http_status(status: u16) -> Self {
        Self::HttpConnection {
            status,
            message: "HTTP request failed.".to_owned(),
            source: None,
        }
    }

    fn no_response(source: Box<dyn StdError + Send + Sync>) -> Self {
        Self::HttpConnection {
            status: 0,
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Whether repeating the same request may succeed.
    ///
    /// Transport failures and transient gateway codes are retryable; authorization,
    /// validation and other API rejections are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpConnection { .. } => true,
            Self::Api { status_code, .. } => status_code.is_retryable(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`WebsmsClient`].
///
/// Use this when you need to customize the base URL, proxy, timeout, or user-agent.
pub struct WebsmsClientBuilder {
    credentials: Credentials,
    base_url: String,
    proxy: Option<reqwest::Proxy>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl WebsmsClientBuilder {
    /// Create a builder with the default base URL and no proxy/timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            proxy: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway base URL. A trailing `/` is added when missing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Route requests through an outbound proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Without it, only the HTTP stack's own defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`WebsmsClient`].
    pub fn build(self) -> Result<WebsmsClient, WebsmsError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = self.proxy {
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| WebsmsError::Configuration(Box::new(err)))?;

        Ok(WebsmsClient {
            credentials: self.credentials,
            base_url,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level websms client.
///
/// Each send call validates locally, posts exactly one JSON request to
/// `<base URL>smsmessaging/text` or `<base URL>smsmessaging/binary`, and classifies the
/// reply. The client holds no per-call state and can be shared across tasks.
pub struct WebsmsClient {
    credentials: Credentials,
    base_url: Url,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for WebsmsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebsmsClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl WebsmsClient {
    /// Create a client for `base_url`.
    ///
    /// For a proxy or other settings, use [`WebsmsClient::builder`].
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Result<Self, WebsmsError> {
        Self::builder(credentials).base_url(base_url).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> WebsmsClientBuilder {
        WebsmsClientBuilder::new(credentials)
    }

    /// Normalized base URL, always ending with `/`.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Send a text message.
    ///
    /// `max_sms_per_message` and `test` are written into a private copy of `message`;
    /// the caller's value is not modified.
    ///
    /// Errors:
    /// - [`WebsmsError::Authorization`] for empty credentials or an HTTP 401,
    /// - [`WebsmsError::Validation`] for empty content or recipients (nothing is sent),
    /// - [`WebsmsError::HttpConnection`] for other HTTP or network failures,
    /// - [`WebsmsError::Api`] when the gateway rejects the message.
    pub async fn send_text(
        &self,
        message: &TextMessage,
        max_sms_per_message: u32,
        test: bool,
    ) -> Result<MessageResponse, WebsmsError> {
        self.credentials.validate()?;
        validate_message(message)?;

        let outgoing = message.with_overrides(max_sms_per_message, test);
        self.submit(&outgoing).await
    }

    /// Send a binary message.
    ///
    /// Errors are the same as for [`WebsmsClient::send_text`].
    pub async fn send_binary(
        &self,
        message: &BinaryMessage,
        test: bool,
    ) -> Result<MessageResponse, WebsmsError> {
        self.credentials.validate()?;
        validate_message(message)?;

        let outgoing = message.with_overrides(test);
        self.submit(&outgoing).await
    }

    fn endpoint(&self, target_path: &str) -> String {
        format!("{}{target_path}", self.base_url)
    }

    async fn submit<M: WireMessage>(&self, message: &M) -> Result<MessageResponse, WebsmsError> {
        let body = message
            .encode_json()
            .map_err(|err| WebsmsError::no_response(Box::new(err)))?;

        debug!(
            path = M::TARGET_PATH,
            recipients = message.recipients().len(),
            test = message.is_test(),
            "posting message"
        );

        let response = self
            .http
            .post_json(HttpRequest {
                url: self.endpoint(M::TARGET_PATH),
                authorization: self.credentials.basic_authorization(),
                user_agent: self.user_agent.clone(),
                body,
            })
            .await
            .map_err(WebsmsError::no_response)?;

        debug!(status = response.status, "gateway responded");

        if response.status == 401 {
            return Err(AuthorizationError::Rejected.into());
        }
        if !(200..=299).contains(&response.status) {
            return Err(WebsmsError::http_status(response.status));
        }

        let status = response.status;
        let body = response.body.map_err(|err| WebsmsError::HttpConnection {
            status,
            message: format!("failed to read response body: {err}"),
            source: Some(err),
        })?;

        let parsed = decode_message_response(&body).map_err(|err| WebsmsError::HttpConnection {
            status,
            message: format!("invalid response body: {err}"),
            source: Some(Box::new(err)),
        })?;

        classify_response(parsed)
    }
}

/// Pass `OK`, `OK_QUEUED` and `OK_TEST` replies through; turn anything else into
/// [`WebsmsError::Api`].
pub fn classify_response(response: MessageResponse) -> Result<MessageResponse, WebsmsError> {
    if response.status_code.is_success() {
        return Ok(response);
    }
    Err(WebsmsError::Api {
        status_code: response.status_code,
        status_message: response.status_message,
    })
}

fn default_user_agent() -> String {
    format!("{CLIENT_ID} (v{})", env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(raw: &str) -> Result<Url, WebsmsError> {
    let mut url =
        Url::parse(raw.trim()).map_err(|err| WebsmsError::Configuration(Box::new(err)))?;

    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(WebsmsError::Configuration(
            format!("base URL must be a plain hierarchical URL: {raw}").into(),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
