//! P2PB2B REST API client implementation.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{
    ClockNonce, Credentials, CredentialsProvider, NonceProvider, StaticCredentials,
    encode_payload, sign_payload,
};
use crate::error::{ApiError, P2bError};
use crate::rest::endpoints::P2PB2B_BASE_URL;
use crate::rest::transport::{
    HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE, HttpResponse, check_http_status,
    merge_headers,
};
use crate::types::common::ResponseStatus;
use crate::types::{Envelope, Enveloped};

/// The P2PB2B REST API client.
///
/// Every operation is a single HTTP round trip: no retries, no caching. The
/// client holds no mutable state, so clones can be used from many tasks at
/// once.
///
/// # Example
///
/// ```rust,no_run
/// use p2pb2b_api_client::rest::P2bClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = P2bClient::public();
///
///     let symbols = client.get_symbols().await?;
///     println!("Symbols: {:?}", symbols.result);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use p2pb2b_api_client::rest::P2bClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = P2bClient::new("api_key", "api_secret")?;
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances.result);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct P2bClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl P2bClient {
    /// Create a client for the production API.
    ///
    /// Fails with [`P2bError::MissingCredentials`] if the key or secret is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, P2bError> {
        Self::with_url(P2PB2B_BASE_URL, api_key, api_secret)
    }

    /// Create a client against an arbitrary base URL, e.g. a local mock server.
    pub fn with_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, P2bError> {
        let credentials = Credentials::try_new(api_key, api_secret)?;
        Ok(Self::builder()
            .base_url(base_url)
            .credentials(Arc::new(StaticCredentials::from(credentials)))
            .build())
    }

    /// Create an anonymous client for public endpoints.
    pub fn public() -> Self {
        Self::builder().build()
    }

    /// Create an anonymous client against an arbitrary base URL.
    pub fn public_with_url(base_url: impl Into<String>) -> Self {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder.
    pub fn builder() -> P2bClientBuilder {
        P2bClientBuilder::new()
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests are signed.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // Transport.

    /// Send a POST with the P2PB2B payload and signature headers.
    ///
    /// `X-TXC-PAYLOAD` and `X-TXC-SIGNATURE` are always computed from `body`
    /// and replace any caller value; `Content-Type` and `X-TXC-APIKEY` are
    /// only added when `extra_headers` does not already hold them.
    pub async fn send_post(
        &self,
        url: &str,
        extra_headers: Option<HeaderMap>,
        body: Vec<u8>,
    ) -> Result<HttpResponse, P2bError> {
        let url = Url::parse(url)?;
        let mut headers = extra_headers.unwrap_or_default();

        headers.insert(HEADER_PAYLOAD, HeaderValue::from_str(&encode_payload(&body))?);
        if let Some(credentials) = &self.credentials {
            let signature = sign_payload(credentials.get_credentials(), &body)?;
            headers.insert(HEADER_SIGNATURE, HeaderValue::from_str(&signature)?);
        }

        let request = self.http_client.post(url).body(body);
        self.send_request(request, headers).await
    }

    /// Send a bodiless GET. No payload or signature headers are attached.
    pub async fn send_get(
        &self,
        url: &str,
        extra_headers: Option<HeaderMap>,
    ) -> Result<HttpResponse, P2bError> {
        let url = Url::parse(url)?;
        let request = self.http_client.get(url);
        self.send_request(request, extra_headers.unwrap_or_default())
            .await
    }

    async fn send_request(
        &self,
        request: reqwest_middleware::RequestBuilder,
        additional_headers: HeaderMap,
    ) -> Result<HttpResponse, P2bError> {
        let mut defaults = HeaderMap::new();
        defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(credentials) = &self.credentials {
            defaults.insert(
                HEADER_API_KEY,
                HeaderValue::from_str(&credentials.get_credentials().api_key)?,
            );
        }
        let headers = merge_headers(additional_headers, defaults);

        let response = request.headers(headers).send().await.map_err(|e| {
            tracing::debug!(error = %e, "P2PB2B request failed");
            e
        })?;
        Ok(HttpResponse::new(response))
    }

    // Endpoint helpers.

    /// Sign and POST `params` to `path`, expecting HTTP 200.
    pub(crate) async fn private_post<T, P>(&self, path: &str, params: &P) -> Result<T, P2bError>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let envelope = Envelope::new(self.nonce_provider.next_nonce(), path);
        let body = serde_json::to_vec(&Enveloped::new(params, envelope))?;

        tracing::debug!(path, "POST");
        let response = self.send_post(&url, None, body).await?;
        self.parse_response(response, &[StatusCode::OK]).await
    }

    /// GET `path`, expecting HTTP 200.
    pub(crate) async fn public_get<T>(&self, path: &str) -> Result<T, P2bError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(path, "GET");
        let response = self.send_get(&url, None).await?;
        self.parse_response(response, &[StatusCode::OK]).await
    }

    /// Check the status, then decode the body.
    ///
    /// A body reporting `"success": false` becomes [`P2bError::Api`] before
    /// the endpoint payload is decoded.
    async fn parse_response<T>(
        &self,
        response: HttpResponse,
        expected: &[StatusCode],
    ) -> Result<T, P2bError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.body().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "P2PB2B response");

        check_http_status(status, expected, &body)?;

        let parsed: ResponseStatus = serde_json::from_slice(&body).map_err(|e| {
            P2bError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                String::from_utf8_lossy(&body)
            ))
        })?;
        if !parsed.success {
            let error = ApiError::new(parsed.message);
            tracing::warn!(%error, "P2PB2B reported failure");
            return Err(P2bError::Api(error));
        }

        serde_json::from_slice(&body).map_err(|e| {
            P2bError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                String::from_utf8_lossy(&body)
            ))
        })
    }
}

impl std::fmt::Debug for P2bClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("P2bClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`P2bClient`].
pub struct P2bClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl P2bClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: P2PB2B_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent. Ignored when [`http_client`](Self::http_client) is set.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`, e.g. one with timeouts.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> P2bClient {
        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("p2pb2b-api-client/{}", env!("CARGO_PKG_VERSION")));
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("p2pb2b-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new())
            }
        };

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(ClockNonce::new()));

        P2bClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for P2bClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
