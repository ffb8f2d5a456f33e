//! DNS Made Easy Provider

mod api;
mod error;
mod http;
mod provider;
mod reconcile;
mod sign;
mod types;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_credential;

pub use provider::{DnsMadeEasyProvider, DnsMadeEasyProviderBuilder};
pub use sign::compute_hmac;
pub use types::{DnsMadeEasyDomain, DnsMadeEasyRecord, DnsMadeEasyRecordPage};

/// Production API endpoint.
pub const DEFAULT_PROD_BASE_URL: &str = "https://api.dnsmadeeasy.com/V2.0";
/// Sandbox API endpoint.
pub const DEFAULT_SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsmadeeasy.com/V2.0";
/// Global traffic director location written on every created or updated record.
pub const DEFAULT_GTD_LOCATION: &str = "DEFAULT";

pub(crate) const PROVIDER_NAME: &str = "dnsmadeeasy";

pub(crate) const HEADER_API_KEY: &str = "x-dnsme-apiKey";
pub(crate) const HEADER_HMAC: &str = "x-dnsme-hmac";
pub(crate) const HEADER_REQUEST_DATE: &str = "x-dnsme-requestDate";

/// DNS Made Easy REST API client.
///
/// Signs every request with HMAC-SHA1 over a fresh RFC 1123 request date and
/// exposes one method per endpoint. Requests are never retried.
///
/// # Construction
///
/// ```rust,no_run
/// use dnsmadeeasy_provider::DnsMadeEasyClient;
///
/// let client = DnsMadeEasyClient::new(
///     "your-api-key".to_string(),
///     "your-api-secret".to_string(),
/// )?;
/// # Ok::<(), dnsmadeeasy_provider::ProviderError>(())
/// ```
pub struct DnsMadeEasyClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) api_secret: String,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for DnsMadeEasyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsMadeEasyClient")
            .field("api_key", &mask_credential(&self.api_key))
            .field("api_secret", &"****")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DnsMadeEasyClient`].
pub struct DnsMadeEasyClientBuilder {
    api_key: String,
    api_secret: String,
    base_url: String,
    http_client: Option<Client>,
}

impl DnsMadeEasyClientBuilder {
    fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
            base_url: DEFAULT_PROD_BASE_URL.to_string(),
            http_client: None,
        }
    }

    /// Override the API base URL (default: [`DEFAULT_PROD_BASE_URL`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a caller-supplied HTTP client instead of the default one (5 s timeout).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`DnsMadeEasyClient`].
    ///
    /// Fails with [`ProviderError::MissingCredentials`] when the API key or
    /// secret is empty, and with [`ProviderError::InvalidParameter`] when the
    /// base URL does not parse.
    pub fn build(self) -> Result<DnsMadeEasyClient> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingCredentials {
                provider: PROVIDER_NAME.to_string(),
                field: "api_key".to_string(),
            });
        }
        if self.api_secret.is_empty() {
            return Err(ProviderError::MissingCredentials {
                provider: PROVIDER_NAME.to_string(),
                field: "api_secret".to_string(),
            });
        }

        reqwest::Url::parse(&self.base_url).map_err(|e| ProviderError::InvalidParameter {
            provider: PROVIDER_NAME.to_string(),
            param: "base_url".to_string(),
            detail: format!("{}: {e}", self.base_url),
        })?;

        let client = match self.http_client {
            Some(client) => client,
            None => create_http_client(PROVIDER_NAME)?,
        };

        Ok(DnsMadeEasyClient {
            client,
            api_key: self.api_key,
            api_secret: self.api_secret,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DnsMadeEasyClient {
    /// Creates a client for the production API.
    pub fn new(api_key: String, api_secret: String) -> Result<Self> {
        Self::builder(api_key, api_secret).build()
    }

    /// Creates a client for the sandbox API.
    pub fn sandbox(api_key: String, api_secret: String) -> Result<Self> {
        Self::builder(api_key, api_secret)
            .base_url(DEFAULT_SANDBOX_BASE_URL)
            .build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(api_key: String, api_secret: String) -> DnsMadeEasyClientBuilder {
        DnsMadeEasyClientBuilder::new(api_key, api_secret)
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
