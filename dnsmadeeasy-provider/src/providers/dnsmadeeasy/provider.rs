//! DNS Made Easy record trait 实现

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::{DnsProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};
use crate::types::Record;
use crate::utils::log_sanitizer::mask_credential;

use super::reconcile::{plan_append, plan_delete, plan_set};
use super::{
    DEFAULT_SANDBOX_BASE_URL, DnsMadeEasyClient, DnsMadeEasyDomain, DnsMadeEasyRecord, PROVIDER_NAME,
};

/// DNS Made Easy provider.
///
/// Reconciles caller-supplied records against the zone by (type, name). The
/// underlying [`DnsMadeEasyClient`] is built on first use; an empty API key or
/// secret makes every operation fail with
/// [`ProviderError::MissingCredentials`](crate::ProviderError::MissingCredentials)
/// before any request is sent.
///
/// Each operation resolves the zone and fetches its records afresh; nothing is
/// cached between calls.
///
/// The provider can be deserialized from configuration:
///
/// ```json
/// {"dnsme_apikey": "...", "dnsme_secret": "...", "dnsme_api_url": "https://api.sandbox.dnsmadeeasy.com/V2.0"}
/// ```
#[derive(Default, Serialize, Deserialize)]
pub struct DnsMadeEasyProvider {
    /// API base URL override; production when absent.
    #[serde(
        rename = "dnsme_api_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_url_base: Option<String>,
    /// API key.
    #[serde(rename = "dnsme_apikey")]
    pub api_key: String,
    /// API secret used to sign requests.
    #[serde(rename = "dnsme_secret")]
    pub api_secret: String,
    #[serde(skip)]
    http_client: Option<Client>,
    #[serde(skip)]
    client: OnceLock<DnsMadeEasyClient>,
}

impl std::fmt::Debug for DnsMadeEasyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsMadeEasyProvider")
            .field("api_url_base", &self.api_url_base)
            .field("api_key", &mask_credential(&self.api_key))
            .field("api_secret", &"****")
            .finish_non_exhaustive()
    }
}

/// Builder for [`DnsMadeEasyProvider`].
pub struct DnsMadeEasyProviderBuilder {
    api_key: String,
    api_secret: String,
    api_url_base: Option<String>,
    http_client: Option<Client>,
}

impl DnsMadeEasyProviderBuilder {
    fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
            api_url_base: None,
            http_client: None,
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_url_base = Some(base_url.into());
        self
    }

    /// Use a caller-supplied HTTP client (e.g. with a different timeout).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`DnsMadeEasyProvider`]. Credentials are checked on first use.
    pub fn build(self) -> DnsMadeEasyProvider {
        DnsMadeEasyProvider {
            api_url_base: self.api_url_base,
            api_key: self.api_key,
            api_secret: self.api_secret,
            http_client: self.http_client,
            client: OnceLock::new(),
        }
    }
}

impl DnsMadeEasyProvider {
    /// Creates a provider for the production API.
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::builder(api_key, api_secret).build()
    }

    /// Creates a provider for the sandbox API.
    pub fn sandbox(api_key: String, api_secret: String) -> Self {
        Self::builder(api_key, api_secret)
            .base_url(DEFAULT_SANDBOX_BASE_URL)
            .build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(api_key: String, api_secret: String) -> DnsMadeEasyProviderBuilder {
        DnsMadeEasyProviderBuilder::new(api_key, api_secret)
    }

    /// The API client, built from the configured credentials on first call.
    pub fn client(&self) -> Result<&DnsMadeEasyClient> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let mut builder = DnsMadeEasyClient::builder(self.api_key.clone(), self.api_secret.clone());
        if let Some(base_url) = &self.api_url_base {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(http_client) = &self.http_client {
            builder = builder.http_client(http_client.clone());
        }
        let client = builder.build()?;

        Ok(self.client.get_or_init(|| client))
    }

    /// 获取 client 并解析 zone；失败时不会发出任何记录请求
    async fn client_and_domain(
        &self,
        zone: &str,
    ) -> Result<(&DnsMadeEasyClient, DnsMadeEasyDomain)> {
        let client = self.client()?;
        let domain = client.get_domain(zone).await?;
        log::debug!(
            "[{PROVIDER_NAME}] Zone '{zone}' resolved to domain {} ({})",
            domain.id,
            domain.name
        );
        Ok((client, domain))
    }
}

#[async_trait]
impl RecordGetter for DnsMadeEasyProvider {
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let (client, domain) = self.client_and_domain(zone).await?;
        let records = client.get_records(domain.id, None, None).await?;

        Ok(records.iter().map(DnsMadeEasyRecord::to_record).collect())
    }
}

#[async_trait]
impl RecordAppender for DnsMadeEasyProvider {
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let (client, domain) = self.client_and_domain(zone).await?;
        let existing = client.get_records(domain.id, None, None).await?;

        let plan = plan_append(&existing, records);
        log::debug!(
            "[{PROVIDER_NAME}] append to '{}': {} requested, {} to create",
            domain.name,
            records.len(),
            plan.to_create.len()
        );

        if !plan.to_create.is_empty() {
            client.create_records(domain.id, &plan.to_create).await?;
        }

        log::info!(
            "[{PROVIDER_NAME}] Appended {} record(s) to '{}'",
            plan.appended.len(),
            domain.name
        );
        Ok(plan.appended)
    }
}

#[async_trait]
impl RecordSetter for DnsMadeEasyProvider {
    /// Creations are sent first, then updates. If the update batch fails the
    /// records already created stay in the zone; nothing is rolled back.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let (client, domain) = self.client_and_domain(zone).await?;
        let existing = client.get_records(domain.id, None, None).await?;

        let plan = plan_set(&existing, records);
        log::debug!(
            "[{PROVIDER_NAME}] set on '{}': {} to create, {} to update",
            domain.name,
            plan.to_create.len(),
            plan.to_update.len()
        );

        if !plan.to_create.is_empty() {
            client.create_records(domain.id, &plan.to_create).await?;
        }
        if !plan.to_update.is_empty() {
            client.update_records(domain.id, &plan.to_update).await?;
        }

        log::info!(
            "[{PROVIDER_NAME}] Set on '{}': created {}, updated {}",
            domain.name,
            plan.to_create.len(),
            plan.updated.len()
        );
        Ok(plan.updated)
    }
}

#[async_trait]
impl RecordDeleter for DnsMadeEasyProvider {
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let (client, domain) = self.client_and_domain(zone).await?;
        let existing = client.get_records(domain.id, None, None).await?;

        let ids = plan_delete(&existing, records);
        log::debug!(
            "[{PROVIDER_NAME}] delete from '{}': {} requested, {} matched",
            domain.name,
            records.len(),
            ids.len()
        );

        if !ids.is_empty() {
            client.delete_records(domain.id, &ids).await?;
        }

        log::info!(
            "[{PROVIDER_NAME}] Deleted {} record(s) from '{}'",
            ids.len(),
            domain.name
        );
        Ok(records.to_vec())
    }
}

impl DnsProvider for DnsMadeEasyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::ProviderError;
    use crate::providers::dnsmadeeasy::DEFAULT_PROD_BASE_URL;

    fn assert_record_capabilities<T>()
    where
        T: RecordGetter + RecordAppender + RecordSetter + RecordDeleter + DnsProvider,
    {
    }

    #[test]
    fn implements_every_record_capability() {
        assert_record_capabilities::<DnsMadeEasyProvider>();
        let provider: Box<dyn DnsProvider> = Box::new(DnsMadeEasyProvider::new(
            "key".to_string(),
            "secret".to_string(),
        ));
        assert_eq!(provider.id(), "dnsmadeeasy");
    }

    #[tokio::test]
    async fn missing_api_key_fails_every_call() {
        let provider = DnsMadeEasyProvider::builder(String::new(), "secret".to_string())
            .base_url("http://127.0.0.1:9")
            .build();
        let records = [Record::new("A", "foo", "1.1.1.1", Duration::from_secs(300))];

        for _ in 0..2 {
            let result = provider.append_records("example.com.", &records).await;
            assert!(
                matches!(&result, Err(ProviderError::MissingCredentials { field, .. }) if field == "api_key"),
                "unexpected result: {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn missing_api_secret_fails_get() {
        let provider = DnsMadeEasyProvider::new("key".to_string(), String::new());
        let result = provider.get_records("example.com").await;
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredentials { .. })
        ));
    }

    #[test]
    fn client_is_built_once() {
        let provider = DnsMadeEasyProvider::new("key".to_string(), "secret".to_string());
        let first: *const DnsMadeEasyClient = provider.client().unwrap();
        let second: *const DnsMadeEasyClient = provider.client().unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.client().unwrap().base_url(), DEFAULT_PROD_BASE_URL);
    }

    #[test]
    fn sandbox_provider_uses_sandbox_url() {
        let provider = DnsMadeEasyProvider::sandbox("key".to_string(), "secret".to_string());
        assert_eq!(
            provider.client().unwrap().base_url(),
            DEFAULT_SANDBOX_BASE_URL
        );
    }

    #[test]
    fn deserialize_from_config() {
        let provider: DnsMadeEasyProvider = serde_json::from_str(
            r#"{
                "dnsme_api_url": "https://api.sandbox.dnsmadeeasy.com/V2.0",
                "dnsme_apikey": "key",
                "dnsme_secret": "secret"
            }"#,
        )
        .unwrap();
        assert_eq!(provider.api_key, "key");
        assert_eq!(
            provider.client().unwrap().base_url(),
            DEFAULT_SANDBOX_BASE_URL
        );
    }

    #[test]
    fn deserialize_without_url_defaults_to_production() {
        let provider: DnsMadeEasyProvider =
            serde_json::from_str(r#"{"dnsme_apikey":"key","dnsme_secret":"secret"}"#).unwrap();
        assert!(provider.api_url_base.is_none());
        assert_eq!(provider.client().unwrap().base_url(), DEFAULT_PROD_BASE_URL);
    }

    #[test]
    fn debug_hides_secret() {
        let provider = DnsMadeEasyProvider::new(
            "1c1a3c91-4770-4a5b".to_string(),
            "c9b5625f-9834-4ff8".to_string(),
        );
        let debug = format!("{provider:?}");
        assert!(!debug.contains("c9b5625f"));
    }
}
