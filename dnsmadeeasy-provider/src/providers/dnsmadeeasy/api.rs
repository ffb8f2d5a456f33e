//! DNS Made Easy 接口方法（一个端点一个方法）

use reqwest::Method;

use crate::error::Result;
use crate::providers::common::normalize_domain_name;
use crate::traits::ErrorContext;

use super::http::NO_BODY;
use super::{
    DnsMadeEasyClient, DnsMadeEasyDomain, DnsMadeEasyRecord, DnsMadeEasyRecordPage, PROVIDER_NAME,
};

impl DnsMadeEasyClient {
    fn records_url(&self, domain_id: u64) -> String {
        format!("{}/dns/managed/{domain_id}/records", self.base_url)
    }

    /// Looks up a managed domain by zone name. A trailing dot is ignored.
    pub async fn get_domain(&self, zone: &str) -> Result<DnsMadeEasyDomain> {
        let domain_name = normalize_domain_name(zone);
        let url = format!(
            "{}/dns/managed/name?domainname={}",
            self.base_url,
            urlencoding::encode(&domain_name)
        );

        self.execute(Method::GET, &url, NO_BODY, ErrorContext::domain(domain_name))
            .await
    }

    /// Lists the records of a domain, optionally filtered by name and/or type.
    ///
    /// Only the first page returned by the API is read.
    pub async fn get_records(
        &self,
        domain_id: u64,
        record_name: Option<&str>,
        record_type: Option<&str>,
    ) -> Result<Vec<DnsMadeEasyRecord>> {
        let mut url = self.records_url(domain_id);

        let mut query = Vec::new();
        if let Some(name) = record_name {
            query.push(format!("recordName={}", urlencoding::encode(name)));
        }
        if let Some(record_type) = record_type {
            query.push(format!("type={}", urlencoding::encode(record_type)));
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        let page: DnsMadeEasyRecordPage = self
            .execute(
                Method::GET,
                &url,
                NO_BODY,
                ErrorContext::domain_id(domain_id),
            )
            .await?;

        Ok(page.into_records())
    }

    /// Creates a single record.
    pub async fn create_record(&self, domain_id: u64, record: &DnsMadeEasyRecord) -> Result<()> {
        let url = self.records_url(domain_id);
        self.execute_discard(
            Method::POST,
            &url,
            Some(record),
            ErrorContext::domain_id(domain_id),
        )
        .await
    }

    /// Creates several records in one request.
    pub async fn create_records(
        &self,
        domain_id: u64,
        records: &[DnsMadeEasyRecord],
    ) -> Result<()> {
        let url = format!("{}/createMulti", self.records_url(domain_id));
        self.execute_discard(
            Method::POST,
            &url,
            Some(records),
            ErrorContext::domain_id(domain_id),
        )
        .await
    }

    /// Updates several records in one request. Each record must carry its ID.
    pub async fn update_records(
        &self,
        domain_id: u64,
        records: &[DnsMadeEasyRecord],
    ) -> Result<()> {
        let url = format!("{}/updateMulti", self.records_url(domain_id));
        self.execute_discard(
            Method::PUT,
            &url,
            Some(records),
            ErrorContext::domain_id(domain_id),
        )
        .await
    }

    /// Deletes a single record.
    pub async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        let url = format!("{}/{record_id}", self.records_url(domain_id));
        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            ..ErrorContext::domain_id(domain_id)
        };
        self.execute_discard(Method::DELETE, &url, NO_BODY, ctx).await
    }

    /// Deletes several records in one request (`?ids=1&ids=2...`).
    ///
    /// An empty `record_ids` sends nothing: without `ids` the request would
    /// target the whole record collection.
    pub async fn delete_records(&self, domain_id: u64, record_ids: &[u64]) -> Result<()> {
        if record_ids.is_empty() {
            log::debug!("[{PROVIDER_NAME}] delete_records on {domain_id}: no ids, skipped");
            return Ok(());
        }

        let ids = record_ids
            .iter()
            .map(|id| format!("ids={id}"))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}?{ids}", self.records_url(domain_id));
        self.execute_discard(
            Method::DELETE,
            &url,
            NO_BODY,
            ErrorContext::domain_id(domain_id),
        )
        .await
    }
}
