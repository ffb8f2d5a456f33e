//! DNS Made Easy API 类型定义

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::Record;

use super::DEFAULT_GTD_LOCATION;

/// Managed domain, as returned by `GET /dns/managed/name`.
///
/// Both fields are required: a response without them is a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsMadeEasyDomain {
    pub id: u64,
    pub name: String,
}

/// DNS Made Easy record (request and response body).
///
/// `id` is zero for records that have not been created yet and is left out of
/// the JSON in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DnsMadeEasyRecord {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    /// TTL in whole seconds.
    pub ttl: u32,
    /// MX preference.
    #[serde(rename = "mxLevel")]
    pub priority: u32,
    pub source_id: u64,
    pub gtd_location: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(id: &u64) -> bool {
    *id == 0
}

impl DnsMadeEasyRecord {
    /// Builds a not-yet-created record from a neutral record.
    ///
    /// The TTL is truncated to whole seconds and `gtdLocation` is set to
    /// [`DEFAULT_GTD_LOCATION`].
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: 0,
            record_type: record.record_type.clone(),
            name: record.name.clone(),
            value: record.value.clone(),
            ttl: ttl_seconds(record.ttl),
            priority: record.priority,
            source_id: 0,
            gtd_location: DEFAULT_GTD_LOCATION.to_string(),
        }
    }

    /// Sets the provider-assigned ID.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Converts to a neutral record.
    pub fn to_record(&self) -> Record {
        Record {
            id: self.id.to_string(),
            record_type: self.record_type.clone(),
            name: self.name.clone(),
            value: self.value.clone(),
            ttl: Duration::from_secs(u64::from(self.ttl)),
            priority: self.priority,
        }
    }

    /// Exact, case-sensitive (type, name) match against a neutral record.
    pub fn matches(&self, record: &Record) -> bool {
        record.matches(&self.record_type, &self.name)
    }
}

/// 截断到整秒（不四舍五入），超出 `u32` 范围时取最大值
fn ttl_seconds(ttl: Duration) -> u32 {
    u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX)
}

/// Record list response, as returned by `GET /dns/managed/{id}/records`.
///
/// Pagination fields are decoded but not followed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DnsMadeEasyRecordPage {
    pub total_pages: u32,
    pub total_records: u32,
    pub page: u32,
    #[serde(rename = "data")]
    pub records: Option<Vec<DnsMadeEasyRecord>>,
}

impl DnsMadeEasyRecordPage {
    /// The records on this page; empty when `data` is absent or `null`.
    pub fn into_records(self) -> Vec<DnsMadeEasyRecord> {
        self.records.unwrap_or_default()
    }
}

/// 错误响应体：`{"error": ["..."]}`
#[derive(Debug, Deserialize)]
pub(crate) struct DnsMadeEasyErrorBody {
    #[serde(default)]
    pub error: Vec<String>,
}
