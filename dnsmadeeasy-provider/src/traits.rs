use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::Record;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（DNS Made Easy 使用 HTTP 状态码）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound` 等错误）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
    /// 数字域名 ID（记录类端点只知道 ID，不知道域名）
    pub domain_id: Option<u64>,
}

impl ErrorContext {
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }

    pub fn domain_id(domain_id: u64) -> Self {
        Self {
            domain_id: Some(domain_id),
            ..Self::default()
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Lists the records of a zone.
///
/// Every method in the record traits takes the zone name (e.g. `example.com.`);
/// a trailing dot is ignored. Dropping the returned future cancels the
/// in-flight HTTP call, but never undoes a mutation the provider already
/// accepted.
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// Returns every record in the zone, in provider order.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;
}

/// Adds records that do not exist yet.
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Creates each record whose (type, name) is absent from the zone.
    ///
    /// Records whose (type, name) already exists are skipped silently.
    /// Returns the records that were submitted for creation, in input order.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}

/// Creates or updates records.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// Upserts each record by (type, name).
    ///
    /// Returns the records that matched an existing record and were updated,
    /// in input order. Newly created records are not part of the result.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}

/// Removes records.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Deletes every existing record matching an input record by (type, name).
    ///
    /// Returns the input unchanged, whether or not each entry was found.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}

/// DNS 提供商 Trait
///
/// Umbrella over the four record capabilities, usable as `dyn DnsProvider`.
pub trait DnsProvider: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {
    /// 提供商标识符
    fn id(&self) -> &'static str;
}
