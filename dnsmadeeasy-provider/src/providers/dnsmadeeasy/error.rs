//! DNS Made Easy 错误映射
//!
//! DNS Made Easy 没有业务错误码，按 HTTP 状态码映射。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::DnsMadeEasyErrorBody;
use super::{DnsMadeEasyClient, PROVIDER_NAME};

impl ProviderErrorMapper for DnsMadeEasyClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误（key 无效、HMAC 不匹配、requestDate 过期） ============
            Some("401" | "403") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 资源不存在 ============
            Some("404") => {
                // 记录类端点只有数字 ID，此时 `domain` 填 ID
                let domain = context
                    .domain
                    .or_else(|| context.domain_id.map(|id| id.to_string()));
                match (context.record_id, domain) {
                    (Some(record_id), _) => ProviderError::RecordNotFound {
                        provider: self.provider_name().to_string(),
                        record_id,
                        raw_message: Some(raw.message),
                    },
                    (None, Some(domain)) => ProviderError::DomainNotFound {
                        provider: self.provider_name().to_string(),
                        domain,
                        raw_message: Some(raw.message),
                    },
                    (None, None) => self.unknown_error(raw),
                }
            }

            // ============ 频率限流（不重试） ============
            Some("429") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

/// 从错误响应体中提取消息；不是 `{"error": [...]}` 时返回截断后的原文
pub(crate) fn extract_error_message(response_text: &str) -> String {
    match serde_json::from_str::<DnsMadeEasyErrorBody>(response_text) {
        Ok(body) if !body.error.is_empty() => body.error.join("; "),
        _ => truncate_for_log(response_text.trim()),
    }
}
