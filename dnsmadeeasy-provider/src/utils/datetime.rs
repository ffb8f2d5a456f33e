//! 请求时间格式化
//!
//! DNS Made Easy 校验 `x-dnsme-requestDate` 的新鲜度，
//! 该值必须是 RFC 1123 格式的 UTC 时间，并且与参与 HMAC 的字符串完全一致。

use chrono::{DateTime, Utc};

/// RFC 1123 (HTTP-date) 格式
const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// 将 UTC 时间格式化为 RFC 1123 字符串，如 `Sat, 12 Feb 2011 20:59:04 GMT`
pub fn rfc1123(dt: &DateTime<Utc>) -> String {
    dt.format(RFC1123_FORMAT).to_string()
}

/// 当前时间的 RFC 1123 字符串（每次请求单独生成）
pub fn request_date() -> String {
    rfc1123(&Utc::now())
}
