//! DNS Made Easy HMAC-SHA1 签名
//!
//! 签名内容只有请求时间：`hex(HMAC-SHA1(api_secret, x-dnsme-requestDate))`。

use crate::providers::common::hmac_sha1;
use crate::utils::datetime;

use super::DnsMadeEasyClient;

/// 计算 `x-dnsme-hmac` 头的值（小写十六进制，40 个字符）
pub fn compute_hmac(api_secret: &str, request_date: &str) -> String {
    hex::encode(hmac_sha1(api_secret.as_bytes(), request_date.as_bytes()))
}

/// 一次请求的签名结果，两个字段必须成对使用
#[derive(Debug, Clone)]
pub(crate) struct RequestSignature {
    pub request_date: String,
    pub hmac: String,
}

impl DnsMadeEasyClient {
    /// 用当前时间签名；每个请求都重新生成，不缓存
    pub(crate) fn sign_now(&self) -> RequestSignature {
        let request_date = datetime::request_date();
        let hmac = compute_hmac(&self.api_secret, &request_date);
        RequestSignature { request_date, hmac }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_example() {
        // DNS Made Easy API 文档中的示例
        assert_eq!(
            compute_hmac(
                "c9b5625f-9834-4ff8-baba-4ed5f32cae55",
                "Sat, 12 Feb 2011 20:59:04 GMT"
            ),
            "b3502e6116a324f3cf4a8ed693d78bcee8d8fe3c"
        );
    }

    #[test]
    fn deterministic_lowercase_hex() {
        let a = compute_hmac("test-secret", "Mon, 15 Jan 2024 08:00:00 GMT");
        let b = compute_hmac("test-secret", "Mon, 15 Jan 2024 08:00:00 GMT");
        assert_eq!(a, b);
        assert_eq!(a, "8c2ba4d60d19be61956a694b8e56f705c2af9a21");
        assert_eq!(a.len(), 40);
        assert!(a.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn secret_changes_signature() {
        let date = "Mon, 15 Jan 2024 08:00:00 GMT";
        assert_ne!(compute_hmac("secret-one", date), compute_hmac("secret-two", date));
    }

    #[test]
    fn date_changes_signature() {
        assert_ne!(
            compute_hmac("secret", "Mon, 15 Jan 2024 08:00:00 GMT"),
            compute_hmac("secret", "Mon, 15 Jan 2024 08:00:01 GMT")
        );
    }

    #[test]
    fn sign_now_pairs_date_and_hmac() {
        let client = DnsMadeEasyClient::new("key".to_string(), "secret".to_string()).unwrap();
        let signature = client.sign_now();
        assert_eq!(
            signature.hmac,
            compute_hmac("secret", &signature.request_date)
        );
    }
}
