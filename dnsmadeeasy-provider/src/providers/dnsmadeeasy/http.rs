//! DNS Made Easy HTTP 请求构造与发送

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::error::extract_error_message;
use super::{DnsMadeEasyClient, HEADER_API_KEY, HEADER_HMAC, HEADER_REQUEST_DATE};

/// 无请求体时传给 `build_request` / `execute*` 的占位
pub(crate) const NO_BODY: Option<&()> = None;

const APPLICATION_JSON: &str = "application/json";

impl DnsMadeEasyClient {
    /// 构造已签名的请求（不发送）
    ///
    /// 有 payload 时序列化为 JSON 请求体并设置 `Content-Type`；序列化失败直接返回错误，不会发出请求。
    /// 签名时间在此处即时生成，`x-dnsme-requestDate` 与参与签名的字符串相同。
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
    ) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method, url);

        if let Some(payload) = payload {
            let body = serde_json::to_string(payload).map_err(|e| {
                ProviderError::SerializationError {
                    provider: self.provider_name().to_string(),
                    detail: e.to_string(),
                }
            })?;
            log::debug!(
                "[{}] Request Body: {}",
                self.provider_name(),
                truncate_for_log(&body)
            );
            request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        let signature = self.sign_now();

        Ok(request
            .header(ACCEPT, APPLICATION_JSON)
            .header(HEADER_API_KEY, &self.api_key)
            .header(HEADER_HMAC, signature.hmac)
            .header(HEADER_REQUEST_DATE, signature.request_date))
    }

    /// 发送请求，返回成功响应的正文；HTTP 状态码 >= 400 时映射为统一错误
    async fn send<B>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
        ctx: ErrorContext,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let method_name = method.as_str().to_string();
        let request = self.build_request(method, url, payload)?;

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), &method_name, url).await?;

        if status >= 400 {
            let message = extract_error_message(&response_text);
            let err = self.map_error(RawApiError::with_code(status.to_string(), message), ctx);
            if err.is_expected() {
                log::warn!("[{}] {method_name} {url} failed: {err}", self.provider_name());
            } else {
                log::error!("[{}] {method_name} {url} failed: {err}", self.provider_name());
            }
            return Err(err);
        }

        Ok(response_text)
    }

    /// 发送请求并把响应体解码为 `T`
    pub(crate) async fn execute<T, B>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
        ctx: ErrorContext,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response_text = self.send(method, url, payload, ctx).await?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 发送请求，读完并丢弃响应体
    pub(crate) async fn execute_discard<B>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
        ctx: ErrorContext,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, url, payload, ctx).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::dnsmadeeasy::compute_hmac;

    fn client() -> DnsMadeEasyClient {
        DnsMadeEasyClient::builder("api-key".to_string(), "api-secret".to_string())
            .base_url("http://127.0.0.1:9/V2.0")
            .build()
            .unwrap()
    }

    fn header<'a>(request: &'a reqwest::Request, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn get_has_auth_headers_and_no_body() {
        let request = client()
            .build_request(Method::GET, "http://127.0.0.1:9/V2.0/dns/managed/name", NO_BODY)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(header(&request, "accept"), Some("application/json"));
        assert_eq!(header(&request, "x-dnsme-apikey"), Some("api-key"));
        assert!(header(&request, "content-type").is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn hmac_signs_the_sent_request_date() {
        let request = client()
            .build_request(Method::GET, "http://127.0.0.1:9/V2.0/dns/managed/1/records", NO_BODY)
            .unwrap()
            .build()
            .unwrap();

        let date = header(&request, "x-dnsme-requestdate").unwrap();
        let hmac = header(&request, "x-dnsme-hmac").unwrap();
        assert_eq!(hmac, compute_hmac("api-secret", date));
    }

    #[test]
    fn payload_sets_json_body() {
        let records = vec![serde_json::json!({"type": "A", "name": "bar"})];
        let request = client()
            .build_request(
                Method::POST,
                "http://127.0.0.1:9/V2.0/dns/managed/1/records/createMulti",
                Some(&records),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(header(&request, "content-type"), Some("application/json"));
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        let sent: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(sent[0]["name"], "bar");
    }

    #[test]
    fn unserializable_payload_is_rejected() {
        use std::collections::BTreeMap;

        // JSON 对象的键必须是字符串
        let mut payload = BTreeMap::new();
        payload.insert(vec![1_u8], "value");
        let result = client().build_request(
            Method::POST,
            "http://127.0.0.1:9/V2.0/dns/managed/1/records",
            Some(&payload),
        );
        assert!(matches!(
            result,
            Err(ProviderError::SerializationError { .. })
        ));
    }
}
