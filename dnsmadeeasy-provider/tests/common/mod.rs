//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use dnsmadeeasy_provider::{DnsMadeEasyProvider, Record};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "1c1a3c91-4770-4a5b-aa76-6d4cb8a40c18";
pub const TEST_API_SECRET: &str = "c9b5625f-9834-4ff8-baba-4ed5f32cae55";
pub const TEST_DOMAIN_ID: u64 = 1_119_443;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 指向 mock server 的 provider
pub fn mock_provider(mock_server: &MockServer) -> DnsMadeEasyProvider {
    DnsMadeEasyProvider::builder(TEST_API_KEY.to_string(), TEST_API_SECRET.to_string())
        .base_url(mock_server.uri())
        .build()
}

/// mock server 上的记录列表路径
pub fn records_path() -> String {
    format!("/dns/managed/{TEST_DOMAIN_ID}/records")
}

pub fn record(record_type: &str, name: &str, value: &str, ttl_secs: u64) -> Record {
    Record::new(record_type, name, value, Duration::from_secs(ttl_secs))
}

/// `GET /dns/managed/name` 响应
pub fn domain_json() -> Value {
    json!({
        "id": TEST_DOMAIN_ID,
        "name": "example.com",
        "created": 1_297_296_000_000_u64,
        "updated": 1_297_296_000_000_u64,
        "folderId": 1890,
        "gtdEnabled": false,
    })
}

/// API 返回的单条记录
pub fn record_json(id: u64, record_type: &str, name: &str, value: &str, ttl: u32) -> Value {
    json!({
        "id": id,
        "type": record_type,
        "name": name,
        "value": value,
        "ttl": ttl,
        "source": 1,
        "sourceId": TEST_DOMAIN_ID,
        "gtdLocation": "DEFAULT",
        "failover": false,
        "monitor": false,
        "hardLink": false,
        "dynamicDns": false,
        "failed": false,
    })
}

/// `GET /dns/managed/{id}/records` 响应（单页）
pub fn records_page_json(records: Vec<Value>) -> Value {
    let total = records.len();
    json!({
        "totalPages": 1,
        "totalRecords": total,
        "page": 0,
        "data": records,
    })
}

/// 沙盒测试上下文
pub struct SandboxContext {
    pub provider: DnsMadeEasyProvider,
    pub zone: String,
}

impl SandboxContext {
    /// 从环境变量创建，缺少任意一个时返回 `None`
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("DNSMADEEASY_API_KEY").ok()?;
        let api_secret = env::var("DNSMADEEASY_API_SECRET").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;

        Some(Self {
            provider: DnsMadeEasyProvider::sandbox(api_key, api_secret),
            zone,
        })
    }
}
