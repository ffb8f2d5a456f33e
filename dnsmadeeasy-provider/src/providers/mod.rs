//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod dnsmadeeasy;

pub use dnsmadeeasy::{
    DEFAULT_GTD_LOCATION, DEFAULT_PROD_BASE_URL, DEFAULT_SANDBOX_BASE_URL, DnsMadeEasyClient,
    DnsMadeEasyClientBuilder, DnsMadeEasyDomain, DnsMadeEasyProvider, DnsMadeEasyProviderBuilder,
    DnsMadeEasyRecord, DnsMadeEasyRecordPage, compute_hmac,
};
