//! # dnsmadeeasy-provider
//!
//! A [DNS Made Easy](https://dnsmadeeasy.com/) provider: an HMAC-signed REST
//! client for the V2.0 API and a thin reconciliation layer that keeps a zone's
//! records in line with a caller-supplied record set.
//!
//! ## Authentication
//!
//! Every request carries `x-dnsme-apiKey`, `x-dnsme-requestDate` (RFC 1123,
//! UTC, generated per request) and `x-dnsme-hmac`, the lowercase hex
//! HMAC-SHA1 of the request date keyed with the API secret.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use dnsmadeeasy_provider::{DnsMadeEasyProvider, Record, RecordGetter, RecordSetter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = DnsMadeEasyProvider::new(
//!     "your-api-key".to_string(),
//!     "your-api-secret".to_string(),
//! );
//!
//! for record in provider.get_records("example.com.").await? {
//!     println!("{} {} {}", record.record_type, record.name, record.value);
//! }
//!
//! let www = Record::new("A", "www", "192.0.2.10", Duration::from_secs(1800));
//! let updated = provider.set_records("example.com.", &[www]).await?;
//! println!("updated {} record(s)", updated.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Reconciliation
//!
//! Records are matched by exact, case-sensitive (type, name); the first
//! existing match wins.
//!
//! | Operation | No match | Match | Returns |
//! |-----------|----------|-------|---------|
//! | [`RecordAppender::append_records`] | create | skip | created inputs |
//! | [`RecordSetter::set_records`] | create | update (keeps ID) | updated inputs |
//! | [`RecordDeleter::delete_records`] | skip | delete | the input, unchanged |
//!
//! `set_records` sends creations before updates. When the update batch fails
//! the created records are not rolled back.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Nothing
//! is retried: network errors, timeouts and HTTP 429 are returned on the first
//! attempt.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export record capability traits (internal error-mapping traits are not exported)
pub use traits::{DnsProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};

// Re-export types
pub use types::Record;

// Re-export utils module
pub use utils::datetime;

// Re-export the DNS Made Easy provider and API client
pub use providers::{
    DEFAULT_GTD_LOCATION, DEFAULT_PROD_BASE_URL, DEFAULT_SANDBOX_BASE_URL, DnsMadeEasyClient,
    DnsMadeEasyClientBuilder, DnsMadeEasyDomain, DnsMadeEasyProvider, DnsMadeEasyProviderBuilder,
    DnsMadeEasyRecord, DnsMadeEasyRecordPage, compute_hmac,
};
