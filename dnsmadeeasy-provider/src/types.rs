use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Neutral Record ============

/// A provider-neutral DNS record.
///
/// This is the shape exchanged with callers of the record traits. Providers map
/// their own wire records to and from it at the boundary.
///
/// `ttl` is a [`Duration`]; providers that store whole seconds truncate any
/// sub-second part when converting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Provider-assigned ID as a string. Empty for records not yet created.
    #[serde(default)]
    pub id: String,
    /// Record type (e.g., `A`, `AAAA`, `CNAME`, `MX`, `TXT`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name relative to the zone (e.g., `www`, empty for the apex).
    pub name: String,
    /// Record value (IP address, target host, text, ...).
    pub value: String,
    /// Time to live.
    #[serde(default)]
    pub ttl: Duration,
    /// Priority (MX preference). Zero when the type has none.
    #[serde(default)]
    pub priority: u32,
}

impl Record {
    /// Creates a record with no ID and no priority.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
            priority: 0,
        }
    }

    /// Sets the priority (MX preference).
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns `true` when this record has the given type and name.
    ///
    /// Matching is exact and case-sensitive; value, TTL and priority are never
    /// part of the key.
    pub fn matches(&self, record_type: &str, name: &str) -> bool {
        self.record_type == record_type && self.name == name
    }
}
