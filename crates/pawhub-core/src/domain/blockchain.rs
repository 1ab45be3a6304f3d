//! Blockchain ledger domain types.
//!
//! A `BlockchainRequest` is what callers submit for an order; a
//! `BlockchainRecord` is what the ledger keeps after hashing the payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of payload being anchored for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// A single media asset, usually referenced by URL.
    Media,
    /// A serialized batch (JSON payload) of order data.
    Batch,
}

impl RecordType {
    /// Parse a record type from its storage/wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MEDIA" => Some(Self::Media),
            "BATCH" => Some(Self::Batch),
            _ => None,
        }
    }

    /// Storage/wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "MEDIA",
            Self::Batch => "BATCH",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to record data for an order on the ledger.
///
/// `data_to_verify` is opaque: a media URL or a serialized JSON batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainRequest {
    pub order_id: i64,
    pub record_type: RecordType,
    pub data_to_verify: String,
}

/// A persisted ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainRecord {
    pub id: i64,
    pub order_id: i64,
    pub record_type: RecordType,
    pub data_to_verify: String,
    /// Lower-case hex SHA-256 of `data_to_verify`.
    pub data_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a new ledger entry.
#[derive(Debug, Clone)]
pub struct NewBlockchainRecord {
    pub order_id: i64,
    pub record_type: RecordType,
    pub data_to_verify: String,
    pub data_hash: String,
    pub created_at: DateTime<Utc>,
}
