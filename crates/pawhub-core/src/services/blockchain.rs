//! Blockchain ledger service.
//!
//! Hashes submitted payloads and keeps them per order. Verification is a
//! local comparison against the stored digests.

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::domain::blockchain::{
    BlockchainRecord, BlockchainRequest, NewBlockchainRecord, RecordType,
};
use crate::ports::{BlockchainRecordRepository, CoreError};

/// Lower-case hex SHA-256 of a payload.
pub fn payload_digest(data: &str) -> String {
    format!("{:x}", Sha256::digest(data.as_bytes()))
}

/// Service for recording and checking ledger entries.
pub struct BlockchainService {
    repo: Arc<dyn BlockchainRecordRepository>,
}

impl BlockchainService {
    /// Create a new blockchain service.
    pub fn new(repo: Arc<dyn BlockchainRecordRepository>) -> Self {
        Self { repo }
    }

    /// Hash and persist the payload of a request.
    pub async fn record(&self, request: BlockchainRequest) -> Result<BlockchainRecord, CoreError> {
        if request.data_to_verify.trim().is_empty() {
            return Err(CoreError::Validation(
                "dataToVerify must not be empty".to_string(),
            ));
        }

        let data_hash = payload_digest(&request.data_to_verify);
        let record = self
            .repo
            .insert(&NewBlockchainRecord {
                order_id: request.order_id,
                record_type: request.record_type,
                data_to_verify: request.data_to_verify,
                data_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            order_id = record.order_id,
            record_type = %record.record_type,
            data_hash = %record.data_hash,
            "Recorded ledger entry"
        );

        Ok(record)
    }

    /// All records previously associated with an order.
    pub async fn records_for_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<BlockchainRecord>, CoreError> {
        Ok(self.repo.find_by_order_id(order_id).await?)
    }

    /// Whether `candidate` matches a stored payload of the given type for the order.
    pub async fn verify(
        &self,
        order_id: i64,
        record_type: RecordType,
        candidate: &str,
    ) -> Result<bool, CoreError> {
        let digest = payload_digest(candidate);
        let records = self.repo.find_by_order_id(order_id).await?;

        Ok(records
            .iter()
            .any(|r| r.record_type == record_type && r.data_hash == digest))
    }
}
