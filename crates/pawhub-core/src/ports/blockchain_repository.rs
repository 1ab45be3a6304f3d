//! Blockchain record repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::blockchain::{BlockchainRecord, NewBlockchainRecord};

/// Ledger entries are append-only and looked up by order id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockchainRecordRepository: Send + Sync {
    /// Insert a new ledger entry.
    async fn insert(&self, record: &NewBlockchainRecord)
    -> Result<BlockchainRecord, RepositoryError>;

    /// All records associated with an order, in insertion order.
    ///
    /// Returns an empty list when the order has no records.
    async fn find_by_order_id(&self, order_id: i64)
    -> Result<Vec<BlockchainRecord>, RepositoryError>;
}
