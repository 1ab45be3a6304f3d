//! `SQLite` implementation of the `BlockchainRecordRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pawhub_core::{BlockchainRecord, BlockchainRecordRepository, NewBlockchainRecord, RepositoryError};

use super::row_mappers::{
    BLOCKCHAIN_RECORD_COLUMNS, format_datetime, map_sqlx_error, row_to_blockchain_record,
    stored_precision,
};

/// `SQLite` implementation of the `BlockchainRecordRepository` trait.
pub struct SqliteBlockchainRecordRepository {
    pool: SqlitePool,
}

impl SqliteBlockchainRecordRepository {
    /// Create a new `SQLite` blockchain record repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockchainRecordRepository for SqliteBlockchainRecordRepository {
    async fn insert(
        &self,
        record: &NewBlockchainRecord,
    ) -> Result<BlockchainRecord, RepositoryError> {
        let created_at = stored_precision(record.created_at);

        let result = sqlx::query(
            "INSERT INTO blockchain_records (order_id, record_type, data_to_verify, data_hash, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.order_id)
        .bind(record.record_type.as_str())
        .bind(&record.data_to_verify)
        .bind(&record.data_hash)
        .bind(format_datetime(&created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "blockchain record"))?;

        Ok(BlockchainRecord {
            id: result.last_insert_rowid(),
            order_id: record.order_id,
            record_type: record.record_type,
            data_to_verify: record.data_to_verify.clone(),
            data_hash: record.data_hash.clone(),
            created_at,
        })
    }

    async fn find_by_order_id(
        &self,
        order_id: i64,
    ) -> Result<Vec<BlockchainRecord>, RepositoryError> {
        let query = format!(
            "SELECT {BLOCKCHAIN_RECORD_COLUMNS} FROM blockchain_records WHERE order_id = ? ORDER BY id ASC"
        );
        let rows = sqlx::query(&query)
            .bind(order_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_blockchain_record).collect()
    }
}
