//! Wiring of `SQLite` repositories into `AppCore`.

use sqlx::SqlitePool;
use std::sync::Arc;

use pawhub_core::{AppCore, Repos};

use crate::repositories::{
    SqliteAccessTokenRepository, SqliteAddressRepository, SqliteBlockchainRecordRepository,
    SqliteChatHistoryRepository, SqliteUserProfileRepository,
};

/// Builds repositories and `AppCore` over one shared pool.
pub struct CoreFactory;

impl CoreFactory {
    /// One repository per port, all sharing `pool`.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteBlockchainRecordRepository::new(pool.clone())),
            Arc::new(SqliteChatHistoryRepository::new(pool.clone())),
            Arc::new(SqliteUserProfileRepository::new(pool.clone())),
            Arc::new(SqliteAddressRepository::new(pool.clone())),
            Arc::new(SqliteAccessTokenRepository::new(pool)),
        )
    }

    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}

/// In-memory database with the full schema, for tests in any crate.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// A fresh `AppCore` over this database. Cores built from the same
    /// `TestDb` see each other's writes.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawhub_core::{BlockchainRequest, RecordType, UserPrincipal};

    #[tokio::test]
    async fn app_core_from_test_db_round_trips_through_sqlite() {
        let db = TestDb::new().await.unwrap();
        let core = db.app_core();

        let record = core
            .blockchain()
            .record(BlockchainRequest {
                order_id: 7,
                record_type: RecordType::Batch,
                data_to_verify: "lot-42".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            core.blockchain().records_for_order(7).await.unwrap(),
            vec![record]
        );

        let alice = UserPrincipal::new("alice", 3, ["ROLE_USER"]);
        let token = core.auth().issue_token(&alice).await.unwrap();
        assert_eq!(db.app_core().auth().authenticate(&token).await.unwrap(), Some(alice));
    }

    #[tokio::test]
    async fn tokens_are_stored_hashed_and_can_be_revoked() {
        let db = TestDb::new().await.unwrap();
        let core = db.app_core();
        let token = core
            .auth()
            .issue_token(&UserPrincipal::new("bo", 4, ["ROLE_USER"]))
            .await
            .unwrap();

        let (stored,): (String,) = sqlx::query_as("SELECT token_hash FROM access_tokens")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_ne!(stored, token);
        assert_eq!(stored, pawhub_core::payload_digest(&token));

        assert!(core.auth().revoke_token(&token).await.unwrap());
        assert_eq!(core.auth().authenticate(&token).await.unwrap(), None);
        assert!(!core.auth().revoke_token(&token).await.unwrap());
    }
}
