//! Token digests in the `access_tokens` table.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use pawhub_core::{AccessTokenRepository, Principal, RepositoryError, UserPrincipal};

use super::row_mappers::{format_datetime, map_sqlx_error};

/// Authorities are stored as a JSON array in a single TEXT column.
pub struct SqliteAccessTokenRepository {
    pool: SqlitePool,
}

impl SqliteAccessTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessTokenRepository for SqliteAccessTokenRepository {
    async fn insert(
        &self,
        token_hash: &str,
        principal: &UserPrincipal,
    ) -> Result<(), RepositoryError> {
        let authorities = serde_json::to_string(principal.authorities())
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        sqlx::query(
            "INSERT INTO access_tokens (token_hash, username, user_id, authorities, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(token_hash)
        .bind(principal.name())
        .bind(principal.user_id())
        .bind(authorities)
        .bind(format_datetime(&Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "access token"))?;

        Ok(())
    }

    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserPrincipal>, RepositoryError> {
        let row = sqlx::query(
            "SELECT username, user_id, authorities FROM access_tokens WHERE token_hash = ?",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let username: String = row
            .try_get("username")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let user_id: i64 = row
            .try_get("user_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let raw: String = row
            .try_get("authorities")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let authorities: BTreeSet<String> = serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::Serialization(format!("authorities: {e}")))?;

        Ok(Some(UserPrincipal::new(username, user_id, authorities)))
    }

    async fn delete(&self, token_hash: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM access_tokens WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn stored_token_resolves_to_principal() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteAccessTokenRepository::new(pool);
        let alice = UserPrincipal::new("alice", 42, ["ROLE_USER", "ROLE_ADMIN"]);

        repo.insert("tok-1", &alice).await.unwrap();

        assert_eq!(repo.find_principal("tok-1").await.unwrap(), Some(alice));
        assert_eq!(repo.find_principal("tok-2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_token_is_rejected() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteAccessTokenRepository::new(pool);
        let bob = UserPrincipal::new("bob", 1, ["ROLE_USER"]);

        repo.insert("same", &bob).await.unwrap();
        let err = repo.insert("same", &bob).await.unwrap_err();

        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn deleted_token_no_longer_resolves() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteAccessTokenRepository::new(pool);
        let cy = UserPrincipal::new("cy", 8, ["ROLE_USER"]);

        repo.insert("gone", &cy).await.unwrap();
        repo.insert("kept", &cy).await.unwrap();

        assert!(repo.delete("gone").await.unwrap());
        assert!(!repo.delete("gone").await.unwrap());
        assert_eq!(repo.find_principal("gone").await.unwrap(), None);
        assert_eq!(repo.find_principal("kept").await.unwrap(), Some(cy));
    }

    #[tokio::test]
    async fn corrupt_authorities_surface_as_serialization_error() {
        let pool = setup_test_database().await.unwrap();
        sqlx::query(
            "INSERT INTO access_tokens (token_hash, username, user_id, authorities, created_at)
             VALUES ('bad', 'eve', 5, 'not json', '2024-01-01 00:00:00.000000')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let repo = SqliteAccessTokenRepository::new(pool);
        let err = repo.find_principal("bad").await.unwrap_err();

        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}
