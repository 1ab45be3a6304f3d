//! Chat exchanges in the `chat_history` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use pawhub_core::{ChatHistory, ChatHistoryRepository, NewChatHistory, RepositoryError};

use super::row_mappers::{
    CHAT_HISTORY_COLUMNS, format_datetime, map_sqlx_error, row_to_chat_history, stored_precision,
};

/// Newest-first history per user, with age-based pruning.
///
/// This struct holds a connection pool and implements the chat history
/// queries using `SQLite`.
pub struct SqliteChatHistoryRepository {
    pool: SqlitePool,
}

impl SqliteChatHistoryRepository {
    /// Repository over `pool`.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatHistoryRepository for SqliteChatHistoryRepository {
    async fn insert(&self, entry: &NewChatHistory) -> Result<ChatHistory, RepositoryError> {
        let created_at = stored_precision(entry.created_at);

        let result = sqlx::query(
            "INSERT INTO chat_history (user_id, prompt, reply, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.user_id)
        .bind(&entry.prompt)
        .bind(&entry.reply)
        .bind(format_datetime(&created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "chat history"))?;

        Ok(ChatHistory {
            id: result.last_insert_rowid(),
            user_id: entry.user_id,
            prompt: entry.prompt.clone(),
            reply: entry.reply.clone(),
            created_at,
        })
    }

    async fn find_by_user_id_order_by_created_at_desc(
        &self,
        user_id: i64,
    ) -> Result<Vec<ChatHistory>, RepositoryError> {
        let query = format!(
            "SELECT {CHAT_HISTORY_COLUMNS}
             FROM chat_history
             WHERE user_id = ?
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_chat_history).collect()
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM chat_history WHERE created_at < ?")
            .bind(format_datetime(&cutoff))
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use chrono::{Duration, TimeZone};

    fn entry(user_id: i64, prompt: &str, created_at: DateTime<Utc>) -> NewChatHistory {
        NewChatHistory {
            user_id,
            prompt: prompt.to_string(),
            reply: format!("re: {prompt}"),
            created_at,
        }
    }

    #[tokio::test]
    async fn history_is_newest_first_and_scoped_to_user() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteChatHistoryRepository::new(pool);
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();

        // Inserted out of chronological order on purpose.
        repo.insert(&entry(1, "second", t0 + Duration::minutes(5)))
            .await
            .unwrap();
        repo.insert(&entry(1, "first", t0)).await.unwrap();
        repo.insert(&entry(1, "third", t0 + Duration::hours(1)))
            .await
            .unwrap();
        repo.insert(&entry(2, "other user", t0 + Duration::days(1)))
            .await
            .unwrap();

        let history = repo
            .find_by_user_id_order_by_created_at_desc(1)
            .await
            .unwrap();
        let prompts: Vec<&str> = history.iter().map(|h| h.prompt.as_str()).collect();

        assert_eq!(prompts, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn equal_timestamps_fall_back_to_newest_id() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteChatHistoryRepository::new(pool);
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();

        let a = repo.insert(&entry(3, "a", t)).await.unwrap();
        let b = repo.insert(&entry(3, "b", t)).await.unwrap();

        let history = repo
            .find_by_user_id_order_by_created_at_desc(3)
            .await
            .unwrap();
        assert_eq!(history, vec![b, a]);
    }

    #[tokio::test]
    async fn delete_older_than_keeps_recent_rows() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteChatHistoryRepository::new(pool);
        let now = Utc::now();

        repo.insert(&entry(1, "old", now - Duration::days(40)))
            .await
            .unwrap();
        repo.insert(&entry(1, "new", now)).await.unwrap();

        let removed = repo
            .delete_older_than(now - Duration::days(30))
            .await
            .unwrap();
        assert_eq!(removed, 1);

        let left = repo
            .find_by_user_id_order_by_created_at_desc(1)
            .await
            .unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].prompt, "new");
    }
}
