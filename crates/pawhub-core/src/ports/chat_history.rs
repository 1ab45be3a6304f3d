//! Storage of the chat service's prompt/reply exchanges.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::RepositoryError;
use crate::domain::chat::{ChatHistory, NewChatHistory};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Persist a new exchange and return it with its assigned id.
    async fn insert(&self, entry: &NewChatHistory) -> Result<ChatHistory, RepositoryError>;

    /// All exchanges of one user, most recent first.
    ///
    /// Entries with the same `created_at` are ordered by id, newest first.
    async fn find_by_user_id_order_by_created_at_desc(
        &self,
        user_id: i64,
    ) -> Result<Vec<ChatHistory>, RepositoryError>;

    /// Delete every exchange created strictly before `cutoff`.
    /// Returns the number of rows removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
