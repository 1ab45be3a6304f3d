//! Per-user AI chat history.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::chat::{ChatHistory, NewChatHistory};
use crate::domain::principal::Principal;
use crate::ports::{ChatHistoryRepository, CoreError};

/// History is always scoped to the calling principal's user id.
pub struct ChatHistoryService {
    repo: Arc<dyn ChatHistoryRepository>,
}

impl ChatHistoryService {
    pub fn new(repo: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { repo }
    }

    /// Record an exchange for the caller, stamped with the current time.
    pub async fn append(
        &self,
        principal: &dyn Principal,
        prompt: String,
        reply: String,
    ) -> Result<ChatHistory, CoreError> {
        if prompt.trim().is_empty() {
            return Err(CoreError::Validation("prompt must not be empty".to_string()));
        }

        Ok(self
            .repo
            .insert(&NewChatHistory {
                user_id: principal.user_id(),
                prompt,
                reply,
                created_at: Utc::now(),
            })
            .await?)
    }

    /// The caller's history, most recent first.
    pub async fn history_for(
        &self,
        principal: &dyn Principal,
    ) -> Result<Vec<ChatHistory>, CoreError> {
        Ok(self
            .repo
            .find_by_user_id_order_by_created_at_desc(principal.user_id())
            .await?)
    }

    /// Delete history older than `days` days. Returns the number of rows removed.
    pub async fn prune_older_than(&self, days: u32) -> Result<u64, CoreError> {
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        Ok(self.repo.delete_older_than(cutoff).await?)
    }
}
