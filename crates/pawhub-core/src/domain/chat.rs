//! AI chat history domain types.
//!
//! These types represent a user's exchanges with the assistant, independent
//! of any infrastructure concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One prompt/reply exchange recorded for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistory {
    pub id: i64,
    pub user_id: i64,
    pub prompt: String,
    pub reply: String,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a new chat history entry.
#[derive(Debug, Clone)]
pub struct NewChatHistory {
    pub user_id: i64,
    pub prompt: String,
    pub reply: String,
    pub created_at: DateTime<Utc>,
}
