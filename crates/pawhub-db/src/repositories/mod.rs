//! `SQLite` implementations of the core repository ports.
//!
//! All SQL lives here. Timestamps are stored as UTC text, see `row_mappers`.

mod row_mappers;
mod sqlite_access_token_repository;
mod sqlite_blockchain_record_repository;
mod sqlite_chat_history_repository;
mod sqlite_profile_repository;

pub use sqlite_access_token_repository::SqliteAccessTokenRepository;
pub use sqlite_blockchain_record_repository::SqliteBlockchainRecordRepository;
pub use sqlite_chat_history_repository::SqliteChatHistoryRepository;
pub use sqlite_profile_repository::{SqliteAddressRepository, SqliteUserProfileRepository};
