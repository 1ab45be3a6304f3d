//! Storage ports used by the services.
//!
//! Signatures speak only in domain types; every method is one storage
//! round trip. `pawhub-db` provides the `SQLite` implementations and tests
//! swap in `mockall` mocks.

pub mod access_token_repository;
pub mod blockchain_repository;
pub mod chat_history;
pub mod profile_repository;

use std::sync::Arc;
use thiserror::Error;

pub use access_token_repository::AccessTokenRepository;
pub use blockchain_repository::BlockchainRecordRepository;
pub use chat_history::ChatHistoryRepository;
pub use profile_repository::{AddressRepository, UserProfileRepository};

/// Every repository `AppCore` needs, as trait objects.
///
/// ```ignore
/// let core = AppCore::new(pawhub_db::CoreFactory::build_repos(pool));
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Ledger entries for the blockchain service.
    pub blockchain_records: Arc<dyn BlockchainRecordRepository>,
    /// Chat exchanges for the AI chat service.
    pub chat_history: Arc<dyn ChatHistoryRepository>,
    /// User profiles for the user service.
    pub profiles: Arc<dyn UserProfileRepository>,
    /// Addresses for the user service.
    pub addresses: Arc<dyn AddressRepository>,
    /// Bearer tokens for request authentication.
    pub access_tokens: Arc<dyn AccessTokenRepository>,
}

impl Repos {
    pub fn new(
        blockchain_records: Arc<dyn BlockchainRecordRepository>,
        chat_history: Arc<dyn ChatHistoryRepository>,
        profiles: Arc<dyn UserProfileRepository>,
        addresses: Arc<dyn AddressRepository>,
        access_tokens: Arc<dyn AccessTokenRepository>,
    ) -> Self {
        Self {
            blockchain_records,
            chat_history,
            profiles,
            addresses,
            access_tokens,
        }
    }
}

/// Failure reported by a repository. Backend errors arrive as strings.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    /// A unique key is already taken.
    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("storage failure: {0}")]
    Storage(String),

    /// A stored column could not be decoded.
    #[error("malformed stored value: {0}")]
    Serialization(String),

    /// Foreign key or check constraint rejected the write.
    #[error("constraint rejected write: {0}")]
    Constraint(String),
}

/// Error returned by every service. The HTTP adapter maps it to a status
/// code, the CLI to an exit code.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Caller input is unusable.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("internal: {0}")]
    Internal(String),
}
