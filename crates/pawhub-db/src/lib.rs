//! `SQLite` persistence for pawhub.
//!
//! Implements the repository ports from `pawhub-core` on top of `sqlx`, and
//! provides [`CoreFactory`] for composing an `AppCore` from a pool.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;

// Shared with the adapters' test suites via the `test-utils` feature
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::{
    SqliteAccessTokenRepository, SqliteAddressRepository, SqliteBlockchainRecordRepository,
    SqliteChatHistoryRepository, SqliteUserProfileRepository,
};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
