//! Core domain types, repository ports and services for pawhub.
//!
//! This crate has no knowledge of storage or transport. Adapters wire
//! concrete repositories into [`AppCore`] at their composition root.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Flat re-exports for adapters
pub use domain::{
    Address, AddressInput, BlockchainRecord, BlockchainRequest, ChatHistory, NewAddress,
    NewBlockchainRecord, NewChatHistory, NewUserProfile, Principal, RecordType, UserPrincipal,
    UserProfile,
};
pub use ports::{
    AccessTokenRepository, AddressRepository, BlockchainRecordRepository, ChatHistoryRepository,
    CoreError, Repos, RepositoryError, UserProfileRepository,
};
pub use services::{
    AppCore, AuthService, BlockchainService, ChatHistoryService, ChatRetentionJob, HeartbeatJob,
    ProfileService, ScheduledJob, payload_digest,
};
pub use settings::{SchedulerSettings, SettingsError, validate_settings};

// Paths
pub use paths::{PathError, data_root, database_path};
