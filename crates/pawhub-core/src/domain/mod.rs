//! Domain types for the pawhub services.
//!
//! These are pure data types with no infrastructure dependencies.

pub mod blockchain;
pub mod chat;
pub mod principal;
pub mod profile;

pub use blockchain::{BlockchainRecord, BlockchainRequest, NewBlockchainRecord, RecordType};
pub use chat::{ChatHistory, NewChatHistory};
pub use principal::{Principal, UserPrincipal};
pub use profile::{Address, AddressInput, NewAddress, NewUserProfile, UserProfile};
