//! User profile and address repository port definitions.
//!
//! Address lookups are always scoped: either by the owning profile id or by
//! the pair (address id, owner user id).

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::profile::{Address, NewAddress, NewUserProfile, UserProfile};

/// Repository for user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Insert a profile.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the user already has one.
    async fn insert(&self, profile: &NewUserProfile) -> Result<UserProfile, RepositoryError>;

    /// The profile of a user, if any.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<UserProfile>, RepositoryError>;
}

/// Repository for addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Insert an address for an existing profile.
    async fn insert(&self, address: &NewAddress) -> Result<Address, RepositoryError>;

    /// Find an address by id, but only if it belongs to `owner_user_id`.
    ///
    /// Returns `Ok(None)` both when the address does not exist and when it
    /// is owned by somebody else.
    async fn find_by_id_and_owner(
        &self,
        address_id: i64,
        owner_user_id: i64,
    ) -> Result<Option<Address>, RepositoryError>;

    /// All addresses linked to a profile, oldest first.
    async fn find_by_user_profile_id(
        &self,
        user_profile_id: i64,
    ) -> Result<Vec<Address>, RepositoryError>;
}
