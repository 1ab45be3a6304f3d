//! Profile service for the user service area.
//!
//! Every operation is scoped to the calling principal. A user can only see
//! or extend addresses linked to their own profile.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::principal::Principal;
use crate::domain::profile::{Address, AddressInput, NewAddress, NewUserProfile, UserProfile};
use crate::ports::{AddressRepository, CoreError, RepositoryError, UserProfileRepository};

/// Service for user profiles and their addresses.
pub struct ProfileService {
    profiles: Arc<dyn UserProfileRepository>,
    addresses: Arc<dyn AddressRepository>,
}

impl ProfileService {
    /// Create a new profile service.
    pub fn new(
        profiles: Arc<dyn UserProfileRepository>,
        addresses: Arc<dyn AddressRepository>,
    ) -> Self {
        Self {
            profiles,
            addresses,
        }
    }

    /// Create the caller's profile.
    pub async fn create_profile(
        &self,
        principal: &dyn Principal,
        display_name: String,
    ) -> Result<UserProfile, CoreError> {
        let display_name = display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(CoreError::Validation(
                "displayName must not be empty".to_string(),
            ));
        }

        Ok(self
            .profiles
            .insert(&NewUserProfile {
                user_id: principal.user_id(),
                display_name,
                created_at: Utc::now(),
            })
            .await?)
    }

    /// The caller's profile.
    pub async fn profile_for(&self, principal: &dyn Principal) -> Result<UserProfile, CoreError> {
        self.profiles
            .find_by_user_id(principal.user_id())
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("profile for user {}", principal.user_id()))
                    .into()
            })
    }

    /// Add an address to the caller's profile.
    pub async fn add_address(
        &self,
        principal: &dyn Principal,
        input: AddressInput,
    ) -> Result<Address, CoreError> {
        validate_address(&input)?;
        let profile = self.profile_for(principal).await?;

        Ok(self
            .addresses
            .insert(&NewAddress {
                user_profile_id: profile.id,
                input,
                created_at: Utc::now(),
            })
            .await?)
    }

    /// One of the caller's addresses.
    ///
    /// Addresses owned by other users are reported as not found.
    pub async fn address(
        &self,
        principal: &dyn Principal,
        address_id: i64,
    ) -> Result<Address, CoreError> {
        match self
            .addresses
            .find_by_id_and_owner(address_id, principal.user_id())
            .await?
        {
            Some(address) => Ok(address),
            None => {
                tracing::debug!(
                    address_id,
                    user_id = principal.user_id(),
                    "Address lookup outside owner scope"
                );
                Err(RepositoryError::NotFound(format!("address {address_id}")).into())
            }
        }
    }

    /// All addresses linked to the caller's profile.
    ///
    /// A caller without a profile has no addresses.
    pub async fn addresses(&self, principal: &dyn Principal) -> Result<Vec<Address>, CoreError> {
        let Some(profile) = self.profiles.find_by_user_id(principal.user_id()).await? else {
            return Ok(Vec::new());
        };

        Ok(self.addresses.find_by_user_profile_id(profile.id).await?)
    }
}

fn validate_address(input: &AddressInput) -> Result<(), CoreError> {
    let required = [
        ("line1", &input.line1),
        ("city", &input.city),
        ("postalCode", &input.postal_code),
        ("country", &input.country),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{field} must not be empty")));
        }
    }

    Ok(())
}
