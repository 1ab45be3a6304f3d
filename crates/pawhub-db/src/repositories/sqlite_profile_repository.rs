//! `SQLite` implementations of the `UserProfileRepository` and
//! `AddressRepository` traits.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pawhub_core::{
    Address, AddressRepository, NewAddress, NewUserProfile, RepositoryError, UserProfile,
    UserProfileRepository,
};

use super::row_mappers::{
    ADDRESS_COLUMNS, USER_PROFILE_COLUMNS, format_datetime, map_sqlx_error, row_to_address,
    row_to_user_profile, stored_precision,
};

/// `SQLite` implementation of the `UserProfileRepository` trait.
pub struct SqliteUserProfileRepository {
    pool: SqlitePool,
}

impl SqliteUserProfileRepository {
    /// Create a new `SQLite` profile repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for SqliteUserProfileRepository {
    async fn insert(&self, profile: &NewUserProfile) -> Result<UserProfile, RepositoryError> {
        let created_at = stored_precision(profile.created_at);

        let result = sqlx::query(
            "INSERT INTO user_profiles (user_id, display_name, created_at) VALUES (?, ?, ?)",
        )
        .bind(profile.user_id)
        .bind(&profile.display_name)
        .bind(format_datetime(&created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, &format!("profile for user {}", profile.user_id)))?;

        Ok(UserProfile {
            id: result.last_insert_rowid(),
            user_id: profile.user_id,
            display_name: profile.display_name.clone(),
            created_at,
        })
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<UserProfile>, RepositoryError> {
        let query = format!("SELECT {USER_PROFILE_COLUMNS} FROM user_profiles WHERE user_id = ?");
        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_user_profile).transpose()
    }
}

/// `SQLite` implementation of the `AddressRepository` trait.
///
/// Ownership is resolved with a join on `user_profiles`, so an address is
/// only visible through the user id of the profile it references.
pub struct SqliteAddressRepository {
    pool: SqlitePool,
}

impl SqliteAddressRepository {
    /// Create a new `SQLite` address repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for SqliteAddressRepository {
    async fn insert(&self, address: &NewAddress) -> Result<Address, RepositoryError> {
        let created_at = stored_precision(address.created_at);
        let input = &address.input;

        let result = sqlx::query(
            "INSERT INTO addresses (user_profile_id, line1, line2, city, postal_code, country, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(address.user_profile_id)
        .bind(&input.line1)
        .bind(&input.line2)
        .bind(&input.city)
        .bind(&input.postal_code)
        .bind(&input.country)
        .bind(format_datetime(&created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "address"))?;

        Ok(Address {
            id: result.last_insert_rowid(),
            user_profile_id: address.user_profile_id,
            line1: input.line1.clone(),
            line2: input.line2.clone(),
            city: input.city.clone(),
            postal_code: input.postal_code.clone(),
            country: input.country.clone(),
            created_at,
        })
    }

    async fn find_by_id_and_owner(
        &self,
        address_id: i64,
        owner_user_id: i64,
    ) -> Result<Option<Address>, RepositoryError> {
        let query = format!(
            "SELECT {ADDRESS_COLUMNS}
             FROM addresses a
             JOIN user_profiles p ON p.id = a.user_profile_id
             WHERE a.id = ? AND p.user_id = ?"
        );
        let row = sqlx::query(&query)
            .bind(address_id)
            .bind(owner_user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_address).transpose()
    }

    async fn find_by_user_profile_id(
        &self,
        user_profile_id: i64,
    ) -> Result<Vec<Address>, RepositoryError> {
        let query = format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses a WHERE a.user_profile_id = ? ORDER BY a.id ASC"
        );
        let rows = sqlx::query(&query)
            .bind(user_profile_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_address).collect()
    }
}
