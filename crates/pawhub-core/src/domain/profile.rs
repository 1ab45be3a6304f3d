//! User profile and address domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile attached to an authenticated user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    /// Identity id carried by the principal; unique per profile.
    pub user_id: i64,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a profile.
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub user_id: i64,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Postal address owned through a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub user_profile_id: i64,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied address fields (the owner comes from the principal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Data for inserting an address.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_profile_id: i64,
    pub input: AddressInput,
    pub created_at: DateTime<Utc>,
}
