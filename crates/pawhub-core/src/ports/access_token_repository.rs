//! Access token repository port definition.
//!
//! Maps bearer token digests to the principal they authenticate. The
//! plaintext token never reaches storage.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::principal::UserPrincipal;

/// Repository for bearer tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenRepository: Send + Sync {
    /// Store a token digest for a principal.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the digest is taken.
    async fn insert(
        &self,
        token_hash: &str,
        principal: &UserPrincipal,
    ) -> Result<(), RepositoryError>;

    /// Resolve a token digest to its principal.
    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserPrincipal>, RepositoryError>;

    /// Remove a token digest. Returns whether a row was deleted.
    async fn delete(&self, token_hash: &str) -> Result<bool, RepositoryError>;
}
