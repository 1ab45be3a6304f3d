//! Bearer token authentication.
//!
//! Tokens are random and handed out once; only their SHA-256 digest is
//! stored, so a leaked database does not yield usable tokens.

use std::sync::Arc;

use super::blockchain::payload_digest;
use crate::domain::principal::UserPrincipal;
use crate::ports::{AccessTokenRepository, CoreError};

/// Resolves bearer tokens to principals, issues and revokes tokens.
pub struct AuthService {
    tokens: Arc<dyn AccessTokenRepository>,
}

impl AuthService {
    pub fn new(tokens: Arc<dyn AccessTokenRepository>) -> Self {
        Self { tokens }
    }

    /// Resolve a token. Unknown, revoked or blank tokens yield `None`.
    pub async fn authenticate(&self, token: &str) -> Result<Option<UserPrincipal>, CoreError> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(self.tokens.find_principal(&payload_digest(token)).await?)
    }

    /// Issue a fresh random token for a principal.
    pub async fn issue_token(&self, principal: &UserPrincipal) -> Result<String, CoreError> {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.tokens.insert(&payload_digest(&token), principal).await?;
        Ok(token)
    }

    /// Revoke a token. Returns `false` when it was unknown.
    pub async fn revoke_token(&self, token: &str) -> Result<bool, CoreError> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(false);
        }
        let removed = self.tokens.delete(&payload_digest(token)).await?;
        if removed {
            tracing::info!("Revoked access token");
        }
        Ok(removed)
    }
}
