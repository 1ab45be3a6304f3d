//! Authenticated identity attached to a request.
//!
//! `UserPrincipal` is a plain value composed of the login name, the numeric
//! user id and the granted authorities. Authorization checks depend on the
//! [`Principal`] trait rather than on the concrete type.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability interface used by authorization checks.
pub trait Principal: Send + Sync {
    /// Login name of the identity.
    fn name(&self) -> &str;

    /// Numeric user id used for ownership scoping.
    fn user_id(&self) -> i64;

    /// Granted authority strings (e.g. `ROLE_USER`).
    fn authorities(&self) -> &BTreeSet<String>;

    /// Whether the given authority was granted.
    fn has_authority(&self, authority: &str) -> bool {
        self.authorities().contains(authority)
    }
}

/// Concrete principal produced by token authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrincipal {
    username: String,
    user_id: i64,
    authorities: BTreeSet<String>,
}

impl UserPrincipal {
    /// Build a principal from its three components.
    pub fn new<I, S>(username: impl Into<String>, user_id: i64, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            user_id,
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }
}

impl Principal for UserPrincipal {
    fn name(&self) -> &str {
        &self.username
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn authorities(&self) -> &BTreeSet<String> {
        &self.authorities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorities_are_deduplicated() {
        let p = UserPrincipal::new("alice", 7, ["ROLE_USER", "ROLE_USER", "ROLE_ADMIN"]);
        assert_eq!(p.authorities().len(), 2);
        assert!(p.has_authority("ROLE_ADMIN"));
        assert!(!p.has_authority("ROLE_GYM"));
    }

    #[test]
    fn exposes_name_and_id() {
        let p = UserPrincipal::new("bob", 12, Vec::<String>::new());
        assert_eq!(p.name(), "bob");
        assert_eq!(p.user_id(), 12);
        assert!(p.authorities().is_empty());
    }
}
