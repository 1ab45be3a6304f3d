//! Deployable service kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which service a process runs as. Selects mounted routes and jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    User,
    Pet,
    Gym,
    Blockchain,
    Chat,
    /// Every route of every service in one process.
    All,
}

impl ServiceKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::User,
        Self::Pet,
        Self::Gym,
        Self::Blockchain,
        Self::Chat,
        Self::All,
    ];

    /// Lowercase name used on the command line and in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Pet => "pet",
            Self::Gym => "gym",
            Self::Blockchain => "blockchain",
            Self::Chat => "chat",
            Self::All => "all",
        }
    }

    /// Port a process listens on when none is configured.
    pub const fn default_port(self) -> u16 {
        match self {
            Self::All => 8080,
            Self::User => 8081,
            Self::Pet => 8082,
            Self::Gym => 8083,
            Self::Blockchain => 8084,
            Self::Chat => 8085,
        }
    }

    /// Whether this process serves the routes of `other`.
    pub fn includes(self, other: Self) -> bool {
        self == Self::All || self == other
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a service name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown service '{0}' (expected one of: user, pet, gym, blockchain, chat, all)")]
pub struct ParseServiceKindError(String);

impl FromStr for ServiceKind {
    type Err = ParseServiceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ParseServiceKindError(s.to_string()))
    }
}
