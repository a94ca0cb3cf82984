//! Role - the principal's authority level
//!
//! Roles form a total order: user < moderator < admin. The ordering drives the
//! rank check for moderation actions (an actor may only ban strictly lower
//! ranks) and the capability table in [`crate::policy`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authority level of a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

impl Role {
    /// Numeric rank: user(0) < moderator(1) < admin(2)
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::User => 0,
            Self::Moderator => 1,
            Self::Admin => 2,
        }
    }

    /// True if this role strictly outranks `other`
    ///
    /// An actor may ban/unban only principals it outranks. A moderator never
    /// outranks a moderator, so moderator-on-moderator bans are rejected.
    #[inline]
    pub fn outranks(self, other: Role) -> bool {
        self.rank() > other.rank()
    }

    #[inline]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }

    #[inline]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Database / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Parse from the database string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "moderator" => Some(Self::Moderator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Role::Admin.outranks(Role::Moderator));
        assert!(Role::Admin.outranks(Role::User));
        assert!(Role::Moderator.outranks(Role::User));
    }

    #[test]
    fn test_equal_rank_does_not_outrank() {
        assert!(!Role::Moderator.outranks(Role::Moderator));
        assert!(!Role::Moderator.outranks(Role::Admin));
        assert!(!Role::Admin.outranks(Role::Admin));
    }

    #[test]
    fn test_parse_roundtrip() {
        for role in [Role::User, Role::Moderator, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "\"moderator\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
