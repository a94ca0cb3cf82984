//! User entity - the principal executing operations
//!
//! Carries the role and ban state the access policy evaluates. Role changes
//! only happen through an explicit admin action, never self-service.

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, Snowflake};

/// A platform account, also the authenticated principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub banned: bool,
    pub banned_at: Option<DateTime<Utc>>,
    pub banned_by: Option<Snowflake>,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the default `user` role
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            role: Role::User,
            banned: false,
            banned_at: None,
            banned_by: None,
            ban_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_banned(&self) -> bool {
        self.banned
    }

    /// Apply a ban. Idempotent: re-banning refreshes the actor and reason to
    /// the latest action without stacking metadata.
    pub fn apply_ban(&mut self, actor: Snowflake, reason: Option<String>) {
        let now = Utc::now();
        self.banned = true;
        self.banned_at = Some(now);
        self.banned_by = Some(actor);
        self.ban_reason = reason;
        self.updated_at = now;
    }

    /// Lift a ban, clearing every ban field. A user that was banned and then
    /// unbanned is indistinguishable (ban fields) from one never banned.
    pub fn lift_ban(&mut self) {
        self.banned = false;
        self.banned_at = None;
        self.banned_by = None;
        self.ban_reason = None;
        self.updated_at = Utc::now();
    }

    /// Change the role (explicit admin action only)
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(Snowflake::new(1), "alice".to_string(), "alice@example.com".to_string())
    }

    #[test]
    fn test_new_user_is_unbanned_regular_user() {
        let user = test_user();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_banned());
        assert!(user.banned_at.is_none());
    }

    #[test]
    fn test_ban_then_unban_clears_all_fields() {
        let mut user = test_user();
        user.apply_ban(Snowflake::new(99), Some("spam".to_string()));
        assert!(user.is_banned());
        assert_eq!(user.banned_by, Some(Snowflake::new(99)));

        user.lift_ban();
        assert!(!user.is_banned());
        assert!(user.banned_at.is_none());
        assert!(user.banned_by.is_none());
        assert!(user.ban_reason.is_none());
    }

    #[test]
    fn test_reban_refreshes_metadata() {
        let mut user = test_user();
        user.apply_ban(Snowflake::new(10), Some("first".to_string()));
        user.apply_ban(Snowflake::new(20), Some("second".to_string()));
        assert_eq!(user.banned_by, Some(Snowflake::new(20)));
        assert_eq!(user.ban_reason.as_deref(), Some("second"));
    }
}
