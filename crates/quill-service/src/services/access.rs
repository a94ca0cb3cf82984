//! Authorization helpers bridging the domain policy into service results

use quill_core::entities::User;
use quill_core::policy::{self, Capability, Ownership};

use super::error::ServiceResult;

/// Check that the principal holds a capability, honoring the ownership
/// exception and the ban gate. Fails closed.
pub fn require(principal: &User, capability: Capability, ownership: Ownership) -> ServiceResult<()> {
    policy::authorize(principal.role, principal.banned, capability, ownership)?;
    Ok(())
}

/// Check that the actor strictly outranks the target for ban/unban
pub fn require_ban_rank(actor: &User, target: &User) -> ServiceResult<()> {
    policy::check_ban_rank(actor.role, target.role)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::value_objects::{Role, Snowflake};

    fn user_with_role(role: Role) -> User {
        let mut user = User::new(
            Snowflake::new(1),
            "tester".to_string(),
            "tester@example.com".to_string(),
        );
        user.role = role;
        user
    }

    #[test]
    fn test_banned_principal_denied_mutation() {
        let mut user = user_with_role(Role::Moderator);
        user.apply_ban(Snowflake::new(2), None);

        assert!(require(&user, Capability::UpdateReport, Ownership::NotApplicable).is_err());
        // Reads stay allowed
        assert!(require(&user, Capability::ReadAnyReport, Ownership::NotApplicable).is_ok());
    }

    #[test]
    fn test_ownership_exception_grants_mutation() {
        let user = user_with_role(Role::User);
        assert!(require(&user, Capability::DeleteOwnPost, Ownership::Owner).is_ok());
        assert!(require(&user, Capability::DeleteAnyPost, Ownership::NotOwner).is_err());
    }

    #[test]
    fn test_rank_check_rejects_peers() {
        let moderator = user_with_role(Role::Moderator);
        let peer = user_with_role(Role::Moderator);
        let regular = user_with_role(Role::User);

        assert!(require_ban_rank(&moderator, &regular).is_ok());
        assert!(require_ban_rank(&moderator, &peer).is_err());
    }
}
