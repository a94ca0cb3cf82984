//! Role-gated access policy
//!
//! An explicit capability table evaluated server-side, replacing any notion of
//! client-asserted authority. Authorization fails closed: absence of a grant
//! denies. Ownership is an exception channel: a mutating operation on an owned
//! resource is allowed to its owner regardless of role.

use crate::error::DomainError;
use crate::value_objects::Role;

/// Operations the policy knows how to gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    // Any authenticated principal
    CreateReport,
    CreatePost,
    ReadOwnProfile,
    EditOwnPost,
    DeleteOwnPost,

    // Staff (moderator and above)
    ReadAnyReport,
    UpdateReport,
    DeleteAnyPost,
    BanUser,

    // Admin only
    ManageRoles,
    ReadSecurityLogs,
    BanModerator,
}

impl Capability {
    /// Stable name used in denial messages and audit details
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateReport => "create_report",
            Self::CreatePost => "create_post",
            Self::ReadOwnProfile => "read_own_profile",
            Self::EditOwnPost => "edit_own_post",
            Self::DeleteOwnPost => "delete_own_post",
            Self::ReadAnyReport => "read_any_report",
            Self::UpdateReport => "update_report",
            Self::DeleteAnyPost => "delete_any_post",
            Self::BanUser => "ban_user",
            Self::ManageRoles => "manage_roles",
            Self::ReadSecurityLogs => "read_security_logs",
            Self::BanModerator => "ban_moderator",
        }
    }

    /// Whether exercising this capability changes state. Banned principals
    /// are denied every mutating capability regardless of role.
    pub const fn is_mutating(self) -> bool {
        !matches!(
            self,
            Self::ReadOwnProfile | Self::ReadAnyReport | Self::ReadSecurityLogs
        )
    }
}

/// Ownership relation between the acting principal and the target resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owner,
    NotOwner,
    /// The operation has no owned target (e.g. listing reports)
    NotApplicable,
}

/// The role -> capability grant table
///
/// Each role includes everything the lower roles hold.
pub fn grants(role: Role, capability: Capability) -> bool {
    use Capability::*;

    let user = matches!(
        capability,
        CreateReport | CreatePost | ReadOwnProfile | EditOwnPost | DeleteOwnPost
    );
    let moderator = user
        || matches!(capability, ReadAnyReport | UpdateReport | DeleteAnyPost | BanUser);
    let admin = moderator || matches!(capability, ManageRoles | ReadSecurityLogs | BanModerator);

    match role {
        Role::User => user,
        Role::Moderator => moderator,
        Role::Admin => admin,
    }
}

/// Authorize a principal for a capability against an optionally-owned target.
///
/// Order of evaluation: ban gate first (mutations only), then the ownership
/// exception, then the capability table. Denial is always distinguishable
/// from "not found".
pub fn authorize(
    role: Role,
    banned: bool,
    capability: Capability,
    ownership: Ownership,
) -> Result<(), DomainError> {
    if banned && capability.is_mutating() {
        return Err(DomainError::PrincipalBanned);
    }

    if ownership == Ownership::Owner {
        return Ok(());
    }

    if grants(role, capability) {
        return Ok(());
    }

    Err(DomainError::MissingCapability(capability.name()))
}

/// Rank check for ban/unban: the actor must strictly outrank the target.
pub fn check_ban_rank(actor: Role, target: Role) -> Result<(), DomainError> {
    if actor.outranks(target) {
        Ok(())
    } else {
        Err(DomainError::PolicyViolation(format!(
            "{actor} cannot ban or unban {target}"
        )))
    }
}
