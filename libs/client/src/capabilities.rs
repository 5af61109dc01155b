//! Role-to-capability policy
//!
//! A pure function from role to capability set, decoupled from rendering so
//! the policy is testable on its own. Hiding controls is a usability
//! affordance only; the server re-checks every mutation.

use crate::models::Role;

/// What a role may do in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_create_olympiad: bool,
    pub can_approve: bool,
    pub can_record_result: bool,
    pub can_view_own_stats_only: bool,
}

impl Capabilities {
    /// Capability set of a role. Roles are mutually exclusive; there is no
    /// multi-role principal.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self {
                can_create_olympiad: false,
                can_approve: false,
                can_record_result: false,
                can_view_own_stats_only: true,
            },
            Role::Teacher => Self {
                can_create_olympiad: true,
                can_approve: false,
                can_record_result: true,
                can_view_own_stats_only: false,
            },
            Role::Admin => Self {
                can_create_olympiad: true,
                can_approve: true,
                can_record_result: true,
                can_view_own_stats_only: false,
            },
        }
    }
}

impl From<Role> for Capabilities {
    fn from(role: Role) -> Self {
        Self::for_role(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_capabilities() {
        let caps = Capabilities::for_role(Role::Student);
        assert!(!caps.can_create_olympiad);
        assert!(!caps.can_approve);
        assert!(!caps.can_record_result);
        assert!(caps.can_view_own_stats_only);
    }

    #[test]
    fn test_teacher_capabilities() {
        let caps = Capabilities::for_role(Role::Teacher);
        assert!(caps.can_create_olympiad);
        assert!(!caps.can_approve);
        assert!(caps.can_record_result);
        assert!(!caps.can_view_own_stats_only);
    }

    #[test]
    fn test_only_admin_approves() {
        assert!(Capabilities::for_role(Role::Admin).can_approve);
        assert!(!Capabilities::for_role(Role::Teacher).can_approve);
        assert!(!Capabilities::for_role(Role::Student).can_approve);
    }

    #[test]
    fn test_admin_capabilities() {
        let caps: Capabilities = Role::Admin.into();
        assert!(caps.can_create_olympiad);
        assert!(caps.can_record_result);
        assert!(!caps.can_view_own_stats_only);
    }
}
