/**
 * Roles and Permissions
 *
 * This module defines the fixed set of roles, the permission identifiers,
 * and the pure lookup table mapping role-set x permission to a boolean.
 * Both the backend (permission checks, role assignment) and the client
 * (role badges in the user menu) use these types.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named permission tier.
///
/// Roles form a small fixed set; role rows are created lazily in the
/// database on first reference, using [`Role::description`] for the
/// description column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Site owner
    Emperor,
    /// Privileged user
    Knight,
    /// Regular user
    Civilian,
}

impl Role {
    /// Database name of the role (the unique `roles.name` value)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Emperor => "emperor",
            Role::Knight => "knight",
            Role::Civilian => "civilian",
        }
    }

    /// Human-readable description stored on the role row
    pub fn description(&self) -> &'static str {
        match self {
            Role::Emperor => "Emperor (site owner)",
            Role::Knight => "Knight (privileged user)",
            Role::Civilian => "Civilian (regular user)",
        }
    }

    /// Permissions granted to this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Emperor => &[
                Permission::ReadMail,
                Permission::SendMail,
                Permission::ExtendedQuota,
                Permission::ManageUsers,
                Permission::ManageSettings,
            ],
            Role::Knight => &[
                Permission::ReadMail,
                Permission::SendMail,
                Permission::ExtendedQuota,
            ],
            Role::Civilian => &[Permission::ReadMail, Permission::SendMail],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emperor" => Ok(Role::Emperor),
            "knight" => Ok(Role::Knight),
            "civilian" => Ok(Role::Civilian),
            _ => Err(()),
        }
    }
}

/// Permission identifier checked against a user's role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Read mailboxes
    ReadMail,
    /// Send mail
    SendMail,
    /// Raised mailbox and attachment quotas
    ExtendedQuota,
    /// List and manage user accounts
    ManageUsers,
    /// Change site-wide settings
    ManageSettings,
}

/// Check whether any of the given role names grants the permission.
///
/// Unknown role names are ignored, so a stale or renamed role row in the
/// database never grants anything.
pub fn has_permission(role_names: &[String], permission: Permission) -> bool {
    role_names
        .iter()
        .filter_map(|name| name.parse::<Role>().ok())
        .any(|role| role.permissions().contains(&permission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Emperor, Role::Knight, Role::Civilian] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_name() {
        assert!("wizard".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_emperor_has_every_permission() {
        let roles = vec!["emperor".to_string()];
        for permission in [
            Permission::ReadMail,
            Permission::SendMail,
            Permission::ExtendedQuota,
            Permission::ManageUsers,
            Permission::ManageSettings,
        ] {
            assert!(has_permission(&roles, permission));
        }
    }

    #[test]
    fn test_civilian_cannot_manage_users() {
        let roles = vec!["civilian".to_string()];
        assert!(has_permission(&roles, Permission::ReadMail));
        assert!(has_permission(&roles, Permission::SendMail));
        assert!(!has_permission(&roles, Permission::ManageUsers));
        assert!(!has_permission(&roles, Permission::ManageSettings));
        assert!(!has_permission(&roles, Permission::ExtendedQuota));
    }

    #[test]
    fn test_knight_quota_but_no_admin() {
        let roles = vec!["knight".to_string()];
        assert!(has_permission(&roles, Permission::ExtendedQuota));
        assert!(!has_permission(&roles, Permission::ManageUsers));
    }

    #[test]
    fn test_unknown_role_grants_nothing() {
        let roles = vec!["wizard".to_string()];
        assert!(!has_permission(&roles, Permission::ReadMail));
    }

    #[test]
    fn test_empty_role_set() {
        assert!(!has_permission(&[], Permission::ReadMail));
    }

    #[test]
    fn test_role_serde_names() {
        let json = serde_json::to_string(&Role::Emperor).unwrap();
        assert_eq!(json, "\"emperor\"");
        let role: Role = serde_json::from_str("\"knight\"").unwrap();
        assert_eq!(role, Role::Knight);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions = [
            Role::Emperor.description(),
            Role::Knight.description(),
            Role::Civilian.description(),
        ];
        assert_ne!(descriptions[0], descriptions[1]);
        assert_ne!(descriptions[1], descriptions[2]);
    }
}
