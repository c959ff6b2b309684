use innkeep_models::access::RoleDefinition;

/// One line per role: the role name padded to a column, then its
/// permissions separated by commas.
pub fn format_roles(roles: &[RoleDefinition]) -> String {
    let width = roles.iter().map(|r| r.role.len()).max().unwrap_or(0);

    roles
        .iter()
        .map(|r| format!("{:<width$}  {}", r.role, r.permissions.join(", "), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One permission per line, or a placeholder when the list is empty.
pub fn format_permissions(permissions: &[String]) -> String {
    if permissions.is_empty() {
        return "(no permissions)".to_string();
    }
    permissions.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_roles_aligns_names() {
        let roles = vec![
            RoleDefinition {
                role: "ADMIN".to_string(),
                permissions: vec!["a".to_string(), "b".to_string()],
            },
            RoleDefinition {
                role: "WAITER".to_string(),
                permissions: vec!["pos.use".to_string()],
            },
        ];

        assert_eq!(format_roles(&roles), "ADMIN   a, b\nWAITER  pos.use");
    }

    #[test]
    fn test_format_permissions() {
        assert_eq!(format_permissions(&[]), "(no permissions)");
        assert_eq!(
            format_permissions(&["bookings.read".to_string(), "pos.use".to_string()]),
            "bookings.read\npos.use"
        );
    }
}
