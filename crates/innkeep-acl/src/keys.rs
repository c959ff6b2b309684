//! Naming of access-control metadata.

use innkeep_models::ids::{TenantId, UserId};

/// Label of the tenant-scoped version row grouping access-control metadata.
pub const ACL_VERSION_LABEL: &str = "acl";

/// Value of `metadata.type` for override rows.
pub const ACL_METADATA_TYPE: &str = "acl";

/// Metadata key holding the override of `user_id` within `tenant_id`.
pub fn override_key(tenant_id: TenantId, user_id: UserId) -> String {
    format!("acl:user:{}:{}", tenant_id, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_key() {
        let key = override_key(TenantId::new(5).unwrap(), UserId::new(42).unwrap());
        assert_eq!(key, "acl:user:5:42");
    }
}
