use innkeep_acl::memory::{InMemoryOverrides, InMemoryRoles};
use innkeep_acl::{AccessControl, AclError, FallbackRoleSource, Role, base_permissions};
use innkeep_models::{PermissionOverride, TenantId, UserId};

fn tenant(id: i64) -> TenantId {
    TenantId::new(id).unwrap()
}

fn user(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sorted_base(role: &str) -> Vec<String> {
    let mut base: Vec<String> = base_permissions(role).iter().map(|s| s.to_string()).collect();
    base.sort();
    base.dedup();
    base
}

#[tokio::test]
async fn test_each_role_resolves_to_its_base_set() {
    for (i, role) in Role::ALL.iter().enumerate() {
        let (t, u) = (tenant(1), user(i as i64 + 1));
        let access = AccessControl::new(
            InMemoryRoles::new().with_role(t, u, role.as_str()),
            InMemoryOverrides::new(),
        );

        let permissions = access.resolve_permissions(t, u).await.unwrap();
        assert_eq!(permissions, sorted_base(role.as_str()), "role {}", role);
    }
}

#[tokio::test]
async fn test_receptionist_example() {
    let (t, u) = (tenant(5), user(42));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "RECEPTIONIST"),
        InMemoryOverrides::new(),
    );

    access
        .set_overrides(
            t,
            u,
            PermissionOverride::new(keys(&["reports.view"]), keys(&["invoices.read"])),
        )
        .await
        .unwrap();

    assert_eq!(
        access.resolve_permissions(t, u).await.unwrap(),
        keys(&["bookings.manage", "bookings.read", "customers.read", "reports.view"])
    );
}

#[tokio::test]
async fn test_remove_wins_over_add() {
    let (t, u) = (tenant(1), user(1));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "WAITER"),
        InMemoryOverrides::new(),
    );

    let permissions = access
        .set_overrides(
            t,
            u,
            PermissionOverride::new(keys(&["reports.view", "pos.use"]), keys(&["reports.view"])),
        )
        .await
        .unwrap();

    assert!(!permissions.contains(&"reports.view".to_string()));
    assert!(permissions.contains(&"pos.use".to_string()));
}

#[tokio::test]
async fn test_empty_override_equals_base() {
    let (t, u) = (tenant(1), user(1));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "MANAGER"),
        InMemoryOverrides::new(),
    );

    let permissions = access
        .set_overrides(t, u, PermissionOverride::default())
        .await
        .unwrap();

    assert_eq!(permissions, sorted_base("MANAGER"));
}

#[tokio::test]
async fn test_write_is_idempotent() {
    let (t, u) = (tenant(3), user(7));
    let overrides = InMemoryOverrides::new();
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "CASHIER"),
        overrides.clone(),
    );
    let update = PermissionOverride::new(keys(&["reports.view"]), keys(&["pos.use"]));

    let first = access.set_overrides(t, u, update.clone()).await.unwrap();
    let stored_after_first = overrides.raw(t, u);
    let second = access.set_overrides(t, u, update).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(stored_after_first, overrides.raw(t, u));
    assert_eq!(overrides.save_count(), 2);
}

#[tokio::test]
async fn test_written_override_reads_back() {
    let (t, u) = (tenant(1), user(2));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "ADMIN"),
        InMemoryOverrides::new(),
    );

    access
        .set_overrides(t, u, PermissionOverride::new(keys(&["a"]), keys(&["b"])))
        .await
        .unwrap();

    let stored = access.get_overrides(t, u).await.unwrap();
    assert_eq!(stored.add, keys(&["a"]));
    assert_eq!(stored.remove, keys(&["b"]));
}

#[tokio::test]
async fn test_write_replaces_previous_override() {
    let (t, u) = (tenant(1), user(2));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "WAITER"),
        InMemoryOverrides::new(),
    );

    access
        .set_overrides(t, u, PermissionOverride::new(keys(&["reports.view"]), vec![]))
        .await
        .unwrap();
    let permissions = access
        .set_overrides(t, u, PermissionOverride::new(vec![], keys(&["addons.read"])))
        .await
        .unwrap();

    assert_eq!(permissions, keys(&["pos.use"]));
}

#[tokio::test]
async fn test_unknown_role_resolves_to_add_minus_remove() {
    let (t, u) = (tenant(1), user(1));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "SOMMELIER"),
        InMemoryOverrides::new(),
    );

    let permissions = access
        .set_overrides(
            t,
            u,
            PermissionOverride::new(keys(&["wine.pour", "pos.use"]), keys(&["pos.use"])),
        )
        .await
        .unwrap();

    assert_eq!(permissions, keys(&["wine.pour"]));
}

#[tokio::test]
async fn test_role_name_is_case_insensitive() {
    let (t, u) = (tenant(1), user(1));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "housekeeping"),
        InMemoryOverrides::new(),
    );

    assert_eq!(
        access.resolve_permissions(t, u).await.unwrap(),
        keys(&["bookings.read", "housekeeping.manage", "housekeeping.read"])
    );
}

#[tokio::test]
async fn test_malformed_stored_value_falls_back_to_base() {
    let (t, u) = (tenant(1), user(1));
    let overrides = InMemoryOverrides::new();
    overrides.put_raw(t, u, "not-json");
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "RECEPTIONIST"),
        overrides,
    );

    assert_eq!(
        access.resolve_permissions(t, u).await.unwrap(),
        sorted_base("RECEPTIONIST")
    );
}

#[tokio::test]
async fn test_non_object_stored_value_falls_back_to_base() {
    let (t, u) = (tenant(1), user(1));
    let overrides = InMemoryOverrides::new();
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "WAITER"),
        overrides.clone(),
    );

    for raw in [r#"[["reports.view"],["pos.use"]]"#, r#"["reports.view"]"#, "true", "7"] {
        overrides.put_raw(t, u, raw);
        assert_eq!(
            access.resolve_permissions(t, u).await.unwrap(),
            keys(&["addons.read", "pos.use"]),
            "stored value {raw}"
        );
        assert!(access.get_overrides(t, u).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_partially_valid_stored_value_is_read_leniently() {
    let (t, u) = (tenant(1), user(1));
    let overrides = InMemoryOverrides::new();
    overrides.put_raw(t, u, r#"{"add": ["reports.view", 42], "remove": "invoices.read"}"#);
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "RECEPTIONIST"),
        overrides,
    );

    let stored = access.get_overrides(t, u).await.unwrap();
    assert_eq!(stored.add, keys(&["reports.view"]));
    assert!(stored.remove.is_empty());

    assert!(
        access
            .has_permission(t, u, "invoices.read")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_no_role_yields_nothing_even_with_override() {
    let (t, u) = (tenant(1), user(1));
    let overrides = InMemoryOverrides::new();
    overrides.put_raw(t, u, r#"{"add": ["reports.view"], "remove": []}"#);
    let access = AccessControl::new(InMemoryRoles::new(), overrides);

    assert!(access.resolve_permissions(t, u).await.unwrap().is_empty());
    assert_eq!(access.role_of(t, u).await.unwrap(), None);
}

#[tokio::test]
async fn test_overrides_are_scoped_per_tenant() {
    let u = user(1);
    let roles = InMemoryRoles::new()
        .with_role(tenant(1), u, "WAITER")
        .with_role(tenant(2), u, "WAITER");
    let access = AccessControl::new(roles, InMemoryOverrides::new());

    access
        .set_overrides(tenant(1), u, PermissionOverride::new(keys(&["reports.view"]), vec![]))
        .await
        .unwrap();

    assert!(access.has_permission(tenant(1), u, "reports.view").await.unwrap());
    assert!(!access.has_permission(tenant(2), u, "reports.view").await.unwrap());
}

#[tokio::test]
async fn test_remove_survives_role_change() {
    let (t, u) = (tenant(1), user(1));
    let roles = InMemoryRoles::new().with_role(t, u, "CASHIER");
    let access = AccessControl::new(roles.clone(), InMemoryOverrides::new());

    access
        .set_overrides(t, u, PermissionOverride::new(vec![], keys(&["customers.read"])))
        .await
        .unwrap();
    roles.assign(t, u, "MANAGER");

    assert!(!access.has_permission(t, u, "customers.read").await.unwrap());
    assert!(access.has_permission(t, u, "staff.read").await.unwrap());
}

#[tokio::test]
async fn test_membership_role_takes_precedence() {
    let (t, u) = (tenant(1), user(1));
    let source = FallbackRoleSource::new(
        InMemoryRoles::new().with_role(t, u, "WAITER"),
        InMemoryRoles::new().with_role(t, u, "ADMIN"),
    );
    let access = AccessControl::new(source, InMemoryOverrides::new());

    assert_eq!(access.role_of(t, u).await.unwrap().as_deref(), Some("WAITER"));
}

#[tokio::test]
async fn test_falls_back_to_legacy_role() {
    let (t, u) = (tenant(1), user(1));
    let source = FallbackRoleSource::new(
        InMemoryRoles::new(),
        InMemoryRoles::new().with_role(t, u, "CASHIER"),
    );
    let access = AccessControl::new(source, InMemoryOverrides::new());

    assert_eq!(
        access.resolve_permissions(t, u).await.unwrap(),
        sorted_base("CASHIER")
    );
}

#[tokio::test]
async fn test_unsupported_membership_source_falls_through() {
    let (t, u) = (tenant(1), user(1));
    let source = FallbackRoleSource::new(
        InMemoryRoles::unsupported(),
        InMemoryRoles::new().with_role(t, u, "WAITER"),
    );
    let access = AccessControl::new(source, InMemoryOverrides::new());

    assert_eq!(
        access.resolve_permissions(t, u).await.unwrap(),
        keys(&["addons.read", "pos.use"])
    );
}

#[tokio::test]
async fn test_write_failure_is_returned() {
    let (t, u) = (tenant(1), user(1));
    let access = AccessControl::new(
        InMemoryRoles::new().with_role(t, u, "ADMIN"),
        InMemoryOverrides::failing_writes(),
    );

    let err = access
        .set_overrides(t, u, PermissionOverride::new(keys(&["x"]), vec![]))
        .await
        .unwrap_err();

    assert!(matches!(err, AclError::Database(_)));
}
