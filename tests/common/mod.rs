#![allow(dead_code)]

use innkeep_models::{TenantId, UserId};
use sqlx::PgPool;

pub async fn create_test_tenant(pool: &PgPool, name: &str) -> TenantId {
    sqlx::query_scalar::<_, TenantId>("INSERT INTO tenants (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Creates a user on the legacy schema: `role` embedded on the user record.
pub async fn create_legacy_user(
    pool: &PgPool,
    tenant_id: TenantId,
    email: &str,
    role: Option<&str>,
) -> UserId {
    sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (tenant_id, email, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(tenant_id)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn add_membership(pool: &PgPool, tenant_id: TenantId, user_id: UserId, role: &str) {
    sqlx::query("INSERT INTO tenant_memberships (user_id, tenant_id, role) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(tenant_id)
        .bind(role)
        .execute(pool)
        .await
        .unwrap();
}

pub fn generate_unique_email() -> String {
    format!("test-{}@example.com", uuid::Uuid::new_v4())
}

pub fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
