//! Role lookup.
//!
//! Deployments carry one of two schemas: the multi-tenant
//! `tenant_memberships` join table, or the legacy single-tenant layout where
//! `users.role` holds the role and `users.tenant_id` the tenant. The default
//! [`TenantRoleSource`] asks the membership table first and falls back to
//! the legacy user record.

use std::future::Future;

use innkeep_models::ids::{TenantId, UserId};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::AclError;

/// Postgres error code for a relation that does not exist.
const UNDEFINED_TABLE: &str = "42P01";

/// A place a user's role within a tenant can be read from.
///
/// Returns the stored role name as-is; `None` means this source knows no
/// role for the pair.
pub trait RoleSource: Send + Sync {
    fn role_for(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<String>, AclError>> + Send;
}

/// Reads the role from `tenant_memberships`.
///
/// A database without that table is treated as having no membership.
#[derive(Debug, Clone)]
pub struct MembershipRoleSource {
    pool: PgPool,
}

impl MembershipRoleSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RoleSource for MembershipRoleSource {
    #[instrument(skip(self))]
    async fn role_for(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<String>, AclError> {
        let result = sqlx::query_scalar::<_, String>(
            "SELECT role FROM tenant_memberships WHERE user_id = $1 AND tenant_id = $2",
        )
        .bind(user_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(role) => Ok(non_blank(role)),
            Err(err) if is_undefined_table(&err) => {
                debug!("tenant_memberships not available, skipping membership lookup");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads the role embedded on the legacy `users` record.
#[derive(Debug, Clone)]
pub struct LegacyUserRoleSource {
    pool: PgPool,
}

impl LegacyUserRoleSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RoleSource for LegacyUserRoleSource {
    #[instrument(skip(self))]
    async fn role_for(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<String>, AclError> {
        let role = sqlx::query_scalar::<_, Option<String>>(
            "SELECT role FROM users WHERE id = $1 AND tenant_id = $2",
        )
        .bind(user_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(non_blank(role.flatten()))
    }
}

/// Tries `primary`, then `secondary`. The first role found wins.
#[derive(Debug, Clone)]
pub struct FallbackRoleSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackRoleSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P, S> RoleSource for FallbackRoleSource<P, S>
where
    P: RoleSource,
    S: RoleSource,
{
    async fn role_for(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<String>, AclError> {
        if let Some(role) = self.primary.role_for(tenant_id, user_id).await? {
            return Ok(Some(role));
        }

        self.secondary.role_for(tenant_id, user_id).await
    }
}

/// Membership table first, legacy user record second.
pub type TenantRoleSource = FallbackRoleSource<MembershipRoleSource, LegacyUserRoleSource>;

impl TenantRoleSource {
    pub fn postgres(pool: PgPool) -> Self {
        FallbackRoleSource::new(
            MembershipRoleSource::new(pool.clone()),
            LegacyUserRoleSource::new(pool),
        )
    }
}

/// Blank role strings count as no role.
fn non_blank(role: Option<String>) -> Option<String> {
    role.filter(|r| !r.trim().is_empty())
}

fn is_undefined_table(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNDEFINED_TABLE))
}
