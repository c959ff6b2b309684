//! Override persistence.
//!
//! Overrides are stored as JSON text in `metadata.value`, one row per
//! (tenant, user), attached to the tenant's `acl` version row. The store
//! deals in raw text so the service decides how to treat values it cannot
//! decode.

use std::future::Future;

use innkeep_models::{
    ids::{TenantId, UserId},
    metadata::VersionRecord,
};
use sqlx::PgPool;
use tracing::instrument;

use crate::{
    error::AclError,
    keys::{ACL_METADATA_TYPE, ACL_VERSION_LABEL, override_key},
};

pub trait OverrideStore: Send + Sync {
    /// Raw stored value for the pair, `None` when nothing was ever written.
    ///
    /// Must not create any rows.
    fn load(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<String>, AclError>> + Send;

    /// Replaces the stored value for the pair.
    fn save(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        value: String,
    ) -> impl Future<Output = Result<(), AclError>> + Send;
}

#[derive(Debug, Clone)]
pub struct PgOverrideStore {
    pool: PgPool,
}

impl PgOverrideStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The tenant's `acl` version row, if one has been created.
    #[instrument(skip(self))]
    pub async fn find_version(&self, tenant_id: TenantId) -> Result<Option<VersionRecord>, AclError> {
        let version = sqlx::query_as::<_, VersionRecord>(
            r#"
            SELECT id, tenant_id, version_label, created_at
            FROM versions
            WHERE tenant_id = $1 AND version_label = $2
            "#,
        )
        .bind(tenant_id)
        .bind(ACL_VERSION_LABEL)
        .fetch_optional(&self.pool)
        .await?;

        Ok(version)
    }
}

impl OverrideStore for PgOverrideStore {
    #[instrument(skip(self))]
    async fn load(&self, tenant_id: TenantId, user_id: UserId) -> Result<Option<String>, AclError> {
        let Some(version) = self.find_version(tenant_id).await? else {
            return Ok(None);
        };

        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM metadata WHERE key = $1 AND version_id = $2",
        )
        .bind(override_key(tenant_id, user_id))
        .bind(version.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    #[instrument(skip(self, value))]
    async fn save(&self, tenant_id: TenantId, user_id: UserId, value: String) -> Result<(), AclError> {
        let mut tx = self.pool.begin().await?;

        // Concurrent first writers for a tenant converge on the same row.
        let version = sqlx::query_as::<_, VersionRecord>(
            r#"
            INSERT INTO versions (tenant_id, version_label)
            VALUES ($1, $2)
            ON CONFLICT (tenant_id, version_label)
            DO UPDATE SET version_label = EXCLUDED.version_label
            RETURNING id, tenant_id, version_label, created_at
            "#,
        )
        .bind(tenant_id)
        .bind(ACL_VERSION_LABEL)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO metadata (key, version_id, type, value)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (key, version_id)
            DO UPDATE SET value = EXCLUDED.value, type = EXCLUDED.type, updated_at = NOW()
            "#,
        )
        .bind(override_key(tenant_id, user_id))
        .bind(version.id)
        .bind(ACL_METADATA_TYPE)
        .bind(value)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}
