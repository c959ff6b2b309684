use innkeep_models::{
    access::PermissionOverride,
    ids::{TenantId, UserId},
};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use crate::{
    error::AclError,
    role_source::{RoleSource, TenantRoleSource},
    roles::base_permissions,
    store::{OverrideStore, PgOverrideStore},
    telemetry,
};

/// Resolves and edits a user's permissions within a tenant.
///
/// Every call takes the tenant explicitly; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct AccessControl<R, S> {
    roles: R,
    overrides: S,
}

/// The production engine: roles and overrides read from Postgres.
pub type PgAccessControl = AccessControl<TenantRoleSource, PgOverrideStore>;

impl PgAccessControl {
    pub fn postgres(pool: PgPool) -> Self {
        AccessControl::new(
            TenantRoleSource::postgres(pool.clone()),
            PgOverrideStore::new(pool),
        )
    }
}

impl<R, S> AccessControl<R, S>
where
    R: RoleSource,
    S: OverrideStore,
{
    pub fn new(roles: R, overrides: S) -> Self {
        Self { roles, overrides }
    }

    /// The role stored for the user, as written in the database.
    #[instrument(skip(self))]
    pub async fn role_of(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<String>, AclError> {
        self.roles.role_for(tenant_id, user_id).await
    }

    /// Effective permissions: the role's base set, plus `add`, minus `remove`.
    ///
    /// A user with no role in the tenant has no permissions, whatever their
    /// override says.
    #[instrument(skip(self))]
    pub async fn resolve_permissions(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Vec<String>, AclError> {
        let (_, permissions) = self.effective_permissions(tenant_id, user_id).await?;
        Ok(permissions)
    }

    /// Like [`resolve_permissions`](Self::resolve_permissions), also returning
    /// the role the result was computed from.
    #[instrument(skip(self))]
    pub async fn effective_permissions(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<(Option<String>, Vec<String>), AclError> {
        let Some(role) = self.roles.role_for(tenant_id, user_id).await? else {
            debug!("No role found, denying all permissions");
            telemetry::track_resolution(false);
            return Ok((None, Vec::new()));
        };

        let overrides = self.load_overrides(tenant_id, user_id).await?;
        let permissions = overrides.apply(base_permissions(&role).iter().copied());

        telemetry::track_resolution(true);
        Ok((Some(role), permissions))
    }

    /// The stored override, normalized. Empty when none is stored or the
    /// stored value cannot be decoded.
    #[instrument(skip(self))]
    pub async fn get_overrides(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<PermissionOverride, AclError> {
        self.load_overrides(tenant_id, user_id).await
    }

    /// Replaces the user's override in full and returns the recomputed
    /// effective permissions.
    #[instrument(skip(self, update), fields(add = update.add.len(), remove = update.remove.len()))]
    pub async fn set_overrides(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        update: PermissionOverride,
    ) -> Result<Vec<String>, AclError> {
        let value = serde_json::to_string(&update.normalized())?;

        if let Err(err) = self.overrides.save(tenant_id, user_id, value).await {
            telemetry::track_override_write(false);
            return Err(err);
        }
        telemetry::track_override_write(true);

        self.resolve_permissions(tenant_id, user_id).await
    }

    #[instrument(skip(self))]
    pub async fn has_permission(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        permission: &str,
    ) -> Result<bool, AclError> {
        let permissions = self.resolve_permissions(tenant_id, user_id).await?;
        Ok(permissions.binary_search_by(|p| p.as_str().cmp(permission)).is_ok())
    }

    async fn load_overrides(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<PermissionOverride, AclError> {
        let Some(raw) = self.overrides.load(tenant_id, user_id).await? else {
            return Ok(PermissionOverride::default());
        };

        match decode_override(&raw) {
            Ok(overrides) => Ok(overrides.normalized()),
            Err(reason) => {
                warn!(
                    tenant_id = %tenant_id,
                    user_id = %user_id,
                    error = %reason,
                    "Stored permission override is malformed, ignoring it"
                );
                telemetry::track_override_decode_failure();
                Ok(PermissionOverride::default())
            }
        }
    }
}

/// Decodes a stored override. Only a JSON object is an override; arrays,
/// scalars and invalid JSON are rejected.
fn decode_override(raw: &str) -> Result<PermissionOverride, String> {
    match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(|e| e.to_string()),
        other => Err(format!("expected a JSON object, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
