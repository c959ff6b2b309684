use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use innkeep_acl::role_definitions;
use innkeep_core::{AppError, ErrorResponse};
use innkeep_models::{
    EffectivePermissionsResponse, PermissionOverride, RolesResponse, UpdateOverridesDto,
    UpdateOverridesResponse, UserId,
};

use crate::middleware::tenant::TenantContext;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<UserId>()
        .map_err(|e| AppError::bad_request(anyhow!("Invalid userId: {}", e)))
}

#[utoipa::path(
    get,
    path = "/api/settings/access/users/{user_id}/overrides",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("X-Tenant-Id" = i64, Header, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "Stored permission override", body = PermissionOverride),
        (status = 400, description = "Invalid user or tenant id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Access"
)]
pub async fn get_overrides(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(user_id): Path<String>,
) -> Result<Json<PermissionOverride>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let overrides = state
        .access
        .get_overrides(tenant.tenant_id(), user_id)
        .await?;
    Ok(Json(overrides))
}

#[utoipa::path(
    put,
    path = "/api/settings/access/users/{user_id}/overrides",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("X-Tenant-Id" = i64, Header, description = "Tenant ID")
    ),
    request_body = UpdateOverridesDto,
    responses(
        (status = 200, description = "Override replaced; effective permissions after the write", body = UpdateOverridesResponse),
        (status = 400, description = "Invalid user id, tenant id or body", body = ErrorResponse),
        (status = 422, description = "Too many keys", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Access"
)]
pub async fn update_overrides(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(user_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateOverridesDto>,
) -> Result<Json<UpdateOverridesResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let permissions = state
        .access
        .set_overrides(tenant.tenant_id(), user_id, dto.into())
        .await?;

    Ok(Json(UpdateOverridesResponse {
        ok: true,
        permissions,
    }))
}

#[utoipa::path(
    get,
    path = "/api/settings/access/users/{user_id}/permissions",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("X-Tenant-Id" = i64, Header, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "Effective permissions of the user", body = EffectivePermissionsResponse),
        (status = 400, description = "Invalid user or tenant id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Access"
)]
pub async fn get_effective_permissions(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(user_id): Path<String>,
) -> Result<Json<EffectivePermissionsResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let tenant_id = tenant.tenant_id();
    let (role, permissions) = state
        .access
        .effective_permissions(tenant_id, user_id)
        .await?;

    Ok(Json(EffectivePermissionsResponse {
        tenant_id,
        user_id,
        role,
        permissions,
    }))
}

#[utoipa::path(
    get,
    path = "/api/settings/access/roles",
    responses(
        (status = 200, description = "Static role table", body = RolesResponse)
    ),
    tag = "Access"
)]
pub async fn get_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        data: role_definitions(),
    })
}
