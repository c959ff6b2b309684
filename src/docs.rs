use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use innkeep_core::ErrorResponse;
use innkeep_models::{
    EffectivePermissionsResponse, PermissionOverride, RoleDefinition, RolesResponse,
    UpdateOverridesDto, UpdateOverridesResponse,
};

use crate::modules::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health,
        crate::modules::access::controller::get_overrides,
        crate::modules::access::controller::update_overrides,
        crate::modules::access::controller::get_effective_permissions,
        crate::modules::access::controller::get_roles,
    ),
    components(
        schemas(
            PermissionOverride,
            UpdateOverridesDto,
            UpdateOverridesResponse,
            EffectivePermissionsResponse,
            RoleDefinition,
            RolesResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&TenantHeaderAddon),
    tags(
        (name = "Access", description = "Per-user permission overrides and role catalog"),
        (name = "Health", description = "Liveness")
    ),
    info(
        title = "Innkeep API",
        version = "0.1.0",
        description = "Multi-tenant hospitality management API. Requests are scoped to the tenant in the X-Tenant-Id header.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct TenantHeaderAddon;

impl Modify for TenantHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "tenant_header",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Tenant-Id"))),
            )
        }
    }
}
