//! Per-user access settings: permission overrides, effective permissions
//! and the role catalog, all scoped to the tenant in `X-Tenant-Id`.

pub mod controller;
pub mod router;
