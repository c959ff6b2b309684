//! # Innkeep Models
//!
//! Domain models and DTOs for the Innkeep API.
//!
//! # Modules
//!
//! - [`access`]: Permission overrides and access-control request/response types
//! - [`ids`]: Strongly-typed id newtypes
//! - [`metadata`]: Rows of the tenant-scoped `versions` and `metadata` tables
//!
//! # Example
//!
//! ```ignore
//! use innkeep_models::access::PermissionOverride;
//! use innkeep_models::ids::{TenantId, UserId};
//!
//! let overrides = PermissionOverride::new(vec!["reports.view".into()], vec![]);
//! ```

pub mod access;
pub mod ids;
pub mod metadata;

// Re-export commonly used types at crate root for convenience
pub use access::{
    EffectivePermissionsResponse, PermissionOverride, RoleDefinition,
    RolesResponse, UpdateOverridesDto, UpdateOverridesResponse,
};

pub use ids::{IdParseError, TenantId, UserId, VersionId};

pub use metadata::VersionRecord;
