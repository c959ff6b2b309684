//! # Innkeep ACL
//!
//! Permission resolution for the Innkeep API.
//!
//! A user's effective permissions inside a tenant are computed on every
//! request:
//!
//! ```text
//! role (membership, then legacy user record)
//!     ↓ static role table
//! base permissions
//!     ↓ + override.add, then − override.remove
//! effective permissions (sorted, deduplicated)
//! ```
//!
//! Overrides live in the generic `metadata` table under the key
//! `acl:user:{tenant_id}:{user_id}`, grouped by the tenant's `acl` row in
//! `versions`.
//!
//! # Modules
//!
//! - [`error`]: Engine error type
//! - [`keys`]: Metadata key and label constants
//! - [`roles`]: Static role table
//! - [`role_source`]: Where a user's role comes from
//! - [`store`]: Where overrides are persisted
//! - [`service`]: The [`AccessControl`] resolver and writer
//!
//! # Example
//!
//! ```ignore
//! use innkeep_acl::PgAccessControl;
//!
//! let access = PgAccessControl::postgres(pool);
//! let permissions = access.resolve_permissions(tenant_id, user_id).await?;
//! ```

pub mod error;
pub mod keys;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod role_source;
pub mod roles;
pub mod service;
pub mod store;
mod telemetry;

pub use error::AclError;
pub use role_source::{
    FallbackRoleSource, LegacyUserRoleSource, MembershipRoleSource, RoleSource, TenantRoleSource,
};
pub use roles::{Role, base_permissions, role_definitions};
pub use service::{AccessControl, PgAccessControl};
pub use store::{OverrideStore, PgOverrideStore};
