//! Rows of the tenant-scoped `versions` and `metadata` tables.
//!
//! A version row groups one category of metadata for a tenant under a
//! durable id (for access control the label is `"acl"`). Metadata rows hang
//! off a version and hold JSON text in their `value` column.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{TenantId, VersionId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VersionRecord {
    pub id: VersionId,
    pub tenant_id: TenantId,
    pub version_label: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
