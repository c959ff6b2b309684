//! Request extractors shared by feature modules.
//!
//! - [`tenant`]: the `X-Tenant-Id` tenant context

pub mod tenant;
