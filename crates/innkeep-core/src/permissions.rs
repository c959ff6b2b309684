//! Permission key catalog for the Innkeep API.
//!
//! Every fine-grained capability is identified by a dotted string key. Role
//! bundles and per-user overrides are expressed in terms of these keys.
//! Overrides are not checked against this catalog, so a key that is not
//! listed here can still be granted or revoked.
//!
//! # Example
//!
//! ```ignore
//! use innkeep_core::permissions;
//!
//! if effective.iter().any(|p| p == permissions::BOOKINGS_MANAGE) {
//!     // Edit the booking
//! }
//! ```

// =============================================================================
// Dashboard permissions
// =============================================================================

/// Permission to view the tenant dashboard
pub const DASHBOARD_VIEW: &str = "dashboard.view";

// =============================================================================
// Bookings permissions
// =============================================================================

/// Permission to read bookings
pub const BOOKINGS_READ: &str = "bookings.read";
/// Permission to create, change and cancel bookings
pub const BOOKINGS_MANAGE: &str = "bookings.manage";

// =============================================================================
// Customers permissions
// =============================================================================

/// Permission to read customers
pub const CUSTOMERS_READ: &str = "customers.read";
/// Permission to create and edit customers
pub const CUSTOMERS_MANAGE: &str = "customers.manage";

// =============================================================================
// Invoices permissions
// =============================================================================

/// Permission to read invoices
pub const INVOICES_READ: &str = "invoices.read";
/// Permission to issue and void invoices
pub const INVOICES_MANAGE: &str = "invoices.manage";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports.view";

// =============================================================================
// Point of sale permissions
// =============================================================================

/// Permission to ring up sales at the point of sale
pub const POS_USE: &str = "pos.use";
/// Permission to configure the point of sale
pub const POS_MANAGE: &str = "pos.manage";

// =============================================================================
// Add-ons permissions
// =============================================================================

/// Permission to read POS add-ons
pub const ADDONS_READ: &str = "addons.read";
/// Permission to manage POS add-ons
pub const ADDONS_MANAGE: &str = "addons.manage";

// =============================================================================
// Housekeeping permissions
// =============================================================================

/// Permission to read housekeeping tasks
pub const HOUSEKEEPING_READ: &str = "housekeeping.read";
/// Permission to assign and close housekeeping tasks
pub const HOUSEKEEPING_MANAGE: &str = "housekeeping.manage";

// =============================================================================
// Staff permissions
// =============================================================================

/// Permission to read staff records
pub const STAFF_READ: &str = "staff.read";
/// Permission to manage staff records
pub const STAFF_MANAGE: &str = "staff.manage";

// =============================================================================
// Licensing and settings permissions
// =============================================================================

/// Permission to manage the tenant licence
pub const LICENSING_MANAGE: &str = "licensing.manage";
/// Permission to change tenant settings
pub const SETTINGS_MANAGE: &str = "settings.manage";
/// Permission to edit per-user access overrides
pub const SETTINGS_ACCESS_MANAGE: &str = "settings.access.manage";

/// Every permission key known to the application, in catalog order.
pub const ALL: &[&str] = &[
    DASHBOARD_VIEW,
    BOOKINGS_READ,
    BOOKINGS_MANAGE,
    CUSTOMERS_READ,
    CUSTOMERS_MANAGE,
    INVOICES_READ,
    INVOICES_MANAGE,
    REPORTS_VIEW,
    POS_USE,
    POS_MANAGE,
    ADDONS_READ,
    ADDONS_MANAGE,
    HOUSEKEEPING_READ,
    HOUSEKEEPING_MANAGE,
    STAFF_READ,
    STAFF_MANAGE,
    LICENSING_MANAGE,
    SETTINGS_MANAGE,
    SETTINGS_ACCESS_MANAGE,
];

/// Returns true when `key` is part of the catalog.
pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
