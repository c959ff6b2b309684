//! Static role table.
//!
//! Roles are coarse permission bundles. They are stored as free text on
//! memberships and legacy user records, so lookups normalize the name to
//! uppercase and treat anything unrecognised as a role with no permissions.

use std::fmt;

use innkeep_core::permissions::{self as p};
use innkeep_models::access::RoleDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Manager,
    Receptionist,
    Cashier,
    Waiter,
    Housekeeping,
}

const MANAGER_PERMISSIONS: &[&str] = &[
    p::DASHBOARD_VIEW,
    p::BOOKINGS_READ,
    p::BOOKINGS_MANAGE,
    p::CUSTOMERS_READ,
    p::CUSTOMERS_MANAGE,
    p::INVOICES_READ,
    p::INVOICES_MANAGE,
    p::REPORTS_VIEW,
    p::POS_USE,
    p::POS_MANAGE,
    p::ADDONS_READ,
    p::ADDONS_MANAGE,
    p::HOUSEKEEPING_READ,
    p::HOUSEKEEPING_MANAGE,
    p::STAFF_READ,
];

const RECEPTIONIST_PERMISSIONS: &[&str] = &[
    p::BOOKINGS_READ,
    p::BOOKINGS_MANAGE,
    p::CUSTOMERS_READ,
    p::INVOICES_READ,
];

const CASHIER_PERMISSIONS: &[&str] = &[
    p::POS_USE,
    p::INVOICES_READ,
    p::INVOICES_MANAGE,
    p::CUSTOMERS_READ,
];

const WAITER_PERMISSIONS: &[&str] = &[p::POS_USE, p::ADDONS_READ];

const HOUSEKEEPING_PERMISSIONS: &[&str] = &[
    p::HOUSEKEEPING_READ,
    p::HOUSEKEEPING_MANAGE,
    p::BOOKINGS_READ,
];

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Manager,
        Role::Receptionist,
        Role::Cashier,
        Role::Waiter,
        Role::Housekeeping,
    ];

    /// Canonical (uppercase) name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Receptionist => "RECEPTIONIST",
            Role::Cashier => "CASHIER",
            Role::Waiter => "WAITER",
            Role::Housekeeping => "HOUSEKEEPING",
        }
    }

    /// Parses a stored role name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Role> {
        match name.trim().to_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "MANAGER" => Some(Role::Manager),
            "RECEPTIONIST" => Some(Role::Receptionist),
            "CASHIER" => Some(Role::Cashier),
            "WAITER" => Some(Role::Waiter),
            "HOUSEKEEPING" => Some(Role::Housekeeping),
            _ => None,
        }
    }

    /// Base permissions granted by the role, unsorted.
    pub fn permissions(&self) -> &'static [&'static str] {
        match self {
            Role::Admin => p::ALL,
            Role::Manager => MANAGER_PERMISSIONS,
            Role::Receptionist => RECEPTIONIST_PERMISSIONS,
            Role::Cashier => CASHIER_PERMISSIONS,
            Role::Waiter => WAITER_PERMISSIONS,
            Role::Housekeeping => HOUSEKEEPING_PERMISSIONS,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base permissions for a stored role name. Unknown roles grant nothing.
pub fn base_permissions(role_name: &str) -> &'static [&'static str] {
    Role::from_name(role_name)
        .map(|role| role.permissions())
        .unwrap_or(&[])
}

/// The full role table with each permission list sorted.
pub fn role_definitions() -> Vec<RoleDefinition> {
    Role::ALL
        .iter()
        .map(|role| {
            let mut permissions: Vec<String> =
                role.permissions().iter().map(|s| s.to_string()).collect();
            permissions.sort();
            RoleDefinition {
                role: role.as_str().to_string(),
                permissions,
            }
        })
        .collect()
}
