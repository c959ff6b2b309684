//! Access-control models and DTOs.
//!
//! A [`PermissionOverride`] is the per-user, per-tenant delta applied on top
//! of a role's base permission set. It is persisted as JSON text and decoded
//! leniently: missing or malformed lists read as empty.

use std::collections::BTreeSet;

use innkeep_core::serde::deserialize_lenient_string_list;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{TenantId, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionOverride {
    /// Permission keys granted on top of the role.
    #[serde(default, deserialize_with = "deserialize_lenient_string_list")]
    pub add: Vec<String>,
    /// Permission keys revoked from the role. Wins over `add`.
    #[serde(default, deserialize_with = "deserialize_lenient_string_list")]
    pub remove: Vec<String>,
}

impl PermissionOverride {
    /// Builds an override with both lists deduplicated and sorted.
    pub fn new(add: Vec<String>, remove: Vec<String>) -> Self {
        Self {
            add: sorted_unique(add),
            remove: sorted_unique(remove),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }

    /// Returns a copy with both lists deduplicated and sorted.
    pub fn normalized(self) -> Self {
        Self::new(self.add, self.remove)
    }

    /// Applies the override to `base`: adds first, then removes.
    ///
    /// The result is deduplicated and sorted.
    pub fn apply<I, S>(&self, base: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut effective: BTreeSet<String> = base.into_iter().map(Into::into).collect();

        for key in &self.add {
            effective.insert(key.clone());
        }
        for key in &self.remove {
            effective.remove(key);
        }

        effective.into_iter().collect()
    }
}

fn sorted_unique(keys: Vec<String>) -> Vec<String> {
    keys.into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// DTOs

/// Body of `PUT /settings/access/users/{userId}/overrides`.
///
/// Both fields are optional; `null` or non-array values are read as empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOverridesDto {
    #[serde(default, deserialize_with = "deserialize_lenient_string_list")]
    #[validate(length(max = 256, message = "add must not contain more than 256 keys"))]
    pub add: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string_list")]
    #[validate(length(max = 256, message = "remove must not contain more than 256 keys"))]
    pub remove: Vec<String>,
}

impl From<UpdateOverridesDto> for PermissionOverride {
    fn from(dto: UpdateOverridesDto) -> Self {
        PermissionOverride::new(dto.add, dto.remove)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOverridesResponse {
    pub ok: bool,
    /// Effective permissions after the write, sorted.
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EffectivePermissionsResponse {
    pub tenant_id: TenantId,
    pub user_id: UserId,
    /// Role as stored for the user, `None` when the user has no role in the tenant.
    pub role: Option<String>,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleDefinition {
    pub role: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RolesResponse {
    pub data: Vec<RoleDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_normalizes() {
        let o = PermissionOverride::new(keys(&["b", "a", "b"]), keys(&["z", "z"]));
        assert_eq!(o.add, keys(&["a", "b"]));
        assert_eq!(o.remove, keys(&["z"]));
    }

    #[test]
    fn test_apply_adds_then_removes() {
        let o = PermissionOverride::new(keys(&["reports.view"]), keys(&["invoices.read"]));
        let result = o.apply(["bookings.read", "invoices.read"]);
        assert_eq!(result, keys(&["bookings.read", "reports.view"]));
    }

    #[test]
    fn test_remove_wins_over_add() {
        let o = PermissionOverride::new(keys(&["x", "y"]), keys(&["x"]));
        assert_eq!(o.apply(Vec::<String>::new()), keys(&["y"]));
    }

    #[test]
    fn test_apply_empty_override_sorts_and_dedupes_base() {
        let o = PermissionOverride::default();
        assert_eq!(o.apply(["b", "a", "b"]), keys(&["a", "b"]));
    }

    #[test]
    fn test_deserialize_lenient() {
        let o: PermissionOverride = serde_json::from_str(r#"{"add": "nope"}"#).unwrap();
        assert!(o.is_empty());

        let o: PermissionOverride =
            serde_json::from_str(r#"{"add": ["a", 3], "remove": null, "extra": 1}"#).unwrap();
        assert_eq!(o.add, keys(&["a"]));
        assert!(o.remove.is_empty());
    }

    #[test]
    fn test_update_dto_validation() {
        let dto = UpdateOverridesDto {
            add: keys(&["reports.view"]),
            remove: vec![],
        };
        assert!(dto.validate().is_ok());

        let too_many = UpdateOverridesDto {
            add: (0..300).map(|i| format!("k{}", i)).collect(),
            remove: vec![],
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_update_dto_defaults() {
        let dto: UpdateOverridesDto = serde_json::from_str("{}").unwrap();
        assert!(dto.add.is_empty());
        assert!(dto.remove.is_empty());
    }
}
