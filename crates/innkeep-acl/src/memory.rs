//! In-memory role sources and override stores.
//!
//! Available under `cfg(test)` and the `test-utils` feature. Clones share
//! state, so a test can keep a handle to a store after moving it into an
//! [`AccessControl`](crate::AccessControl).

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use innkeep_models::ids::{TenantId, UserId};

use crate::{error::AclError, role_source::RoleSource, store::OverrideStore};

type Pair = (TenantId, UserId);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRoles {
    roles: Arc<Mutex<HashMap<Pair, String>>>,
    unsupported: bool,
}

impl InMemoryRoles {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that behaves like a database without the backing table.
    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn with_role(self, tenant_id: TenantId, user_id: UserId, role: &str) -> Self {
        self.assign(tenant_id, user_id, role);
        self
    }

    pub fn assign(&self, tenant_id: TenantId, user_id: UserId, role: &str) {
        lock(&self.roles).insert((tenant_id, user_id), role.to_string());
    }
}

impl RoleSource for InMemoryRoles {
    async fn role_for(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<String>, AclError> {
        if self.unsupported {
            return Ok(None);
        }
        Ok(lock(&self.roles).get(&(tenant_id, user_id)).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryOverrides {
    values: Arc<Mutex<HashMap<Pair, String>>>,
    saves: Arc<Mutex<usize>>,
    fail_writes: bool,
}

impl InMemoryOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `save` fails as if the pool were closed.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Stores `value` verbatim, bypassing encoding.
    pub fn put_raw(&self, tenant_id: TenantId, user_id: UserId, value: &str) {
        lock(&self.values).insert((tenant_id, user_id), value.to_string());
    }

    pub fn raw(&self, tenant_id: TenantId, user_id: UserId) -> Option<String> {
        lock(&self.values).get(&(tenant_id, user_id)).cloned()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *lock(&self.saves)
    }
}

impl OverrideStore for InMemoryOverrides {
    async fn load(&self, tenant_id: TenantId, user_id: UserId) -> Result<Option<String>, AclError> {
        Ok(self.raw(tenant_id, user_id))
    }

    async fn save(&self, tenant_id: TenantId, user_id: UserId, value: String) -> Result<(), AclError> {
        if self.fail_writes {
            return Err(AclError::Database(sqlx::Error::PoolClosed));
        }
        lock(&self.values).insert((tenant_id, user_id), value);
        *lock(&self.saves) += 1;
        Ok(())
    }
}
