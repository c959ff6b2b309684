use innkeep_acl::PgAccessControl;
use innkeep_config::{CorsConfig, DatabaseConfig};
use innkeep_db::init_db_pool;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub access: PgAccessControl,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, cors_config: CorsConfig) -> Self {
        Self {
            access: PgAccessControl::postgres(db.clone()),
            db,
            cors_config,
        }
    }
}

pub async fn init_app_state(database: &DatabaseConfig) -> AppState {
    AppState::new(init_db_pool(database).await, CorsConfig::from_env())
}
