use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_effective_permissions, get_overrides, get_roles, update_overrides};

pub fn init_access_router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(get_roles))
        .route(
            "/users/{user_id}/overrides",
            get(get_overrides).put(update_overrides),
        )
        .route("/users/{user_id}/permissions", get(get_effective_permissions))
}
