use crate::health::{self, HealthState};

use axum::{Router, routing::get};

/// Build the health router: one exact GET route, 404 for everything else.
///
/// HEAD is routed explicitly since axum otherwise answers it with the GET
/// handler.
pub fn build_router(state: HealthState) -> Router {
    let path = state.path().to_string();

    Router::new()
        .route(
            &path,
            get(health::launcher_health)
                .head(health::not_found)
                .fallback(health::not_found),
        )
        .fallback(health::not_found)
        .with_state(state)
}
