//! Axum router wiring.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{app_state::AppState, dispatch, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(ops::hello))
        .route("/todos", get(dispatch::list_todos).post(dispatch::create_todo))
        .route(
            "/todos/:id",
            put(dispatch::update_todo).delete(dispatch::delete_todo),
        )
        .route("/metrics", get(ops::metrics))
        // Body size is capped once, in `track_request` (`server.max_body_bytes`).
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track_request,
        ));

    let router = if state.cfg().server.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
