//! Route table
//!
//! Static segments (`filter`, `type`, ...) take precedence over the `{id}`
//! capture at the same position, so `/api/monsters/filter` never resolves
//! as a monster name. All item routes under `/api/monsters` share the
//! `{id}` parameter name; the router requires captures at the same position
//! to agree.

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Build the application router with all routes registered.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config().data.static_dir.clone();

    Router::new()
        .route("/", get(handlers::welcome))
        // monsters
        .route("/api/monsters", get(handlers::monsters::list))
        .route("/api/monsters/filter", get(handlers::monsters::filter))
        .route("/api/monsters/type/{type}", get(handlers::monsters::by_type))
        .route(
            "/api/monsters/element/{element}",
            get(handlers::monsters::by_element),
        )
        .route(
            "/api/monsters/ailment/{ailment}",
            get(handlers::monsters::by_ailment),
        )
        .route(
            "/api/monsters/weakness/{weakness}",
            get(handlers::monsters::by_weakness),
        )
        .route("/api/monsters/{id}", get(handlers::monsters::by_name))
        .route("/api/monsters/{id}/icon", get(handlers::monsters::icon))
        .route(
            "/api/monsters/{id}/quests",
            get(handlers::monsters::quests_for),
        )
        .route(
            "/api/monsters/{id}/similar",
            get(handlers::monsters::similar),
        )
        .route("/api/types", get(handlers::monsters::types))
        // quests
        .route("/api/quests", get(handlers::quests::list))
        .route("/api/quests/filter", get(handlers::quests::filter))
        .route("/api/quests/{id}", get(handlers::quests::by_id))
        // endemic life
        .route("/api/endemic-life", get(handlers::endemic_life::list))
        .route(
            "/api/endemic-life/filter",
            get(handlers::endemic_life::filter),
        )
        .route(
            "/api/endemic-life/{name}",
            get(handlers::endemic_life::by_name),
        )
        // games
        .route("/api/games/{game}/content", get(handlers::games::content))
        // probes
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::readiness))
        // icon assets and raw dataset files
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .with_state(state)
}
