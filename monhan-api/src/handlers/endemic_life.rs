//! Endemic life endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    filter::eq_ignore_case,
    lookup::find_by_key,
    models::EndemicLife,
    pagination::{paginate, Page, PageQuery},
    state::AppState,
};

/// Recognized query parameters for `GET /api/endemic-life/filter`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndemicLifeFilterQuery {
    /// Exact (case-insensitive) creature name
    pub name: Option<String>,

    /// Game title; matches creatures appearing in that game
    pub game_name: Option<String>,
}

/// `GET /api/endemic-life`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<Page<EndemicLife>> {
    Json(paginate(
        state.endemic_life().all(),
        &query,
        "/api/endemic-life",
    ))
}

/// `GET /api/endemic-life/filter`
///
/// Returns the full matching set; filter endpoints do not paginate.
pub async fn filter(
    State(state): State<AppState>,
    Query(query): Query<EndemicLifeFilterQuery>,
) -> Json<Vec<EndemicLife>> {
    let matches = state.endemic_life().select(|creature| {
        query
            .name
            .as_deref()
            .map_or(true, |name| eq_ignore_case(&creature.name, name))
            && query.game_name.as_deref().map_or(true, |game| {
                creature
                    .game
                    .iter()
                    .any(|entry| eq_ignore_case(&entry.game, game))
            })
    });

    Json(matches)
}

/// `GET /api/endemic-life/{name}`
pub async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<EndemicLife>> {
    find_by_key(state.endemic_life().all(), |e| e.name.as_str(), &name)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Endemic life not found: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_fields_are_optional() {
        let query: EndemicLifeFilterQuery = serde_urlencoded::from_str("").unwrap();
        assert!(query.name.is_none());
        assert!(query.game_name.is_none());

        let query: EndemicLifeFilterQuery =
            serde_urlencoded::from_str("game_name=Monster+Hunter+Rise").unwrap();
        assert_eq!(query.game_name.as_deref(), Some("Monster Hunter Rise"));
    }
}
