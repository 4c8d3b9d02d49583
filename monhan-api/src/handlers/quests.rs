//! Quest endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    filter::{eq_ignore_case, parse_flag, FilterOperator, MembershipFilter},
    lookup::find_by_key,
    models::Quest,
    pagination::{paginate, Page, PageQuery},
    state::AppState,
};

/// Recognized query parameters for `GET /api/quests/filter`.
///
/// Scalars match with case-insensitive equality; `targets` is a
/// comma-separated membership filter over the quest's target list. `isKey`
/// treats `"true"` in any casing as true and anything else as false.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestFilterQuery {
    pub game: Option<String>,

    #[serde(rename = "questType")]
    pub quest_type: Option<String>,

    pub difficulty: Option<String>,

    #[serde(rename = "isKey")]
    pub is_key: Option<String>,

    pub map: Option<String>,

    pub targets: Option<String>,
    #[serde(default)]
    pub targets_operator: FilterOperator,
}

/// `GET /api/quests`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<Page<Quest>> {
    Json(paginate(state.quests().all(), &query, "/api/quests"))
}

/// `GET /api/quests/filter`
///
/// Returns the full matching set; filter endpoints do not paginate.
pub async fn filter(
    State(state): State<AppState>,
    Query(query): Query<QuestFilterQuery>,
) -> Json<Vec<Quest>> {
    let targets = query
        .targets
        .as_deref()
        .map(|raw| MembershipFilter::parse(raw, query.targets_operator));
    let is_key = query.is_key.as_deref().map(parse_flag);

    let matches = state.quests().select(|quest| {
        query
            .game
            .as_deref()
            .map_or(true, |game| eq_ignore_case(&quest.game, game))
            && query
                .quest_type
                .as_deref()
                .map_or(true, |kind| eq_ignore_case(&quest.quest_type, kind))
            && query
                .difficulty
                .as_deref()
                .map_or(true, |d| eq_ignore_case(&quest.difficulty, d))
            && is_key.map_or(true, |key| quest.is_key == key)
            && query
                .map
                .as_deref()
                .map_or(true, |map| eq_ignore_case(&quest.map, map))
            && targets.as_ref().map_or(true, |f| f.matches(&quest.targets))
    });

    Json(matches)
}

/// `GET /api/quests/{id}`
pub async fn by_id(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Quest>> {
    find_by_key(state.quests().all(), |q| q.id.oid.as_str(), &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Quest not found with id: {id}")))
}
