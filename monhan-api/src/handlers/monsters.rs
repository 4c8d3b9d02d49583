//! Monster endpoints
//!
//! List and filter over the monster collection, single-record lookups by
//! name or id, and the id-keyed sub-resources (quests featuring the
//! monster, similar monsters, icon redirect).

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    filter::{contains_ignore_case, eq_ignore_case, FilterOperator, MembershipFilter},
    lookup::find_by_key,
    models::{Monster, Quest},
    pagination::{paginate, Page, PageQuery},
    state::AppState,
};

/// Recognized query parameters for `GET /api/monsters/filter`.
///
/// Absent fields impose no constraint; specified fields combine with
/// logical AND. Unknown parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonsterFilterQuery {
    pub elements: Option<String>,
    #[serde(default)]
    pub elements_operator: FilterOperator,

    pub weakness: Option<String>,
    #[serde(default)]
    pub weakness_operator: FilterOperator,

    pub ailments: Option<String>,
    #[serde(default)]
    pub ailments_operator: FilterOperator,
}

/// `GET /api/monsters/{id}/quests` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MonsterQuests {
    pub monster: Monster,
    pub quests: Vec<Quest>,
}

/// `GET /api/monsters/{id}/similar` response body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarMonsters {
    pub source: Monster,
    pub similar_by_elements: Vec<Monster>,
    pub similar_by_weakness: Vec<Monster>,
}

/// `GET /api/monsters`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<Page<Monster>> {
    Json(paginate(state.monsters().all(), &query, "/api/monsters"))
}

/// `GET /api/monsters/filter`
///
/// Returns the full matching set; filter endpoints do not paginate.
pub async fn filter(
    State(state): State<AppState>,
    Query(query): Query<MonsterFilterQuery>,
) -> Json<Vec<Monster>> {
    let elements = query
        .elements
        .as_deref()
        .map(|raw| MembershipFilter::parse(raw, query.elements_operator));
    let weakness = query
        .weakness
        .as_deref()
        .map(|raw| MembershipFilter::parse(raw, query.weakness_operator));
    let ailments = query
        .ailments
        .as_deref()
        .map(|raw| MembershipFilter::parse(raw, query.ailments_operator));

    let matches = state.monsters().select(|monster| {
        elements
            .as_ref()
            .map_or(true, |f| f.matches(&monster.elements))
            && weakness
                .as_ref()
                .map_or(true, |f| f.matches(&monster.weakness))
            && ailments
                .as_ref()
                .map_or(true, |f| f.matches(&monster.ailments))
    });

    Json(matches)
}

/// `GET /api/types`
///
/// Distinct type strings in first-occurrence order.
pub async fn types(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut seen = Vec::new();
    for monster in state.monsters().all() {
        if !seen.contains(&monster.kind) {
            seen.push(monster.kind.clone());
        }
    }
    Json(seen)
}

/// `GET /api/monsters/{name}`
pub async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Monster>> {
    find_by_key(state.monsters().all(), |m| m.name.as_str(), &name)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Monster not found: {name}")))
}

/// `GET /api/monsters/{name}/icon`
///
/// 302 redirect to the first game entry's icon under the static prefix.
pub async fn icon(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response> {
    let monster = find_by_key(state.monsters().all(), |m| m.name.as_str(), &name);

    match monster.and_then(|m| m.games.first()) {
        Some(entry) => {
            let location = format!("{}/{}", state.config().data.icon_route_prefix, entry.image);
            tracing::debug!(%location, "icon redirect");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        None => Err(Error::NotFound(format!(
            "Icon not found for monster: {name}"
        ))),
    }
}

/// `GET /api/monsters/{id}/quests`
///
/// The monster plus every quest that targets it by name.
pub async fn quests_for(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MonsterQuests>> {
    let monster = find_by_key(state.monsters().all(), |m| m.id.oid.as_str(), &id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("Monster not found with id: {id}")))?;

    let quests = state
        .quests()
        .select(|quest| contains_ignore_case(&quest.targets, &monster.name));

    Ok(Json(MonsterQuests { monster, quests }))
}

/// `GET /api/monsters/{id}/similar`
///
/// Monsters sharing at least one element or at least one weakness with
/// the source, source itself excluded.
pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SimilarMonsters>> {
    let source = find_by_key(state.monsters().all(), |m| m.id.oid.as_str(), &id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("Monster not found with id: {id}")))?;

    let by_elements = MembershipFilter::from_values(&source.elements, FilterOperator::Or);
    let by_weakness = MembershipFilter::from_values(&source.weakness, FilterOperator::Or);

    let similar_by_elements = state.monsters().select(|m| {
        m.id.oid != source.id.oid && !source.elements.is_empty() && by_elements.matches(&m.elements)
    });
    let similar_by_weakness = state.monsters().select(|m| {
        m.id.oid != source.id.oid && !source.weakness.is_empty() && by_weakness.matches(&m.weakness)
    });

    Ok(Json(SimilarMonsters {
        source,
        similar_by_elements,
        similar_by_weakness,
    }))
}

/// `GET /api/monsters/type/{type}`
pub async fn by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<Monster>>> {
    let matches = state
        .monsters()
        .select(|m| eq_ignore_case(&m.kind, &kind));
    if matches.is_empty() {
        return Err(Error::NotFound(format!(
            "No monsters found with type: {kind}"
        )));
    }
    Ok(Json(matches))
}

/// `GET /api/monsters/element/{element}`
pub async fn by_element(
    State(state): State<AppState>,
    Path(element): Path<String>,
) -> Result<Json<Vec<Monster>>> {
    let matches = state
        .monsters()
        .select(|m| contains_ignore_case(&m.elements, &element));
    if matches.is_empty() {
        return Err(Error::NotFound(format!(
            "No monsters found with element: {element}"
        )));
    }
    Ok(Json(matches))
}

/// `GET /api/monsters/ailment/{ailment}`
pub async fn by_ailment(
    State(state): State<AppState>,
    Path(ailment): Path<String>,
) -> Result<Json<Vec<Monster>>> {
    let matches = state
        .monsters()
        .select(|m| contains_ignore_case(&m.ailments, &ailment));
    if matches.is_empty() {
        return Err(Error::NotFound(format!(
            "No monsters found with ailment: {ailment}"
        )));
    }
    Ok(Json(matches))
}

/// `GET /api/monsters/weakness/{weakness}`
pub async fn by_weakness(
    State(state): State<AppState>,
    Path(weakness): Path<String>,
) -> Result<Json<Vec<Monster>>> {
    let matches = state
        .monsters()
        .select(|m| contains_ignore_case(&m.weakness, &weakness));
    if matches.is_empty() {
        return Err(Error::NotFound(format!(
            "No monsters found with weakness: {weakness}"
        )));
    }
    Ok(Json(matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_defaults_to_or() {
        let query: MonsterFilterQuery =
            serde_urlencoded::from_str("elements=fire,water&weakness_operator=and").unwrap();
        assert_eq!(query.elements.as_deref(), Some("fire,water"));
        assert_eq!(query.elements_operator, FilterOperator::Or);
        assert_eq!(query.weakness_operator, FilterOperator::And);
        assert!(query.ailments.is_none());
    }

    #[test]
    fn similar_body_uses_camel_case() {
        let body = SimilarMonsters {
            source: sample_monster("Rathalos"),
            similar_by_elements: vec![],
            similar_by_weakness: vec![],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("similarByElements").is_some());
        assert!(value.get("similarByWeakness").is_some());
    }

    fn sample_monster(name: &str) -> Monster {
        serde_json::from_value(serde_json::json!({
            "_id": {"$oid": "abc"},
            "name": name,
            "type": "Flying Wyvern",
            "games": []
        }))
        .unwrap()
    }
}
