//! Cross-collection game content endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    filter::eq_ignore_case,
    models::{EndemicLife, Monster, Quest},
    state::AppState,
};

/// `GET /api/games/{game}/content` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameContent {
    pub monsters: Vec<Monster>,
    pub quests: Vec<Quest>,

    #[serde(rename = "endemicLife")]
    pub endemic_life: Vec<EndemicLife>,
}

/// `GET /api/games/{game}/content`
///
/// Everything appearing in the named game across all three collections.
/// 404 only when every collection comes back empty.
pub async fn content(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> Result<Json<GameContent>> {
    let monsters = state
        .monsters()
        .select(|m| m.games.iter().any(|entry| eq_ignore_case(&entry.game, &game)));
    let quests = state.quests().select(|q| eq_ignore_case(&q.game, &game));
    let endemic_life = state
        .endemic_life()
        .select(|e| e.game.iter().any(|entry| eq_ignore_case(&entry.game, &game)));

    if monsters.is_empty() && quests.is_empty() && endemic_life.is_empty() {
        return Err(Error::NotFound(format!("No content found for game: {game}")));
    }

    Ok(Json(GameContent {
        monsters,
        quests,
        endemic_life,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_body_uses_wire_field_name() {
        let body = GameContent {
            monsters: vec![],
            quests: vec![],
            endemic_life: vec![],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("endemicLife").is_some());
        assert!(json.get("endemic_life").is_none());
    }
}
