use serde::{Deserialize, Serialize};

use super::ObjectId;

/// Per-game appearance of a monster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    /// Game title, e.g. "Monster Hunter Rise"
    pub game: String,

    /// Icon image filename, e.g. "MHRise-Arzuros_Icon.png"
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Danger rating as printed in-game (a string like "3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
}

/// A monster record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,

    /// Monster classification, e.g. "Flying Wyvern"
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_large: Option<bool>,

    #[serde(default)]
    pub elements: Vec<String>,

    #[serde(default)]
    pub ailments: Vec<String>,

    #[serde(default)]
    pub weakness: Vec<String>,

    pub games: Vec<GameEntry>,
}

/// Top-level shape of `monsters.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonsterData {
    pub monsters: Vec<Monster>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARZUROS: &str = r#"{
        "_id": {"$oid": "5e1570f48a80af35ce52d757"},
        "name": "Arzuros",
        "type": "Fanged Beast",
        "isLarge": true,
        "elements": [],
        "ailments": ["Bleeding"],
        "weakness": ["Fire"],
        "games": [
            {
                "game": "Monster Hunter Rise",
                "image": "MHRise-Arzuros_Icon.png",
                "info": "Bear-like monsters found in warm, damp environments.",
                "danger": "3"
            }
        ]
    }"#;

    #[test]
    fn deserializes_corpus_record() {
        let monster: Monster = serde_json::from_str(ARZUROS).unwrap();
        assert_eq!(monster.name, "Arzuros");
        assert_eq!(monster.kind, "Fanged Beast");
        assert_eq!(monster.is_large, Some(true));
        assert_eq!(monster.ailments, vec!["Bleeding"]);
        assert_eq!(monster.games[0].danger.as_deref(), Some("3"));
    }

    #[test]
    fn missing_array_fields_load_as_empty() {
        let monster: Monster = serde_json::from_str(
            r#"{
                "_id": {"$oid": "abc"},
                "name": "Aptonoth",
                "type": "Herbivore",
                "games": [{"game": "Monster Hunter World", "image": "MHW-Aptonoth_Icon.png"}]
            }"#,
        )
        .unwrap();
        assert!(monster.elements.is_empty());
        assert!(monster.ailments.is_empty());
        assert!(monster.weakness.is_empty());
        assert_eq!(monster.is_large, None);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let monster: Monster = serde_json::from_str(ARZUROS).unwrap();
        let json = serde_json::to_value(&monster).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("type").is_some());
        assert!(json.get("isLarge").is_some());
        assert!(json.get("kind").is_none());
    }
}
