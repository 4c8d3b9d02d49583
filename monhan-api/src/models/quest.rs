use serde::{Deserialize, Serialize};

use super::ObjectId;

/// A quest record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,

    /// NPC who gives the quest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Location where the quest takes place
    pub map: String,

    pub is_key: bool,

    /// Quest category, e.g. "Hub" or "Village"
    pub quest_type: String,

    pub game: String,

    /// Difficulty rating as printed in-game, e.g. "MR2" or "1"
    pub difficulty: String,

    pub objective: String,

    /// Target monster names; empty for gathering/delivery quests
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Top-level shape of `quests.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestData {
    pub quests: Vec<Quest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_corpus_record() {
        let quest: Quest = serde_json::from_str(
            r#"{
                "_id": {"$oid": "5313279a31807935cec2e31a"},
                "name": "Now That's What I Call Great!",
                "client": "Enthusiastic Commentator",
                "description": "Welcome to the Arena, folks!",
                "map": "Arena",
                "isKey": true,
                "questType": "Hub",
                "game": "Monster Hunter Rise",
                "difficulty": "MR2",
                "objective": "Hunt all target monsters",
                "targets": ["Great Izuchi", "Great Baggi", "Great Wroggi"]
            }"#,
        )
        .unwrap();
        assert_eq!(quest.id.oid, "5313279a31807935cec2e31a");
        assert!(quest.is_key);
        assert_eq!(quest.quest_type, "Hub");
        assert_eq!(quest.targets.len(), 3);
    }

    #[test]
    fn targets_default_to_empty() {
        let quest: Quest = serde_json::from_str(
            r#"{
                "_id": {"$oid": "608fc50ddc2d8ce1017b005e"},
                "name": "Fungal Frustrations",
                "map": "Shrine Ruins",
                "isKey": true,
                "questType": "Village",
                "game": "Monster Hunter Rise",
                "difficulty": "1",
                "objective": "Deliver 8 Unique Mushrooms"
            }"#,
        )
        .unwrap();
        assert!(quest.targets.is_empty());
        assert!(quest.client.is_none());
    }
}
