use serde::{Deserialize, Serialize};

/// Per-game appearance of an endemic creature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndemicGameEntry {
    /// Game title
    pub game: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Icon image filename
    pub image: String,
}

/// An endemic life record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndemicLife {
    pub name: String,

    pub game: Vec<EndemicGameEntry>,
}

/// Top-level shape of `endemicLife.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct EndemicLifeData {
    #[serde(rename = "endemicLife")]
    pub endemic_life: Vec<EndemicLife>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_corpus_record() {
        let data: EndemicLifeData = serde_json::from_str(
            r#"{
                "endemicLife": [
                    {
                        "name": "Shepherd Hare",
                        "game": [
                            {
                                "game": "Monster Hunter World",
                                "info": "Just look at these ginormous ears!",
                                "image": "MHW-Shepherd_Hare_Icon.png"
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(data.endemic_life.len(), 1);
        assert_eq!(data.endemic_life[0].name, "Shepherd Hare");
        assert_eq!(data.endemic_life[0].game[0].game, "Monster Hunter World");
    }
}
