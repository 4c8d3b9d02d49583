//! Record types mirroring the upstream JSON corpus
//!
//! Field names follow the dataset dumps on the wire (`_id.$oid`, `isKey`,
//! `questType`, ...). Array-valued fields deserialize missing-as-empty so
//! that predicates never have to distinguish absent from empty.

mod endemic_life;
mod monster;
mod quest;

pub use endemic_life::{EndemicGameEntry, EndemicLife, EndemicLifeData};
pub use monster::{GameEntry, Monster, MonsterData};
pub use quest::{Quest, QuestData};

use serde::{Deserialize, Serialize};

/// MongoDB-style object id wrapper, kept for wire compatibility with the
/// upstream dataset dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectId {
    #[serde(rename = "$oid")]
    pub oid: String,
}

impl ObjectId {
    pub fn new(oid: impl Into<String>) -> Self {
        Self { oid: oid.into() }
    }
}
