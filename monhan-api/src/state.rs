//! Application state management

use std::sync::Arc;

use crate::{
    config::Config,
    error::Result,
    models::{EndemicLife, EndemicLifeData, Monster, MonsterData, Quest, QuestData},
    store::{load_json, RecordStore},
};

/// The three collections, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub monsters: RecordStore<Monster>,
    pub quests: RecordStore<Quest>,
    pub endemic_life: RecordStore<EndemicLife>,
}

impl Datasets {
    /// Load every collection from the configured dataset files.
    ///
    /// Any read or parse failure aborts startup; the service never serves
    /// a partially loaded corpus.
    pub fn load(config: &Config) -> Result<Self> {
        let monsters: MonsterData = load_json(&config.data.monsters_path())?;
        let quests: QuestData = load_json(&config.data.quests_path())?;
        let endemic_life: EndemicLifeData = load_json(&config.data.endemic_life_path())?;

        tracing::info!(
            monsters = monsters.monsters.len(),
            quests = quests.quests.len(),
            endemic_life = endemic_life.endemic_life.len(),
            "datasets loaded"
        );

        Ok(Self {
            monsters: RecordStore::new(monsters.monsters),
            quests: RecordStore::new(quests.quests),
            endemic_life: RecordStore::new(endemic_life.endemic_life),
        })
    }
}

/// Application state shared across handlers
///
/// Cloning is cheap; both fields are behind `Arc`. The datasets are
/// immutable after load, so handlers read without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    datasets: Arc<Datasets>,
}

impl AppState {
    /// Create a new AppState with the given configuration and datasets
    pub fn new(config: Config, datasets: Datasets) -> Self {
        Self {
            config: Arc::new(config),
            datasets: Arc::new(datasets),
        }
    }

    /// Load datasets per the configuration and build the state
    pub fn from_config(config: Config) -> Result<Self> {
        let datasets = Datasets::load(&config)?;
        Ok(Self::new(config, datasets))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn monsters(&self) -> &RecordStore<Monster> {
        &self.datasets.monsters
    }

    pub fn quests(&self) -> &RecordStore<Quest> {
        &self.datasets.quests
    }

    pub fn endemic_life(&self) -> &RecordStore<EndemicLife> {
        &self.datasets.endemic_life
    }
}
