pub mod ask;
pub mod garage;
pub mod mark;
pub mod remove;
pub mod save;
pub mod stats;

use anyhow::Result;
use paddock::config::Config;
use paddock::garage::{GarageStore, JsonFileStorage};

/// Open the garage store for the configured data directory
pub(crate) fn open_garage(config: &Config) -> Result<GarageStore> {
    let storage = JsonFileStorage::open(&config.data_dir)?;
    GarageStore::open(Box::new(storage))
}
