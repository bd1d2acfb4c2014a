//! The garage - durable collection of saved content items
//!
//! Cards, garage views, and the stats dashboard all read from one
//! `GarageStore`. The store owns a `StorageBackend` that persists the whole
//! collection as a single JSON document; `JsonFileStorage` is the production
//! backend, `MemoryStorage` the test one.
//!
//! # Example
//!
//! ```no_run
//! use paddock::garage::{CardType, GarageStore, JsonFileStorage, SavedItem};
//!
//! let storage = JsonFileStorage::open(".paddock")?;
//! let mut garage = GarageStore::open(Box::new(storage))?;
//!
//! garage.add(SavedItem::new(
//!     "car-42",
//!     CardType::NewCar,
//!     "Kia EV9",
//!     "https://img/ev9.jpg",
//! ));
//! assert!(garage.is_saved("car-42", CardType::NewCar));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod achievements;
pub mod persist;
pub mod store;
pub mod types;

pub use achievements::{Achievements, DefaultScoring, GarageTally, ScoringRule};
pub use persist::{JsonFileStorage, MemoryStorage, StorageBackend, GARAGE_FILE};
pub use store::{GarageEvent, GarageStore, SharedGarage, SubscriberId};
pub use types::{CardType, ItemMetadata, MetadataValue, Ownership, SavedItem};
