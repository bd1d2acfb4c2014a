//! Integration tests for the garage store over real on-disk storage

use paddock::garage::{
    CardType, DefaultScoring, GarageStore, ItemMetadata, JsonFileStorage, Ownership, SavedItem,
    GARAGE_FILE,
};
use std::thread;
use tempfile::TempDir;

fn open_at(dir: &std::path::Path) -> GarageStore {
    let storage = JsonFileStorage::open(dir).unwrap();
    GarageStore::open(Box::new(storage)).unwrap()
}

fn car(id: &str, title: &str) -> SavedItem {
    SavedItem::new(id, CardType::NewCar, title, "https://img.example/car.jpg")
}

#[test]
fn test_collection_survives_restart() {
    let tmp = TempDir::new().unwrap();

    {
        let mut garage = open_at(tmp.path());
        garage.add(car("car-1", "Kia EV9"));
        let mut used = SavedItem::new("car-2", CardType::UsedCar, "NA Miata", "");
        used.metadata = ItemMetadata::with_ownership(Ownership::Owned);
        garage.add(used);
        garage.add(SavedItem::new(
            "art-1",
            CardType::Article,
            "Winter tire guide",
            "",
        ));
    } // store dropped, nothing held in memory

    let reopened = open_at(tmp.path());
    assert_eq!(reopened.len(), 3, "all items should survive the restart");
    assert!(reopened.is_saved("car-1", CardType::NewCar));
    assert!(reopened.is_saved("car-2", CardType::UsedCar));
    assert_eq!(
        reopened.find_by_id("car-2").unwrap().metadata.ownership,
        Some(Ownership::Owned)
    );

    // Insertion order is part of the document format
    let ids: Vec<&str> = reopened.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["car-1", "car-2", "art-1"]);
}

#[test]
fn test_document_is_one_json_file_under_the_known_name() {
    let tmp = TempDir::new().unwrap();
    let mut garage = open_at(tmp.path());
    garage.add(car("car-1", "Kia EV9"));

    let doc_path = tmp.path().join(GARAGE_FILE);
    assert!(doc_path.exists());

    let raw = std::fs::read_to_string(&doc_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = parsed.as_array().expect("document is an array of items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "newCar");
    assert!(items[0]["savedAt"].is_string());
}

#[test]
fn test_update_and_remove_round_trip() {
    let tmp = TempDir::new().unwrap();

    {
        let mut garage = open_at(tmp.path());
        garage.add(car("car-1", "Kia EV9"));
        garage.add(car("car-2", "Honda Pilot"));
        garage.update("car-1", ItemMetadata::with_ownership(Ownership::TestDriven));
        garage.remove("car-2", CardType::NewCar);
    }

    let reopened = open_at(tmp.path());
    assert_eq!(reopened.len(), 1);
    assert_eq!(
        reopened.by_ownership(Ownership::TestDriven)[0].id,
        "car-1"
    );
    assert!(!reopened.is_saved("car-2", CardType::NewCar));
}

#[test]
fn test_shared_handle_serves_concurrent_readers() {
    let tmp = TempDir::new().unwrap();
    let mut garage = open_at(tmp.path());
    for n in 0..10 {
        let mut item = car(&format!("car-{n}"), "Car");
        item.metadata = ItemMetadata::with_ownership(Ownership::Interested);
        garage.add(item);
    }

    let shared = garage.into_shared();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let garage = shared.read();
                let snapshot = garage.items().len();
                let interested = garage.by_ownership(Ownership::Interested).len();
                (snapshot, interested)
            })
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), (10, 10));
    }

    // Writers still go through the same handle afterwards
    shared.write().remove("car-0", CardType::NewCar);
    assert_eq!(shared.read().len(), 9);
}

#[test]
fn test_stats_over_persisted_collection() {
    let tmp = TempDir::new().unwrap();

    {
        let mut garage = open_at(tmp.path());
        for n in 0..3 {
            let mut item = car(&format!("car-{n}"), "Car");
            item.metadata = ItemMetadata::with_ownership(Ownership::Owned);
            garage.add(item);
        }
    }

    let reopened = open_at(tmp.path());
    let tally = reopened.tally();
    assert_eq!(tally.total, 3);
    assert_eq!(tally.owned, 3);

    let achievements = reopened.achievements(&DefaultScoring);
    assert_eq!(achievements.points, 3 * 5 + 3 * 20);
    assert!(achievements.level >= 2);
}
