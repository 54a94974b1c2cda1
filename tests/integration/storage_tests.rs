use packcalc::core::PackSizeProvider;
use packcalc::storage::{Database, MemoryStore};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn sizes_survive_reopen_and_come_back_ascending() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data/packcalc.db");

    {
        let db = Database::open(&path).unwrap();
        db.store_pack_sizes(&[5000, 250, 2000, 500, 1000]).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.pack_sizes().unwrap(), vec![250, 500, 1000, 2000, 5000]);
    assert!(db.last_updated().unwrap().is_some());
}

#[test]
fn seeding_does_not_clobber_existing_sizes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("packcalc.db");

    let db = Database::open(&path).unwrap();
    assert!(db.seed_if_empty(&[250, 500]).unwrap());
    db.store_pack_sizes(&[23, 31, 53]).unwrap();
    drop(db);

    let db = Database::open(&path).unwrap();
    assert!(!db.seed_if_empty(&[250, 500]).unwrap());
    assert_eq!(db.pack_sizes().unwrap(), vec![23, 31, 53]);
}

#[test]
fn every_replacement_is_audited() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("packcalc.db");

    let db = Database::open(&path).unwrap();
    db.store_pack_sizes(&[250]).unwrap();
    db.store_pack_sizes(&[250, 500, 500]).unwrap();
    drop(db);

    let conn = Connection::open(&path).unwrap();
    let counts: Vec<i64> = conn
        .prepare("SELECT size_count FROM pack_size_updates ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(counts, vec![1, 2]);
}

#[test]
fn stores_are_interchangeable_behind_the_trait() {
    let stores: Vec<Box<dyn PackSizeProvider>> = vec![
        Box::new(Database::open_in_memory().unwrap()),
        Box::new(MemoryStore::default()),
    ];

    for store in &stores {
        store.store_pack_sizes(&[100, 25, 100]).unwrap();
        assert_eq!(store.pack_sizes().unwrap(), vec![25, 100]);
        store.store_pack_sizes(&[]).unwrap();
        assert!(store.pack_sizes().unwrap().is_empty());
    }
}
