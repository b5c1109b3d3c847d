// tests/core/record_store.rs
use pokedex_vault::consts::{CATALOG_KEY, FAVORITES_KEY, TYPES_KEY};
use pokedex_vault::{
    CatalogEntry, CoreError, FavoritePolicy, KeyValueStore, MemoryKvStore, RecordStore,
};
use serde_json::{json, Value};

use crate::common::{ids, setup, types, FlakyStore};

#[test]
fn test_walkthrough_create_remove_favorite() {
    setup();
    let mut store = RecordStore::open(MemoryKvStore::new());

    let pikachu = store.create("Pikachu", types(&["Electric"])).unwrap().id;
    assert_eq!(pikachu, 1);
    let bulbasaur = store.create("Bulbasaur", types(&["Grass", "Poison"])).unwrap().id;
    assert_eq!(bulbasaur, 2);

    assert!(store.remove(1).unwrap());
    assert_eq!(ids(store.entries()), vec![2]);

    store.toggle_favorite(2).unwrap();
    let view = store.favorites_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, 2);
    assert_eq!(view[0].types, types(&["Grass", "Poison"]));

    store.toggle_favorite(2).unwrap();
    assert!(store.favorites_view().is_empty());
}

#[test]
fn test_create_then_remove_restores_catalog() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    store
        .replace_all(vec![
            CatalogEntry::new(1, "Bulbasaur", types(&["Grass"])),
            CatalogEntry::new(4, "Charmander", types(&["Fire"])),
        ])
        .unwrap();
    let before = store.entries().to_vec();

    let id = store.create("Squirtle", types(&["Water"])).unwrap().id;
    assert_eq!(id, 5);
    store.remove(id).unwrap();

    assert_eq!(store.entries(), before.as_slice());
    let persisted: Vec<CatalogEntry> =
        serde_json::from_slice(&store.store().get(CATALOG_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted, before);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    store.create("Onix", types(&["Rock"])).unwrap();

    assert!(!store.remove(42).unwrap());
    assert_eq!(ids(store.entries()), vec![1]);
}

#[test]
fn test_rename_changes_only_the_name() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    let mut original = CatalogEntry::new(7, "Squirtle", types(&["Water"]));
    original.description = Some("Tiny turtle".into());
    original.height = Some(0.5);
    original.weight = Some(9.0);
    original.image_ref = "https://img.example/7.png".into();
    store
        .replace_all(vec![
            original.clone(),
            CatalogEntry::new(8, "Wartortle", types(&["Water"])),
        ])
        .unwrap();

    store.rename(7, "Shellby").unwrap();

    let renamed = store.get(7).unwrap();
    assert_eq!(renamed.display_name, "Shellby");
    assert_eq!(
        CatalogEntry {
            display_name: "Squirtle".into(),
            ..renamed.clone()
        },
        original
    );
    assert_eq!(store.get(8).unwrap().display_name, "Wartortle");

    let reopened = RecordStore::open(store.into_store());
    assert_eq!(reopened.get(7).unwrap().display_name, "Shellby");
}

#[test]
fn test_rename_keeps_fields_the_catalog_does_not_model() {
    let mut kv = MemoryKvStore::new();
    let stored = json!([{
        "id": 25,
        "name": { "english": "Pikachu", "japanese": "Pika" },
        "type": ["Electric"],
        "base": { "HP": 35 }
    }]);
    kv.set(CATALOG_KEY, stored.to_string().as_bytes()).unwrap();
    let mut store = RecordStore::open(kv);

    store.rename(25, "Sparky").unwrap();

    let persisted: Value =
        serde_json::from_slice(&store.store().get(CATALOG_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted[0]["name"]["english"], "Sparky");
    assert_eq!(persisted[0]["name"]["japanese"], "Pika");
    assert_eq!(persisted[0]["base"], json!({ "HP": 35 }));
}

#[test]
fn test_create_after_u64_max_id_is_invalid() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    store
        .replace_all(vec![CatalogEntry::new(u64::MAX, "Last", types(&["Fire"]))])
        .unwrap();

    let err = store.create("Next", types(&["Fire"])).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
    assert_eq!(ids(store.entries()), vec![u64::MAX]);
}

#[test]
fn test_rename_missing_is_not_found_and_catalog_unchanged() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    store.create("Pikachu", types(&["Electric"])).unwrap();
    let before = store.entries().to_vec();

    let err = store.rename(99, "X").unwrap_err();
    assert!(matches!(err, CoreError::NotFound(99)));
    assert_eq!(store.entries(), before.as_slice());
}

#[test]
fn test_rename_to_blank_is_invalid() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    store.create("Pikachu", types(&["Electric"])).unwrap();

    assert!(matches!(
        store.rename(1, "  "),
        Err(CoreError::InvalidInput(_))
    ));
    assert_eq!(store.get(1).unwrap().display_name, "Pikachu");
}

#[test]
fn test_filter_by_name() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    for name in ["Charmander", "Charmeleon", "Squirtle", "Charizard"] {
        store.create(name, types(&["Fire"])).unwrap();
    }

    assert_eq!(ids(store.filter_by_name("")), vec![1, 2, 3, 4]);
    assert_eq!(ids(store.filter_by_name("CHAR")), vec![1, 2, 4]);
    assert_eq!(ids(store.filter_by_name("meLEon")), vec![2]);
    assert_eq!(store.filter_by_name("mewtwo").count(), 0);
}

#[test]
fn test_replace_all_accepts_empty() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    store.create("Pikachu", types(&["Electric"])).unwrap();

    store.replace_all(Vec::new()).unwrap();

    assert!(store.entries().is_empty());
    assert_eq!(store.store().get(CATALOG_KEY).unwrap().unwrap(), b"[]");
    assert_eq!(store.create("Mew", types(&["Psychic"])).unwrap().id, 1);
}

#[test]
fn test_absent_and_malformed_blobs_load_as_empty() {
    let store = RecordStore::open(MemoryKvStore::new());
    assert!(store.entries().is_empty());
    assert!(store.favorites().is_empty());

    let mut kv = MemoryKvStore::new();
    kv.set(CATALOG_KEY, b"{not json").unwrap();
    kv.set(FAVORITES_KEY, b"\"oops\"").unwrap();
    let store = RecordStore::open(kv);
    assert!(store.entries().is_empty());
    assert!(store.favorites().is_empty());
}

#[test]
fn test_read_failure_loads_as_empty() {
    let flaky = FlakyStore::default();
    flaky.fail_reads.set(true);

    let store = RecordStore::open(flaky);
    assert!(store.entries().is_empty());
    assert_eq!(store.available_types().len(), 5);
}

#[test]
fn test_write_failure_is_reported_but_memory_kept() {
    let flaky = FlakyStore::default();
    let fail_writes = flaky.fail_writes.clone();
    let mut store = RecordStore::open(flaky);

    store.create("Pikachu", types(&["Electric"])).unwrap();
    fail_writes.set(true);

    let err = store.create("Raichu", types(&["Electric"])).unwrap_err();
    assert!(matches!(err, CoreError::Persistence(_)));
    assert_eq!(ids(store.entries()), vec![1, 2]);

    assert!(matches!(
        store.toggle_favorite(2),
        Err(CoreError::Persistence(_))
    ));
    assert!(store.is_favorite(2));

    // Next successful write carries everything
    fail_writes.set(false);
    store.rename(1, "Pika").unwrap();
    let reopened = RecordStore::open(store.into_store());
    assert_eq!(ids(reopened.entries()), vec![1, 2]);
    assert_eq!(reopened.get(1).unwrap().display_name, "Pika");
    assert!(reopened.favorites().is_empty());
}

#[test]
fn test_pruned_favorite_is_saved_when_catalog_write_fails() {
    let flaky = FlakyStore::default();
    let refused_key = flaky.refused_key.clone();
    let mut store = RecordStore::open(flaky).with_policy(FavoritePolicy::PruneOnDelete);
    store.create("Pikachu", types(&["Electric"])).unwrap();
    store.toggle_favorite(1).unwrap();

    refused_key.set(Some(CATALOG_KEY));
    let err = store.remove(1).unwrap_err();

    assert!(matches!(err, CoreError::Persistence(_)));
    assert!(!store.is_favorite(1));
    assert_eq!(store.store().get(FAVORITES_KEY).unwrap().unwrap(), b"[]");
}

#[test]
fn test_available_types_default_and_override() {
    let mut store = RecordStore::open(MemoryKvStore::new());
    assert_eq!(
        store.available_types(),
        types(&["Grass", "Fire", "Water", "Electric", "Flying"])
    );

    store
        .set_available_types(&types(&["Psychic", "Ghost"]))
        .unwrap();
    assert_eq!(store.available_types(), types(&["Psychic", "Ghost"]));
    assert_eq!(
        store.store().get(TYPES_KEY).unwrap().unwrap(),
        br#"["Psychic","Ghost"]"#
    );
}
