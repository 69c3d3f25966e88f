use std::collections::BTreeMap;
use timepunch::db::DbPool;
use timepunch::db::log::{LogOperation, count};
use timepunch::db::migrate::run_pending_migrations;
use timepunch::models::{DayPunchEntry, WaivedDayEntry};
use timepunch::store::{KeyValueStore, MemoryStore};

fn punch(values: &[&str]) -> DayPunchEntry {
    DayPunchEntry::new(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn test_migrations_are_applied_once() {
    let pool = DbPool::in_memory().unwrap();
    assert_eq!(count(&pool.conn, LogOperation::MigrationApplied).unwrap(), 2);

    run_pending_migrations(&pool.conn).unwrap();
    assert_eq!(count(&pool.conn, LogOperation::MigrationApplied).unwrap(), 2);
}

#[test]
fn test_sqlite_store_basic_operations() {
    let pool = DbPool::in_memory().unwrap();
    let mut store = pool.punches();

    assert!(store.entries().unwrap().is_empty());
    assert!(!store.has("2020-3-1").unwrap());
    assert_eq!(store.get("2020-3-1").unwrap(), None);

    store.set("2020-3-1", punch(&["08:00", "12:00"])).unwrap();
    assert!(store.has("2020-3-1").unwrap());
    assert_eq!(store.get("2020-3-1").unwrap(), Some(punch(&["08:00", "12:00"])));

    // replaced wholesale
    store.set("2020-3-1", punch(&["09:00"])).unwrap();
    assert_eq!(store.get("2020-3-1").unwrap(), Some(punch(&["09:00"])));

    assert!(store.delete("2020-3-1").unwrap());
    assert!(!store.delete("2020-3-1").unwrap());
}

#[test]
fn test_sqlite_store_values_are_json() {
    let pool = DbPool::in_memory().unwrap();
    pool.punches().set("2020-3-1", punch(&["08:00"])).unwrap();
    pool.waivers()
        .set("2020-01-01", WaivedDayEntry::new("New Year", "08:00"))
        .unwrap();

    let raw: String = pool
        .conn
        .query_row(
            "SELECT value FROM flexible_store WHERE key = '2020-3-1'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw, r#"{"values":["08:00"]}"#);

    let raw: String = pool
        .conn
        .query_row(
            "SELECT value FROM waived_workdays WHERE key = '2020-01-01'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw, r#"{"reason":"New Year","hours":"08:00"}"#);
}

#[test]
fn test_sqlite_set_many_keeps_other_keys() {
    let pool = DbPool::in_memory().unwrap();
    let mut store = pool.waivers();
    store
        .set("2019-12-31", WaivedDayEntry::new("Old", "08:00"))
        .unwrap();
    store
        .set("2020-01-01", WaivedDayEntry::new("Stale", "04:00"))
        .unwrap();

    let mut batch = BTreeMap::new();
    batch.insert("2020-01-01".to_string(), WaivedDayEntry::new("New Year", "08:00"));
    batch.insert("2020-04-10".to_string(), WaivedDayEntry::new("Good Friday", "08:00"));
    store.set_many(batch).unwrap();

    let keys: Vec<String> = store.entries().unwrap().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["2019-12-31", "2020-01-01", "2020-04-10"]);
    assert_eq!(store.get("2020-01-01").unwrap().unwrap().reason, "New Year");
}

#[test]
fn test_sqlite_clear_only_touches_its_table() {
    let pool = DbPool::in_memory().unwrap();
    pool.punches().set("2020-3-1", punch(&["08:00"])).unwrap();
    pool.waivers()
        .set("2020-01-01", WaivedDayEntry::new("New Year", "08:00"))
        .unwrap();

    pool.punches().clear().unwrap();

    assert!(pool.punches().entries().unwrap().is_empty());
    assert_eq!(pool.waivers().entries().unwrap().len(), 1);
}

#[test]
fn test_memory_store() {
    let mut store: MemoryStore<DayPunchEntry> =
        [("2020-3-2", punch(&["09:00"])), ("2020-3-1", punch(&["08:00"]))]
            .into_iter()
            .collect();

    assert_eq!(store.len(), 2);
    let keys: Vec<String> = store.entries().unwrap().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["2020-3-1", "2020-3-2"]);

    store.set("2020-3-3", punch(&[])).unwrap();
    assert!(store.has("2020-3-3").unwrap());
    assert!(store.delete("2020-3-3").unwrap());

    store.clear().unwrap();
    assert!(store.is_empty());
}
