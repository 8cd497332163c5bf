use crate::history::HistoryStore;
use crate::tests::temp_storage;

#[test]
fn test_record_is_newest_first() {
    let (storage, _tmp) = temp_storage();
    let store = HistoryStore::load(storage, 50).unwrap();

    store.record("first").unwrap();
    store.record("second").unwrap();
    store.record("third").unwrap();

    let queries: Vec<String> = store.list().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, vec!["third", "second", "first"]);
}

#[test]
fn test_consecutive_duplicate_refreshes_in_place() {
    let (storage, _tmp) = temp_storage();
    let store = HistoryStore::load(storage, 50).unwrap();

    let first = store.record("AI min_faves:100").unwrap();
    let second = store.record("AI min_faves:100").unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(store.list().len(), 1);

    // a different query in between breaks the collapse
    store.record("rust").unwrap();
    store.record("AI min_faves:100").unwrap();
    assert_eq!(store.list().len(), 3);
}

#[test]
fn test_cap_drops_oldest() {
    let (storage, _tmp) = temp_storage();
    let store = HistoryStore::load(storage, 3).unwrap();

    for query in ["a", "b", "c", "d"] {
        store.record(query).unwrap();
    }

    let queries: Vec<String> = store.list().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, vec!["d", "c", "b"]);
}

#[test]
fn test_remove_and_clear() {
    let (storage, _tmp) = temp_storage();
    let store = HistoryStore::load(storage, 50).unwrap();

    let entry = store.record("a").unwrap();
    store.record("b").unwrap();

    assert!(store.remove(&entry.id).unwrap());
    assert!(!store.remove(&entry.id).unwrap());
    assert_eq!(store.list().len(), 1);

    assert_eq!(store.clear().unwrap(), 1);
    assert!(store.list().is_empty());
}

#[test]
fn test_persists_across_reload() {
    let (storage, _tmp) = temp_storage();

    let store = HistoryStore::load(storage.clone(), 50).unwrap();
    store.record("kept query").unwrap();
    drop(store);

    let reloaded = HistoryStore::load(storage, 50).unwrap();
    let queries: Vec<String> = reloaded.list().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, vec!["kept query"]);
}
