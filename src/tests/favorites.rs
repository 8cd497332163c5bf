use crate::favorites::FavoriteStore;
use crate::tests::temp_storage;

#[test]
fn test_add_and_list() {
    let (storage, _tmp) = temp_storage();
    let store = FavoriteStore::load(storage).unwrap();

    let favorite = store.add("AI research", "AI lang:en min_faves:100").unwrap();
    assert_eq!(favorite.name, "AI research");
    assert_eq!(favorite.query, "AI lang:en min_faves:100");
    assert_eq!(favorite.created_at, favorite.updated_at);

    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], favorite);
}

#[test]
fn test_find_by_id() {
    let (storage, _tmp) = temp_storage();
    let store = FavoriteStore::load(storage).unwrap();

    let favorite = store.add("one", "rust").unwrap();
    store.add("two", "python").unwrap();

    assert_eq!(store.find(&favorite.id).unwrap().name, "one");
    assert!(store.find(&"01ARZ3NDEKTSV4RRFFQ69G5FAV".into()).is_none());
}

#[test]
fn test_remove() {
    let (storage, _tmp) = temp_storage();
    let store = FavoriteStore::load(storage).unwrap();

    let favorite = store.add("gone soon", "rust").unwrap();
    assert!(store.remove(&favorite.id).unwrap());
    assert!(store.list().is_empty());

    // removing again reports false, not an error
    assert!(!store.remove(&favorite.id).unwrap());
}

#[test]
fn test_update_name_and_query() {
    let (storage, _tmp) = temp_storage();
    let store = FavoriteStore::load(storage).unwrap();

    let favorite = store.add("old name", "old query").unwrap();
    let updated = store
        .update(&favorite.id, Some("new name".to_string()), None)
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "new name");
    assert_eq!(updated.query, "old query");
    assert!(updated.updated_at >= favorite.updated_at);

    let updated = store
        .update(&favorite.id, None, Some("new query".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "new name");
    assert_eq!(updated.query, "new query");
}

#[test]
fn test_update_missing_id_is_none() {
    let (storage, _tmp) = temp_storage();
    let store = FavoriteStore::load(storage).unwrap();

    let result = store
        .update(&"01ARZ3NDEKTSV4RRFFQ69G5FAV".into(), Some("x".to_string()), None)
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_persists_across_reload() {
    let (storage, _tmp) = temp_storage();

    let store = FavoriteStore::load(storage.clone()).unwrap();
    let favorite = store.add("kept", "rust lang:en").unwrap();
    drop(store);

    let reloaded = FavoriteStore::load(storage).unwrap();
    assert_eq!(reloaded.list(), vec![favorite]);
}
