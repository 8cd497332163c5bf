use crate::tests::temp_storage;

#[test]
fn test_set_get_roundtrip() {
    let (storage, _tmp) = temp_storage();

    assert!(!storage.exists("favorites.json"));
    storage.set("favorites.json", b"[]").unwrap();
    assert!(storage.exists("favorites.json"));
    assert_eq!(storage.get("favorites.json").unwrap(), b"[]");
}

#[test]
fn test_set_overwrites_atomically() {
    let (storage, tmp) = temp_storage();

    storage.set("key", b"one").unwrap();
    storage.set("key", b"two").unwrap();
    assert_eq!(storage.get("key").unwrap(), b"two");

    // no temp files left behind after the rename commit
    let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy() != "key")
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_delete_and_list() {
    let (storage, _tmp) = temp_storage();

    storage.set("a", b"1").unwrap();
    storage.set("b", b"2").unwrap();

    let mut keys = storage.list();
    keys.sort();
    assert_eq!(keys, vec!["a", "b"]);

    storage.delete("a").unwrap();
    assert!(!storage.exists("a"));
    assert_eq!(storage.list(), vec!["b"]);
}

#[test]
fn test_get_missing_key_errors() {
    let (storage, _tmp) = temp_storage();
    assert!(storage.get("nope").is_err());
}
