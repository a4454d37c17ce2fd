// tests/session_store.rs
//
// Session state on disk: tolerant load, per-field save, adopt.
//
use std::collections::BTreeMap;
use std::fs;

use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use sm_scrape::Error;
use sm_scrape::data::Credentials;
use sm_scrape::store::SessionStore;

const ROOT: &str = "https://my.schedulemaster.com/";

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_or_garbage_file_means_no_credentials() {
    let dir = tempfile::tempdir().unwrap();

    let missing = SessionStore::load(&dir.path().join("nope.json"));
    assert!(missing.credentials().is_none());

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{not json").unwrap();
    assert!(SessionStore::load(&garbage).credentials().is_none());

    let array = dir.path().join("array.json");
    fs::write(&array, "[1,2]").unwrap();
    assert!(SessionStore::load(&array).credentials().is_none());
}

#[test]
fn adopt_saves_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut store = SessionStore::load(&path);
    store.adopt("12117", "998877").unwrap();

    let back = SessionStore::load(&path);
    assert_eq!(
        back.credentials(),
        Some(&Credentials { userid: "12117".into(), sessionid: "998877".into() })
    );
    assert_eq!(read_json(&path), json!({"userid": "12117", "sessionid": "998877"}));
}

#[test]
fn numeric_ids_and_unknown_keys_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"userid": 12117, "sessionid": 42, "state_path": "/x", "n": [1]}"#).unwrap();

    let mut store = SessionStore::load(&path);
    assert_eq!(store.credentials().unwrap().userid, "12117");
    assert_eq!(store.extra().get("state_path"), Some(&json!("/x")));

    store.adopt("7", "8").unwrap();
    let saved = read_json(&path);
    assert_eq!(saved["userid"], json!("7"));
    assert_eq!(saved["n"], json!([1]));
    assert_eq!(saved["state_path"], json!("/x"));
}

enum Field {
    Fine(u32),
    Broken,
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Fine(n) => s.serialize_u32(*n),
            Field::Broken => Err(serde::ser::Error::custom("not serializable")),
        }
    }
}

#[test]
fn unserializable_fields_are_dropped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut store = SessionStore::load(&path);
    store.adopt("1", "2").unwrap();

    let mut extra = BTreeMap::new();
    extra.insert("good".to_string(), Field::Fine(5));
    extra.insert("bad".to_string(), Field::Broken);
    store.save(&extra).unwrap();

    let saved = read_json(&path);
    assert_eq!(saved["good"], json!(5));
    assert!(saved.get("bad").is_none());
    assert_eq!(saved["sessionid"], json!("2"));
}

#[test]
fn adopt_from_url_lowercases_and_requires_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut store = SessionStore::load(&path);

    store
        .adopt_from_url("https://my.schedulemaster.com/Default.aspx?USERID=555&SESSION=ABC", ROOT)
        .unwrap();
    assert_eq!(store.credentials().unwrap().sessionid, "abc");

    let err = store.adopt_from_url("/Default.aspx?USERID=555", ROOT).unwrap_err();
    assert!(matches!(err, Error::MalformedRedirect(_)));
    // failed adopt leaves the previous session in place
    assert_eq!(SessionStore::load(&path).credentials().unwrap().userid, "555");
}

#[test]
fn lone_userid_is_kept_through_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"userid":"7","other":1}"#).unwrap();

    let store = SessionStore::load(&path);
    assert!(store.credentials().is_none());
    assert_eq!(store.extra()["userid"], json!("7"));

    store.save::<Value>(&BTreeMap::new()).unwrap();
    assert_eq!(read_json(&path), json!({"userid": "7", "other": 1}));
}
