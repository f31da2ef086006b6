#![cfg(feature = "json-store")]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonFileStore`.

use std::collections::BTreeMap;
use std::sync::Arc;

use brand_hub_app::adapters::JsonFileStore;
use brand_hub_app::{AppStateBuilder, NoopStartupHooks};
use brand_hub_core::error::CoreError;
use brand_hub_core::persistence::{LoadSource, BRANDS_KEY, THEME_KEY};
use brand_hub_core::traits::KeyValueStore;
use brand_hub_core::types::{BrandInput, BrandPatch, Theme};

fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("data").join("store.json"))
}

fn read_entries(store: &JsonFileStore) -> BTreeMap<String, String> {
    let content = std::fs::read_to_string(store.path()).expect("store file should exist");
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    assert_eq!(store.get(BRANDS_KEY).await.unwrap(), None);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn set_creates_directories_and_file() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);

    store.set(THEME_KEY, "light").await.unwrap();
    assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));

    let entries = read_entries(&store);
    assert_eq!(entries.get(THEME_KEY).map(String::as_str), Some("light"));
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[tokio::test]
async fn remove_deletes_key() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    store.set("a", "1").await.unwrap();
    store.set("b", "2").await.unwrap();
    store.remove("a").await.unwrap();

    let entries = read_entries(&store);
    assert!(!entries.contains_key("a"));
    assert_eq!(entries.get("b").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn reopening_sees_previous_writes() {
    let tmp = tempfile::tempdir().unwrap();
    store_in(&tmp).set("k", "v").await.unwrap();

    let reopened = store_in(&tmp);
    assert_eq!(reopened.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn corrupt_file_is_reported_then_reset_on_write() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{ definitely not json").unwrap();

    let err = store.get(BRANDS_KEY).await.unwrap_err();
    assert!(matches!(err, CoreError::SerializationError(_)));

    store.set(THEME_KEY, "dark").await.unwrap();
    assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("dark"));
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    let file = std::fs::File::create(store.path()).unwrap();
    file.set_len(10 * 1024 * 1024 + 1).unwrap();

    let err = store.get(BRANDS_KEY).await.unwrap_err();
    assert!(matches!(err, CoreError::StorageError(_)));
}

#[tokio::test]
async fn app_state_round_trip_through_file() {
    let tmp = tempfile::tempdir().unwrap();

    let first = AppStateBuilder::new()
        .store(Arc::new(store_in(&tmp)))
        .build();
    first.run_startup(&NoopStartupHooks).await;
    first
        .brand_service
        .create_brand(BrandInput::new("Acme Rocket"))
        .await
        .unwrap();
    first
        .brand_service
        .update_brand(
            "nextech",
            BrandPatch {
                description: Some("Rebranded".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    first.preference_service.set_theme(Theme::Light).await;
    let before = first.brand_service.list().await;

    let second = AppStateBuilder::new()
        .store(Arc::new(store_in(&tmp)))
        .build();
    let report = second.run_startup(&NoopStartupHooks).await;
    assert_eq!(report.brands, LoadSource::Stored);
    assert_eq!(second.brand_service.list().await, before);
    assert_eq!(second.preference_service.theme().await, Theme::Light);

    // theme is kept as a bare string, brands as a JSON array
    let entries = read_entries(&store_in(&tmp));
    assert_eq!(entries.get(THEME_KEY).map(String::as_str), Some("light"));
    assert!(entries[BRANDS_KEY].starts_with('['));
}
