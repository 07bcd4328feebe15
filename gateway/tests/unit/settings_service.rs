//! Tests for `SettingsService`: replace, shallow merge and key removal.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use agentdesk_gateway::application::services::SettingsService;
use agentdesk_gateway::domain::Settings;
use serde_json::json;

use crate::helpers::MemoryStore;

fn settings(value: serde_json::Value) -> Settings {
    serde_json::from_value(value).expect("object")
}

fn service_with(initial: Settings) -> (Arc<MemoryStore<Settings>>, SettingsService) {
    let store = Arc::new(MemoryStore::new(initial));
    let service = SettingsService::new(store.clone());
    (store, service)
}

#[tokio::test]
async fn get_returns_stored_document() {
    let (_, service) = service_with(settings(json!({ "theme": "dark" })));

    let current = service.get().await.expect("get");
    assert_eq!(current["theme"], "dark");
}

#[tokio::test]
async fn replace_overwrites_everything() {
    let (store, service) = service_with(settings(json!({ "theme": "dark", "fontSize": 12 })));

    let saved = service
        .replace(settings(json!({ "editor": "vim" })))
        .await
        .expect("replace");

    assert_eq!(saved, settings(json!({ "editor": "vim" })));
    assert_eq!(store.snapshot(), saved);
}

#[tokio::test]
async fn merge_overlays_keys_and_null_removes() {
    let (store, service) = service_with(settings(json!({
        "theme": "dark",
        "fontSize": 12,
        "nested": { "a": 1 }
    })));

    let merged = service
        .merge(settings(json!({
            "fontSize": 14,
            "theme": null,
            "nested": { "b": 2 }
        })))
        .await
        .expect("merge");

    // Shallow: the nested object is replaced, not combined.
    assert_eq!(
        merged,
        settings(json!({ "fontSize": 14, "nested": { "b": 2 } }))
    );
    assert_eq!(store.snapshot(), merged);
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn merge_storage_failure_surfaces() {
    let store = Arc::new(MemoryStore::failing_saves(Settings::new()));
    let service = SettingsService::new(store);

    service
        .merge(settings(json!({ "theme": "light" })))
        .await
        .expect_err("save failure must surface");
}
