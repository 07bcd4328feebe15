//! Tests for `RecordService`: CRUD semantics, immutable identity,
//! timestamps, and error separation between logical and storage failures.

#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use agentdesk_common::{Agent, AgentPatch, CommandPatch, RecordKind, SlashCommand};
use agentdesk_gateway::application::services::RecordService;
use agentdesk_gateway::domain::{RecordError, StoreError};
use agentdesk_gateway::infra::JsonDocumentStore;
use tempfile::TempDir;

use crate::helpers::{CorruptStore, MemoryStore};

fn agents_in_memory() -> (Arc<MemoryStore<Vec<Agent>>>, RecordService<Agent>) {
    let store: Arc<MemoryStore<Vec<Agent>>> = Arc::new(MemoryStore::empty());
    let service = RecordService::<Agent>::new(store.clone());
    (store, service)
}

fn named(name: &str) -> AgentPatch {
    AgentPatch {
        name: Some(name.to_string()),
        ..AgentPatch::default()
    }
}

/// Sleep long enough for `Utc::now()` to move.
async fn tick() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

// ── create ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_empty_agent_fills_defaults() {
    let (_, service) = agents_in_memory();

    let agent = service.create(AgentPatch::default()).await.expect("create");

    assert!(!agent.id.is_empty());
    assert_eq!(agent.name, "New Agent");
    assert_eq!(agent.model, "claude-opus");
    assert_eq!(agent.system_prompt, "");
    assert_eq!(agent.created_at, agent.updated_at);
}

#[tokio::test]
async fn create_empty_command_fills_defaults() {
    let store = Arc::new(MemoryStore::<Vec<SlashCommand>>::empty());
    let service = RecordService::<SlashCommand>::new(store);

    let cmd = service.create(CommandPatch::default()).await.expect("create");

    assert!(!cmd.id.is_empty());
    assert_eq!(cmd.name, "New Command");
    assert_eq!(cmd.description, "");
    assert_eq!(cmd.script, "");
    assert_eq!(cmd.created_at, cmd.updated_at);
}

#[tokio::test]
async fn create_appends_in_insertion_order_and_persists_once_each() {
    let (store, service) = agents_in_memory();

    for name in ["first", "second", "third"] {
        service.create(named(name)).await.expect("create");
    }

    let names: Vec<_> = service
        .list()
        .await
        .expect("list")
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(store.save_count(), 3);
}

#[tokio::test]
async fn create_keeps_supplied_id() {
    let (_, service) = agents_in_memory();

    let agent = service
        .create(AgentPatch {
            id: Some("reviewer".to_string()),
            ..AgentPatch::default()
        })
        .await
        .expect("create");

    assert_eq!(agent.id, "reviewer");
}

#[tokio::test]
async fn create_with_taken_id_is_conflict_and_does_not_write() {
    let (store, service) = agents_in_memory();
    let first = service.create(named("a")).await.expect("create");

    let err = service
        .create(AgentPatch {
            id: Some(first.id.clone()),
            ..named("b")
        })
        .await
        .expect_err("duplicate id must fail");

    assert!(
        matches!(err, RecordError::Conflict { kind: RecordKind::Agent, ref id } if *id == first.id),
        "got {err:?}"
    );
    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn create_with_blank_id_is_validation_error() {
    let (store, service) = agents_in_memory();

    let err = service
        .create(AgentPatch {
            id: Some("  ".to_string()),
            ..AgentPatch::default()
        })
        .await
        .expect_err("blank id must fail");

    assert!(matches!(err, RecordError::Validation { .. }), "got {err:?}");
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn create_propagates_storage_failure() {
    let service: RecordService<Agent> =
        RecordService::new(Arc::new(MemoryStore::failing_saves(Vec::<Agent>::new())));

    let err = service
        .create(AgentPatch::default())
        .await
        .expect_err("save failure must surface");

    assert!(
        matches!(err, RecordError::Storage(StoreError::Task(_))),
        "got {err:?}"
    );
}

// ── get / list ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_none_for_unknown_id() {
    let (_, service) = agents_in_memory();
    service.create(named("a")).await.expect("create");

    assert!(service.get("nope").await.expect("get").is_none());
}

#[tokio::test]
async fn get_finds_record_by_id() {
    let (_, service) = agents_in_memory();
    let created = service.create(named("a")).await.expect("create");

    let fetched = service.get(&created.id).await.expect("get");
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn list_on_corrupt_document_is_storage_error() {
    let service: RecordService<Agent> = RecordService::new(Arc::new(CorruptStore));

    let err = service.list().await.expect_err("corrupt document");
    assert!(
        matches!(err, RecordError::Storage(StoreError::Parse { .. })),
        "got {err:?}"
    );
}

#[tokio::test]
async fn mutation_on_corrupt_document_never_saves() {
    let service: RecordService<Agent> = RecordService::new(Arc::new(CorruptStore));

    let err = service
        .create(AgentPatch::default())
        .await
        .expect_err("corrupt document");
    assert!(matches!(err, RecordError::Storage(_)), "got {err:?}");
}

// ── update ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_cannot_change_id_or_created_at() {
    let (store, service) = agents_in_memory();
    let created = service.create(named("a")).await.expect("create");

    let updated = service
        .update(
            &created.id,
            AgentPatch {
                id: Some("other".to_string()),
                name: Some("X".to_string()),
                created_at: Some(created.created_at - chrono::Duration::days(1)),
                ..AgentPatch::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(store.snapshot(), vec![updated]);
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let (_, service) = agents_in_memory();
    let created = service
        .create(AgentPatch {
            name: Some("Bot".to_string()),
            system_prompt: Some("Be brief.".to_string()),
            ..AgentPatch::default()
        })
        .await
        .expect("create");

    let updated = service
        .update(
            &created.id,
            AgentPatch {
                model: Some("claude-sonnet".to_string()),
                ..AgentPatch::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "Bot");
    assert_eq!(updated.system_prompt, "Be brief.");
    assert_eq!(updated.model, "claude-sonnet");
}

#[tokio::test]
async fn update_refreshes_updated_at() {
    let (_, service) = agents_in_memory();
    let created = service.create(named("a")).await.expect("create");
    tick().await;

    let updated = service
        .update(&created.id, named("b"))
        .await
        .expect("update");

    assert!(updated.updated_at >= updated.created_at);
    assert_ne!(updated.updated_at, created.updated_at);
}

#[tokio::test]
async fn empty_update_still_bumps_updated_at() {
    let (_, service) = agents_in_memory();
    let created = service.create(named("a")).await.expect("create");
    tick().await;

    let updated = service
        .update(&created.id, AgentPatch::default())
        .await
        .expect("update");

    assert_eq!(updated.name, created.name);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (store, service) = agents_in_memory();

    let err = service
        .update("missing", named("x"))
        .await
        .expect_err("missing record");

    assert!(
        matches!(err, RecordError::NotFound(RecordKind::Agent)),
        "got {err:?}"
    );
    assert_eq!(err.to_string(), "Agent not found");
    assert_eq!(store.save_count(), 0);
}

// ── delete ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_unknown_id_is_not_found_and_leaves_collection_unchanged() {
    let (store, service) = agents_in_memory();
    service.create(named("a")).await.expect("create");
    service.create(named("b")).await.expect("create");
    let before = store.snapshot();

    let err = service.delete("missing").await.expect_err("missing record");

    assert!(matches!(err, RecordError::NotFound(_)), "got {err:?}");
    assert_eq!(store.snapshot(), before);
    assert_eq!(store.save_count(), 2);
}

#[tokio::test]
async fn delete_removes_only_the_matching_record() {
    let (store, service) = agents_in_memory();
    let a = service.create(named("a")).await.expect("create");
    let b = service.create(named("b")).await.expect("create");

    service.delete(&a.id).await.expect("delete");

    assert_eq!(store.snapshot(), vec![b]);
}

// ── against real files ────────────────────────────────────────────────────────

#[tokio::test]
async fn create_list_delete_round_trip_on_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("agents.json");
    let service: RecordService<Agent> =
        RecordService::new(Arc::new(JsonDocumentStore::<Vec<Agent>>::new(&path)));

    let created = service
        .create(AgentPatch {
            name: Some("Bot".to_string()),
            model: Some("claude-opus".to_string()),
            ..AgentPatch::default()
        })
        .await
        .expect("create");

    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Bot");
    assert_eq!(created.system_prompt, "");
    assert_eq!(created.model, "claude-opus");
    assert_eq!(created.created_at, created.updated_at);

    assert_eq!(service.list().await.expect("list"), vec![created.clone()]);

    // The file itself is a plain camelCase JSON array.
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(raw[0]["id"], created.id.as_str());
    assert_eq!(raw[0]["systemPrompt"], "");

    service.delete(&created.id).await.expect("delete");
    assert!(service.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn list_without_file_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let service: RecordService<SlashCommand> = RecordService::new(Arc::new(
        JsonDocumentStore::<Vec<SlashCommand>>::new(dir.path().join("commands.json")),
    ));

    assert!(service.list().await.expect("list").is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_kept() {
    let dir = TempDir::new().expect("temp dir");
    let service: Arc<RecordService<Agent>> = Arc::new(RecordService::new(Arc::new(
        JsonDocumentStore::<Vec<Agent>>::new(dir.path().join("agents.json")),
    )));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.create(named(&format!("agent-{i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.expect("join").expect("create");
    }

    assert_eq!(service.list().await.expect("list").len(), 20);
}
