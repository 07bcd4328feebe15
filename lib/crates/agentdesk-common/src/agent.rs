//! Agent records: a named system prompt bound to a model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind};

/// Name given to an agent created without one.
pub const DEFAULT_AGENT_NAME: &str = "New Agent";

/// Model assigned to an agent created without one.
pub const DEFAULT_AGENT_MODEL: &str = "claude-opus";

/// A stored agent definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub system_prompt: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial agent payload for create and update.
///
/// `id` and `createdAt` are honoured on create only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Agent {
    type Patch = AgentPatch;

    const KIND: RecordKind = RecordKind::Agent;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn requested_id(patch: &AgentPatch) -> Option<&str> {
        patch.id.as_deref()
    }

    fn from_patch(patch: AgentPatch, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: patch.name.unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string()),
            system_prompt: patch.system_prompt.unwrap_or_default(),
            model: patch
                .model
                .unwrap_or_else(|| DEFAULT_AGENT_MODEL.to_string()),
            created_at: patch.created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    fn merge(&mut self, patch: AgentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(system_prompt) = patch.system_prompt {
            self.system_prompt = system_prompt;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
