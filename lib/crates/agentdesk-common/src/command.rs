//! Slash-command records: a named script with a description.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind};

/// Name given to a command created without one.
pub const DEFAULT_COMMAND_NAME: &str = "New Command";

/// A stored slash command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlashCommand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub script: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial slash-command payload for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for SlashCommand {
    type Patch = CommandPatch;

    const KIND: RecordKind = RecordKind::Command;

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

    fn requested_id(patch: &CommandPatch) -> Option<&str> {
        patch.id.as_deref()
    }

    fn from_patch(patch: CommandPatch, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: patch
                .name
                .unwrap_or_else(|| DEFAULT_COMMAND_NAME.to_string()),
            description: patch.description.unwrap_or_default(),
            script: patch.script.unwrap_or_default(),
            created_at: patch.created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    fn merge(&mut self, patch: CommandPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(script) = patch.script {
            self.script = script;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
