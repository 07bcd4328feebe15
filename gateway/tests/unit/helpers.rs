//! Shared test helpers: in-memory ports and output constructors.

#![allow(dead_code)]

use std::path::Path;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use agentdesk_gateway::application::ports::{CommandRunner, DocumentStore, ProjectSource};
use agentdesk_gateway::domain::{
    CliError, Invocation, ProjectSummary, StorageLayout, StoreError,
};
use async_trait::async_trait;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn output(code: i32, stdout: &[u8], stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: stdout.to_vec(),
        stderr: stderr.to_vec(),
    }
}

/// Layout rooted in a temp directory.
pub fn temp_layout(root: &Path) -> StorageLayout {
    StorageLayout::new(&root.join("data"), &root.join("projects"))
}

// ── Mock: in-memory document store ───────────────────────────────────────────

/// Holds the document in memory and counts saves.
pub struct MemoryStore<T> {
    doc: Mutex<T>,
    saves: AtomicUsize,
    fail_saves: bool,
}

impl<T: Default> MemoryStore<T> {
    pub fn new(initial: T) -> Self {
        Self {
            doc: Mutex::new(initial),
            saves: AtomicUsize::new(0),
            fail_saves: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(T::default())
    }

    /// Every save fails with a storage error; loads still succeed.
    pub fn failing_saves(initial: T) -> Self {
        Self {
            fail_saves: true,
            ..Self::new(initial)
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<T: Clone> MemoryStore<T> {
    pub fn snapshot(&self) -> T {
        self.doc.lock().expect("lock").clone()
    }
}

#[async_trait]
impl<T> DocumentStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<T, StoreError> {
        Ok(self.doc.lock().expect("lock").clone())
    }

    async fn save(&self, doc: &T) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Task("disk full".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.doc.lock().expect("lock") = doc.clone();
        Ok(())
    }
}

// ── Mock: store whose document is always corrupt ─────────────────────────────

pub struct CorruptStore;

#[async_trait]
impl<T: Send + Sync + 'static> DocumentStore<T> for CorruptStore {
    async fn load(&self) -> Result<T, StoreError> {
        let source = serde_json::from_str::<serde_json::Value>("[{").expect_err("invalid json");
        Err(StoreError::Parse {
            path: "corrupt.json".into(),
            source,
        })
    }

    async fn save(&self, _: &T) -> Result<(), StoreError> {
        panic!("save must not be reached after a failed load");
    }
}

// ── Mock: fixed project source ───────────────────────────────────────────────

pub struct FixedProjects(pub Vec<ProjectSummary>);

#[async_trait]
impl ProjectSource for FixedProjects {
    async fn scan(&self) -> Result<Vec<ProjectSummary>, StoreError> {
        Ok(self.0.clone())
    }
}

// ── Mock: recording command runner ───────────────────────────────────────────

/// Records every invocation and replies with a canned result.
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    reply: fn(&Invocation) -> Result<Output, CliError>,
}

impl RecordingRunner {
    pub fn new(reply: fn(&Invocation) -> Result<Output, CliError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
        }
    }

    /// Echoes the prompt on stdout and exits 0.
    pub fn echo() -> Self {
        Self::new(|inv| Ok(output(0, inv.args[1].as_bytes(), b"")))
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Output, CliError> {
        self.calls.lock().expect("lock").push(invocation.clone());
        (self.reply)(invocation)
    }
}
