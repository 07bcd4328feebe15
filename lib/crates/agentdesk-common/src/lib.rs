pub mod agent;
pub mod command;
pub mod config;
pub mod envelope;
pub mod record;

pub use agent::{Agent, AgentPatch};
pub use command::{CommandPatch, SlashCommand};
pub use config::{ConfigError, GatewayConfig};
pub use envelope::ApiResponse;
pub use record::{Record, RecordIdError, RecordKind, generate_record_id, validate_record_id};
