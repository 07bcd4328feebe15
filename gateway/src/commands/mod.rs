//! Command handlers for the `agentdesk` binary.

pub mod paths;
pub mod records;
pub mod serve;
