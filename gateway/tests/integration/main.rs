//! Integration tests for the agentdesk binary
//!
//! These tests spawn the actual binary against temp data directories.
