//! CLI command handlers for `sessionlog`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod write;
