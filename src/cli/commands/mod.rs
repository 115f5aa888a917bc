//! CLI command handlers for `Gradebook`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod menu;
