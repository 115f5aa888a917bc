//! Shared library for `Gradebook`
//! Contains the record model and roster operations used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
