//! Core module: record model, roster operations, reporting, and export

pub mod config;
pub mod error;
pub mod models;
pub mod records_export;
pub mod report;
pub mod roster;

pub use error::{ErrorKind, RosterError};
pub use roster::Roster;

/// Returns the current version of the `Gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
