//! Shared record types for the world model.
//!
//! # Invariants
//! - Records carry data only. Nothing here parses a rule condition or
//!   executes a rule action.

mod types;

pub use types::{AttributeValue, Attributes, Entity, Rule};

pub fn crate_info() -> &'static str {
    "constitution-common v0.1.0"
}
