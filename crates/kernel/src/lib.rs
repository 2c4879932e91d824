//! World Kernel: the in-memory world model loaded from a JSON document.
//!
//! # Invariants
//! - Entity names are unique within a model; a later record with the same
//!   name replaces the earlier one.
//! - Rules keep file order and may repeat.
//! - A load either populates the whole model or leaves it empty.

mod error;
pub mod world;

pub use error::LoadError;
pub use world::WorldModel;

pub fn crate_info() -> &'static str {
    "constitution-kernel v0.1.0"
}
