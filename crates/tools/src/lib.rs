//! Developer Tooling: read-only inspection of a loaded world model.
//!
//! # Invariants
//! - Tools never mutate the model they inspect.

mod inspector;

pub use inspector::{EntityInfo, ModelInspector, ModelSummary, RuleInfo};

pub fn crate_info() -> &'static str {
    "constitution-tools v0.1.0"
}
