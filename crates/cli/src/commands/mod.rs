//! CLI command implementations

mod inclusions;

pub use inclusions::{UpdateSummary, cmd_add_inclusions};
