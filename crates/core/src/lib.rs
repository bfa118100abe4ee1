pub mod config;
pub mod document;
pub mod error;
pub mod merge;

pub use config::{DESIRED_INCLUSIONS, SCAN_INCLUSIONS_KEY, SETTINGS_DIR, SETTINGS_FILE, UpdaterConfig};
pub use document::Document;
pub use error::{Error, Result};
pub use merge::{MergeOutcome, Membership, merge_inclusions};
