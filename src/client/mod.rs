use crate::models::StatusSnapshot;
use serde_json::Value;
use thiserror::Error;

pub mod json_file;

pub use json_file::JsonFileManager;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed status document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manager reported an empty status list")]
    EmptyStatus,
}

/// Read-only view of a workflow manager.
///
/// Both queries may fail independently; callers treat a failure as missing data.
pub trait Manager {
    fn status(&self) -> Result<StatusSnapshot, ManagerError>;

    /// Raw application payload, `None` when the application publishes nothing.
    fn application_info(&self) -> Result<Option<Value>, ManagerError>;
}
