use crate::client::{Manager, ManagerError};
use crate::models::StatusSnapshot;
use crate::utils::file;
use serde_json::Value;
use std::path::PathBuf;

/// Manager whose status is published as JSON documents on disk.
///
/// The status document is either a single object or the manager's list form, in which
/// case the first entry is used. Both files are re-read on every query.
#[derive(Debug, Clone)]
pub struct JsonFileManager {
    status_path: PathBuf,
    application_path: Option<PathBuf>,
}

impl JsonFileManager {
    pub fn new(status_path: impl Into<PathBuf>, application_path: Option<PathBuf>) -> Self {
        Self {
            status_path: status_path.into(),
            application_path,
        }
    }
}

impl Manager for JsonFileManager {
    fn status(&self) -> Result<StatusSnapshot, ManagerError> {
        let contents = file::read_to_string(&self.status_path)?;
        let document: Value = serde_json::from_str(&contents)?;
        let entry = match document {
            Value::Array(entries) => entries.into_iter().next().ok_or(ManagerError::EmptyStatus)?,
            other => other,
        };
        Ok(serde_json::from_value(entry)?)
    }

    fn application_info(&self) -> Result<Option<Value>, ManagerError> {
        let Some(path) = &self.application_path else {
            return Ok(None);
        };
        let contents = file::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quantity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_status_from_object() {
        let status = json_file(r#"{"port": 9123, "workers_connected": 2}"#);
        let manager = JsonFileManager::new(status.path(), None);

        let snapshot = manager.status().unwrap();
        assert_eq!(snapshot.port, Quantity::Numeric(9123.0));
        assert_eq!(snapshot.workers_connected, Quantity::Numeric(2.0));
    }

    #[test]
    fn test_status_from_list_uses_first_entry() {
        let status = json_file(r#"[{"port": 1}, {"port": 2}]"#);
        let manager = JsonFileManager::new(status.path(), None);
        assert_eq!(manager.status().unwrap().port, Quantity::Numeric(1.0));
    }

    #[test]
    fn test_status_errors() {
        let empty = json_file("[]");
        assert!(matches!(
            JsonFileManager::new(empty.path(), None).status(),
            Err(ManagerError::EmptyStatus)
        ));

        let garbage = json_file("not json");
        assert!(matches!(
            JsonFileManager::new(garbage.path(), None).status(),
            Err(ManagerError::Parse(_))
        ));

        let missing = JsonFileManager::new("/nonexistent/vine-status.json", None);
        assert!(matches!(missing.status(), Err(ManagerError::Io(_))));
    }

    #[test]
    fn test_application_info() {
        let status = json_file("{}");
        let app = json_file(r#"{"application_info": {"values": {"files": 3}}}"#);

        let without = JsonFileManager::new(status.path(), None);
        assert!(without.application_info().unwrap().is_none());

        let with = JsonFileManager::new(status.path(), Some(app.path().to_path_buf()));
        let payload = with.application_info().unwrap().unwrap();
        assert_eq!(payload["application_info"]["values"]["files"], 3);
    }
}
