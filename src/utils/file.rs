use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub fn read_to_string(path: &Path) -> io::Result<String> {
    let start = Instant::now();
    let contents = fs::read_to_string(path)?;
    debug!(
        "read {} bytes from {} in {} ms",
        contents.len(),
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(contents)
}

/// Replaces the file contents through a sibling temporary file, so readers never
/// observe a half written page.
pub fn replace(path: &Path, contents: &str) -> io::Result<()> {
    let start = Instant::now();
    let staging = staging_path(path);
    fs::write(&staging, contents)?;
    fs::rename(&staging, path)?;
    debug!(
        "replaced {} in {} ms",
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_replace_overwrites_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");

        replace(&path, "first").unwrap();
        replace(&path, "second").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "second");
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_to_string(&dir.path().join("missing.json")).is_err());
    }
}
