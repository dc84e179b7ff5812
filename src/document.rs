//! Whole-file load and store for the document buffer.
//!
//! Both directions use UTF-8. The handles live only inside the `std::fs`
//! call, so they are released on success and on error alike.

use std::fs;
use std::path::Path;

use crate::error::{SwapError, SwapResult};

/// Read the whole input document.
pub fn load(path: &Path) -> SwapResult<String> {
    let content = fs::read_to_string(path).map_err(|source| SwapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Loaded document");
    Ok(content)
}

/// Write the buffer to `path`, replacing whatever is there.
pub fn write(path: &Path, content: &str) -> SwapResult<()> {
    fs::write(path, content).map_err(|source| SwapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("index.html")).unwrap_err();
        assert!(matches!(err, SwapError::Read { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");
        fs::write(&path, [0x3c, 0x68, 0xff, 0xfe]).unwrap();

        match load(&path).unwrap_err() {
            SwapError::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index_clean.html");
        fs::write(&path, "stale content that is longer").unwrap();

        write(&path, "<html>🦎</html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>🦎</html>");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("out.html");
        let err = write(&path, "x").unwrap_err();
        assert!(matches!(err, SwapError::Write { .. }));
        assert_eq!(err.path(), path.as_path());
    }
}
