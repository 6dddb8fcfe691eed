//! Narrative input for the CLI.

use intake_common::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Read a narrative from `path`, or from stdin when no path (or `-`) is given.
///
/// The bytes must be valid UTF-8; anything else is rejected rather than
/// lossily converted.
pub fn read_narrative(path: Option<&Path>) -> Result<String> {
    let file = path.filter(|p| *p != Path::new("-"));
    let bytes = match file {
        Some(p) => std::fs::read(p)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };

    tracing::debug!(bytes = bytes.len(), from_stdin = file.is_none(), "read narrative");
    String::from_utf8(bytes).map_err(|_| Error::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("narrative.txt");
        std::fs::write(&path, "Suma datorată este 500 lei.").unwrap();
        assert_eq!(
            read_narrative(Some(&path)).unwrap(),
            "Suma datorată este 500 lei."
        );
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x53, 0x75, 0x6d, 0xe3, 0xff]).unwrap();
        assert!(matches!(read_narrative(Some(&path)), Err(Error::InvalidInput)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_narrative(Some(&dir.path().join("absent.txt"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
