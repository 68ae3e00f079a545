use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PhysioLogError;

/// Whole log file loaded into memory as newline-split text lines.
///
/// The scanner writes ASCII-ish content; bytes are decoded lossily so a
/// stray non-UTF-8 byte in a comment field cannot abort the parse.
#[derive(Clone, Debug)]
pub struct LogFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl LogFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, PhysioLogError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)?;
        let lines = bytes
            .split(|&b| b == b'\n')
            .map(|raw| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                String::from_utf8_lossy(raw).into_owned()
            })
            .collect();
        Ok(Self { path, lines })
    }

    /// In-memory constructor, used by tests and callers that already hold
    /// the text.
    pub fn from_lines(label: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: label.into(),
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_label(&self) -> String {
        self.path.display().to_string()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_splits_lines_and_strips_carriage_returns() {
        let path = std::env::temp_dir().join("physiolog_read_test.puls");
        std::fs::write(&path, b"Physiolog_START\r\nSampling_Rate : 50.0\n1 2 3").unwrap();
        let file = LogFile::read(&path).unwrap();
        assert_eq!(file.line(0), Some("Physiolog_START"));
        assert_eq!(file.line(1), Some("Sampling_Rate : 50.0"));
        assert_eq!(file.line(2), Some("1 2 3"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn from_lines_keeps_order_and_label() {
        let file = LogFile::from_lines("x.resp", vec!["a".into(), "b".into()]);
        assert_eq!(file.lines().len(), 2);
        assert_eq!(file.line(1), Some("b"));
        assert_eq!(file.display_label(), "x.resp");
    }
}
