use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Append-only destination for newline-delimited JSON records.
///
/// Implementations must write each line whole: concurrent callers may never
/// observe interleaved fragments.
pub trait RecordSink: Send + Sync {
    /// Append `line` followed by a newline. `line` must not contain `\n`.
    fn append(&self, line: &str) -> Result<(), SinkError>;
}

/// Error enumeration for sink failures.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to open log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to append to log: {0}")]
    Write(#[from] std::io::Error),
    #[error("log writer lock poisoned")]
    Poisoned,
}

/// File-backed sink opened in append mode.
#[derive(Debug)]
pub struct JsonlFileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlFileSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for JsonlFileSink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        let mut buffer = String::with_capacity(line.len() + 1);
        buffer.push_str(line);
        buffer.push('\n');

        let mut file = self.file.lock().map_err(|_| SinkError::Poisoned)?;
        file.write_all(buffer.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Lines appended so far. A poisoned lock still yields what was stored.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemorySink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        let mut guard = self.lines.lock().map_err(|_| SinkError::Poisoned)?;
        guard.push(line.to_string());
        Ok(())
    }
}
