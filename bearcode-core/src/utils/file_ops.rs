//! Text file access for the command surface.
//!
//! Failures come back as [`FileError`] values carrying the path and the I/O cause, and are
//! logged at warn level. Nothing here panics.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Error reading file: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error writing file: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FileError::Read { source, .. } | FileError::Write { source, .. } => source.kind(),
        }
    }
}

/// Read a UTF-8 text file
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to read file");
        FileError::Read {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Write `content` to `path`, replacing any existing file
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to write file");
        FileError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
