use serde::de::DeserializeOwned;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a UTF-8 encoded schema or request file from disk.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

/// Reads and deserializes a JSON file, such as a request body or a batch of
/// them.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let file_path = file_path.as_ref();
    let content = read_content(file_path)?;
    serde_json::from_str(content.as_str())
        .map_err(|err| ReadContentError::JsonDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("File at {file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read file at {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("File at {file_path:?} does not hold the expected JSON: {err}")]
    JsonDecodeError {
        file_path: PathBuf,
        err: serde_json::Error,
    },

    #[error("Path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    /// The file that could not be read.
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
                | Self::FileReadError { file_path, .. }
                | Self::JsonDecodeError { file_path, .. }
                | Self::PathIsNotAFile(file_path) =>
                file_path.as_path(),
        }
    }
}
// The wrapped io and serde errors are not comparable themselves, so errors
// compare by variant, path and message.
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.file_path() == other.file_path()
            && self.to_string() == other.to_string()
    }
}
