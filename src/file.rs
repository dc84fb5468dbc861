use std::fs;
use std::io;
use std::path::Path;

/// Content of a file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path the file was read from, as given
    pub path: String,
    /// File content as valid UTF-8 string
    pub content: String,
    /// Byte length of the content
    pub len: usize,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// The file could not be opened, read, or decoded as text
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid UTF-8 in file: {0}")]
    InvalidUtf8(String),
}

impl FileError {
    /// Path of the file that failed
    pub fn path(&self) -> &str {
        match self {
            FileError::NotFound(p) | FileError::InvalidUtf8(p) => p,
            FileError::Io { path, .. } => path,
        }
    }
}

/// Read a file from disk with UTF-8 validation
///
/// The whole file is read in one call; the handle is closed before this
/// returns, on success and on failure alike.
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// * `Ok(FileContent)` - File content with metadata
/// * `Err(FileError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FileError> {
    let path_ref = path.as_ref();
    let display_path = path_ref.display().to_string();

    let bytes = fs::read(path_ref).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(display_path.clone()),
        _ => FileError::Io {
            path: display_path.clone(),
            source,
        },
    })?;

    let content =
        String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(display_path.clone()))?;

    let len = content.len();
    let checksum = blake3::hash(content.as_bytes()).to_hex().to_string();

    tracing::debug!(path = %display_path, bytes = len, %checksum, "read source file");

    Ok(FileContent {
        path: display_path,
        content,
        len,
        checksum,
    })
}
