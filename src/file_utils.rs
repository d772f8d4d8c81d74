use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a UTF-8 text file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| AppError::InputRead {
            path: path.to_path_buf(),
            message: if e.kind() == std::io::ErrorKind::NotFound {
                "file not found".to_string()
            } else {
                e.to_string()
            },
        })?;

        String::from_utf8(bytes).map_err(|e| AppError::InputRead {
            path: path.to_path_buf(),
            message: format!("unable to decode file as UTF-8: {}", e.utf8_error()),
        })
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), AppError> {
        let path = path.as_ref();
        let to_error = |e: std::io::Error| AppError::OutputWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent).map_err(to_error)?;
        }

        fs::write(path, content).map_err(to_error)
    }

    /// Write content to the given path, or to stdout followed by a newline
    pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<(), AppError> {
        match output_path {
            Some(path) => Self::write_to_file(path, content),
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", content)
                    .and_then(|_| handle.flush())
                    .map_err(|e| AppError::OutputWrite {
                        path: "<stdout>".into(),
                        message: e.to_string(),
                    })
            }
        }
    }
}
