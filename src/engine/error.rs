use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating a [`WriterConfig`](super::WriterConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors from reading a markup script.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Script is empty: {0}")]
    EmptyScript(PathBuf),
}

/// Read a markup script, rejecting files with no visible content.
pub fn load_script(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyScript(path.to_path_buf()));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_empty_script_error() {
        let test_file = "test_empty_script.txt";
        File::create(test_file).unwrap();

        let result = load_script(test_file);
        match result {
            Err(LoadError::EmptyScript(_)) => (),
            _ => panic!("Expected EmptyScript error"),
        }

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_nonexistent_script_error() {
        let result = load_script("nonexistent_script_12345.txt");
        match result {
            Err(LoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("nonexistent_script_12345.txt"))
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_valid_script_loads() {
        let test_file = "test_valid_script.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"Hello <b>world</b>").unwrap();

        let result = load_script(test_file);
        assert_eq!(result.unwrap(), "Hello <b>world</b>");

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_error_display_messages() {
        let err = ConfigError::InvalidValue {
            field: "writing_speed",
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid writing_speed: bad");

        let err = LoadError::EmptyScript(PathBuf::from("a.txt"));
        assert!(err.to_string().contains("a.txt"));
    }
}
