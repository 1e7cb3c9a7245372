use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppError(pub String);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    #[error("expected at least 6 hex digits, got {0} characters")]
    TooShort(usize),
    #[error("invalid hex byte {0:?}")]
    InvalidDigits(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to check {}: {source}", path.display())]
    Exists {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
