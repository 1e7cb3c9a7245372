use crate::utils::write_new_text_file;
use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations the loader needs.
pub trait Storage {
    fn exists(&self, path: &Path) -> io::Result<bool>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create `path` with `contents`. Must fail with
    /// `io::ErrorKind::AlreadyExists` rather than replace an existing file.
    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// `Storage` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        write_new_text_file(path, contents)
    }
}
