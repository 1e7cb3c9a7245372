use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Ensure parent directory exists, creating it if needed.
///
/// # Errors
/// Returns `std::io::Error` if directory creation fails.
pub fn ensure_parent_dir(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Create `path` with `contents`, failing if it already exists.
///
/// The contents go to a temp file next to `path` first and are only linked
/// into place once fully written, so `path` never shows up half-written.
/// The temp file is removed on any failure.
///
/// # Errors
/// Returns `std::io::ErrorKind::AlreadyExists` if another writer created the
/// file first, or any other `std::io::Error` from creating or writing it.
pub fn write_new_text_file(path: &Path, contents: &str) -> Result<(), std::io::Error> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_new_text_file;
    use std::io::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parents() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("a/b/colors.txt");

        write_new_text_file(&path, "#FF0000").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "#FF0000");
    }

    #[test]
    fn refuses_to_overwrite() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("colors.txt");
        std::fs::write(&path, "keep").expect("seed");

        let err = write_new_text_file(&path, "replace").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "keep");
    }

    #[test]
    fn refused_write_leaves_no_temp_files() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("colors.txt");
        std::fs::write(&path, "").expect("seed");

        assert!(write_new_text_file(&path, "#FF0000").is_err());

        let entries: Vec<_> = std::fs::read_dir(temp.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("colors.txt")]);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "");
    }
}
