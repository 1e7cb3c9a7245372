use std::path::{Path, PathBuf};

/// Maps a logical file name to where it lives on disk.
pub trait PathResolver {
    fn resolve(&self, file_name: &str) -> PathBuf;
}

/// Keeps every color file under one mod data directory.
#[derive(Debug, Clone)]
pub struct ModDirResolver {
    root: PathBuf,
}

impl ModDirResolver {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for ModDirResolver {
    fn resolve(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

impl<F> PathResolver for F
where
    F: Fn(&str) -> PathBuf,
{
    fn resolve(&self, file_name: &str) -> PathBuf {
        self(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ModDirResolver, PathResolver};
    use std::path::{Path, PathBuf};

    #[test]
    fn joins_under_root() {
        let resolver = ModDirResolver::new("/data/mod");
        assert_eq!(resolver.resolve("colors.txt"), Path::new("/data/mod/colors.txt"));
        assert_eq!(resolver.root(), Path::new("/data/mod"));
    }

    #[test]
    fn closures_resolve() {
        let resolver = |name: &str| PathBuf::from("/elsewhere").join(name);
        assert_eq!(resolver.resolve("x.txt"), Path::new("/elsewhere/x.txt"));
    }
}
