use crate::models::{ColorSet, ColorSetSource, LoadError};
use crate::services::logging::{LogLogger, Logger};
use crate::services::parser::parse_color_set;
use crate::services::paths::{ModDirResolver, PathResolver};
use crate::services::storage::{FsStorage, Storage};
use log::debug;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::Path;

/// Anything that can produce a named color set.
pub trait LoadColorSet {
    fn name(&self) -> &str;
    fn load_color_set(&self) -> ColorSet;
}

/// Loads a color set from its file, writing the defaults out first when the
/// file does not exist. I/O problems are logged and the defaults are used.
pub struct ColorSetLoader<R = ModDirResolver, L = LogLogger, S = FsStorage> {
    source: ColorSetSource,
    resolver: R,
    logger: L,
    storage: S,
}

impl ColorSetLoader {
    /// Loader over the real filesystem that logs through the `log` facade.
    #[must_use]
    pub fn on_disk(source: ColorSetSource, root: impl Into<std::path::PathBuf>) -> Self {
        Self::new(source, ModDirResolver::new(root), LogLogger, FsStorage)
    }
}

impl<R, L, S> ColorSetLoader<R, L, S>
where
    R: PathResolver,
    L: Logger,
    S: Storage,
{
    #[must_use]
    pub fn new(source: ColorSetSource, resolver: R, logger: L, storage: S) -> Self {
        Self {
            source,
            resolver,
            logger,
            storage,
        }
    }

    #[must_use]
    pub fn source(&self) -> &ColorSetSource {
        &self.source
    }

    #[must_use]
    pub fn load(&self) -> ColorSet {
        let path = self.resolver.resolve(&self.source.file);

        let text = match self.read_or_create(&path) {
            Ok(text) => text,
            Err(e) => {
                self.logger
                    .error(&format!("error reading colors from disk: {e}"));
                Cow::Borrowed(self.source.default_content.as_str())
            }
        };

        let set = parse_color_set(&text);
        debug!(
            "loaded {} colors for {} from {}",
            set.len(),
            self.source.name,
            path.display()
        );
        set
    }

    fn read_or_create(&self, path: &Path) -> Result<Cow<'_, str>, LoadError> {
        let exists = self
            .storage
            .exists(path)
            .map_err(|source| LoadError::Exists {
                path: path.to_path_buf(),
                source,
            })?;

        if exists {
            return self.read(path).map(Cow::Owned);
        }

        self.logger.message(&format!(
            "no colors found, writing default values to {}",
            path.display()
        ));

        match self.storage.create_new(path, &self.source.default_content) {
            Ok(()) => Ok(Cow::Borrowed(self.source.default_content.as_str())),
            // another loader created it between the check and the write; it may
            // still be mid-write, so trust our own defaults for this load
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Ok(Cow::Borrowed(self.source.default_content.as_str()))
            }
            Err(source) => Err(LoadError::Write {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn read(&self, path: &Path) -> Result<String, LoadError> {
        self.storage
            .read_to_string(path)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl<R, L, S> LoadColorSet for ColorSetLoader<R, L, S>
where
    R: PathResolver,
    L: Logger,
    S: Storage,
{
    fn name(&self) -> &str {
        &self.source.name
    }

    fn load_color_set(&self) -> ColorSet {
        self.load()
    }
}
