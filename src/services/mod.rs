pub mod loader;
pub mod logging;
pub mod parser;
pub mod paths;
pub mod storage;

pub use loader::{ColorSetLoader, LoadColorSet};
pub use logging::{LogLogger, Logger};
pub use parser::parse_color_set;
pub use paths::{ModDirResolver, PathResolver};
pub use storage::{FsStorage, Storage};
