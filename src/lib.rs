pub mod models;
pub mod services;
pub mod utils;

pub use models::{Color32, ColorSet, ColorSetSource};
pub use services::{ColorSetLoader, LoadColorSet};
