pub mod color;
pub mod config;
pub mod errors;

pub use color::*;
pub use config::*;
pub use errors::*;
