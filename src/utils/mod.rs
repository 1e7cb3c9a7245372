pub mod color;
pub mod constants;
pub mod io;

pub use color::*;
pub use io::*;
