pub mod cli;
pub mod loader;
pub mod setting;

mod error;

pub use error::EdgeError;

pub type Result<T> = std::result::Result<T, EdgeError>;
