pub mod builder;
pub mod certificates;
pub mod connection;
pub mod constants;
pub mod context;
mod error;
pub mod fs;
pub mod provider;

pub use error::ConfigError;
