pub mod errors;
mod env;
mod layered;
mod pool;

// Public re-exports for easy access
pub use errors::ParameterError;
pub use env::EnvParameterSource;
pub use layered::LayeredParameterSource;
pub use pool::MemoryParameterPool;

/// Named string parameters, looked up one key at a time.
///
/// A source answers `Missing` for keys it does not know; any other error
/// means the source itself is broken.
pub trait ParameterSource {
    fn get(&self, name: &str) -> Result<String, ParameterError>;
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn get(&self, name: &str) -> Result<String, ParameterError> {
        (**self).get(name)
    }
}
