use serde_json::Value;

use crate::core::context::EnvironmentContext;
use crate::core::error::ConfigError;

/// A named block of process configuration, rendered for whatever wires the
/// process together.
pub trait ConfigProvider {
    fn name(&self) -> &'static str;

    fn provide(&self, context: &dyn EnvironmentContext) -> Result<Value, ConfigError>;
}
