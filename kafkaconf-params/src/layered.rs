use tracing::debug;

use crate::{ParameterError, ParameterSource};

/// Chains sources in priority order. The first layer that knows a key wins;
/// a layer failing for any reason other than `Missing` stops the lookup.
#[derive(Default)]
pub struct LayeredParameterSource<'a> {
    layers: Vec<Box<dyn ParameterSource + 'a>>,
}

impl<'a> LayeredParameterSource<'a> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn push(mut self, source: impl ParameterSource + 'a) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ParameterSource for LayeredParameterSource<'_> {
    fn get(&self, name: &str) -> Result<String, ParameterError> {
        for (layer, source) in self.layers.iter().enumerate() {
            match source.get(name) {
                Ok(value) => {
                    debug!(parameter = name, layer, "parameter resolved");
                    return Ok(value);
                }
                Err(e) if e.is_missing() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(ParameterError::missing(name))
    }
}
