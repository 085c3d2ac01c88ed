//! Ordered combination of sources.

use super::ConfigSource;
use crate::error::SourceError;
use std::fmt;

/// Sources consulted in order. The first layer that binds a key wins.
///
/// A failing layer aborts the lookup, even if a later layer would have
/// answered.
#[derive(Default)]
pub struct LayeredSource {
    /// Layers in priority order
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredSource {
    /// Create a source with no layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_layer(mut self, layer: impl ConfigSource + 'static) -> Self {
        self.push(layer);
        self
    }

    /// Append a layer with lower priority than the existing ones.
    pub fn push(&mut self, layer: impl ConfigSource + 'static) {
        self.layers.push(Box::new(layer));
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether there are no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConfigSource for LayeredSource {
    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        for layer in &self.layers {
            if let Some(value) = layer.get(key)? {
                tracing::debug!(layer = %layer.name(), key, "Layer matched");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn name(&self) -> String {
        let names: Vec<String> = self.layers.iter().map(|layer| layer.name()).collect();
        format!("layered[{}]", names.join(", "))
    }
}

impl fmt::Debug for LayeredSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayeredSource")
            .field("layers", &self.name())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::MapSource;

    /// Layer that always fails.
    struct FailingLayer;

    impl ConfigSource for FailingLayer {
        fn get(&self, _key: &str) -> Result<Option<String>, SourceError> {
            Err(SourceError::Unavailable {
                source_name: self.name(),
                reason: "offline".to_string(),
            })
        }

        fn name(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_first_layer_wins() {
        let source = LayeredSource::new()
            .with_layer(MapSource::new().with("environment", "Production"))
            .with_layer(MapSource::new().with("environment", "Development"));

        assert_eq!(source.get("environment").unwrap().as_deref(), Some("Production"));
    }

    #[test]
    fn test_falls_through_to_later_layer() {
        let source = LayeredSource::new()
            .with_layer(MapSource::new())
            .with_layer(MapSource::new().with("environment", "Development"));

        assert_eq!(source.get("environment").unwrap().as_deref(), Some("Development"));
        assert_eq!(source.get("region").unwrap(), None);
    }

    #[test]
    fn test_failing_layer_aborts_lookup() {
        let source = LayeredSource::new()
            .with_layer(MapSource::new())
            .with_layer(FailingLayer)
            .with_layer(MapSource::new().with("environment", "Development"));

        assert!(matches!(
            source.get("environment"),
            Err(SourceError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_hit_before_failing_layer() {
        let source = LayeredSource::new()
            .with_layer(MapSource::new().with("environment", "Test"))
            .with_layer(FailingLayer);

        assert_eq!(source.get("environment").unwrap().as_deref(), Some("Test"));
    }

    #[test]
    fn test_empty_layered_source() {
        let source = LayeredSource::new();
        assert!(source.is_empty());
        assert_eq!(source.get("environment").unwrap(), None);
        assert_eq!(source.name(), "layered[]");
    }

    #[test]
    fn test_name_lists_layers() {
        let source = LayeredSource::new()
            .with_layer(MapSource::new())
            .with_layer(FailingLayer);
        assert_eq!(source.len(), 2);
        assert_eq!(source.name(), "layered[map, failing]");
    }
}
