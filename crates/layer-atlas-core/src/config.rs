use serde::{Deserialize, Serialize};

/// Packing configuration.
/// Key notes:
///   - `margin` is inflated into every layer once and reserved along the
///     canvas left/top edge, so packed neighbors keep at least `margin`
///     pixels of separation
///   - `max_size`/`max_attempts` bound the growth loop; the packing heuristic
///     itself has no failure path besides "canvas too small"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Pixels of separation between packed layers (and canvas edge).
    pub margin: u32,
    /// Canvas width for the first pack attempt.
    pub initial_width: u32,
    /// Canvas height for the first pack attempt.
    pub initial_height: u32,
    /// Hard cap on either canvas dimension before the growth loop gives up.
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// Hard cap on pack attempts before the growth loop gives up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            margin: 0,
            initial_width: 16,
            initial_height: 16,
            max_size: default_max_size(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_size() -> u32 {
    16384
}
fn default_max_attempts() -> u32 {
    64
}

impl AtlasConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::LayerAtlasError;

        if self.initial_width == 0 || self.initial_height == 0 {
            return Err(LayerAtlasError::InvalidConfig(format!(
                "initial canvas must be non-empty, got {}x{}",
                self.initial_width, self.initial_height
            )));
        }
        if self.max_size < self.initial_width.max(self.initial_height) {
            return Err(LayerAtlasError::InvalidConfig(format!(
                "max_size ({}) is below the initial canvas {}x{}",
                self.max_size, self.initial_width, self.initial_height
            )));
        }
        if self.max_attempts == 0 {
            return Err(LayerAtlasError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Create a fluent builder for `AtlasConfig`.
    pub fn builder() -> AtlasConfigBuilder {
        AtlasConfigBuilder::new()
    }
}

/// Builder for `AtlasConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct AtlasConfigBuilder {
    cfg: AtlasConfig,
}

impl AtlasConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: AtlasConfig::default(),
        }
    }
    pub fn margin(mut self, v: u32) -> Self {
        self.cfg.margin = v;
        self
    }
    pub fn initial_size(mut self, w: u32, h: u32) -> Self {
        self.cfg.initial_width = w;
        self.cfg.initial_height = h;
        self
    }
    pub fn max_size(mut self, v: u32) -> Self {
        self.cfg.max_size = v;
        self
    }
    pub fn max_attempts(mut self, v: u32) -> Self {
        self.cfg.max_attempts = v;
        self
    }
    pub fn build(self) -> AtlasConfig {
        self.cfg
    }
}
