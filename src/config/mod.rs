//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Schema validation via serde and `validator`
//! - A semantic pass that builds the [`Region`]

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::{PiError, PiResult};
use crate::estimator::{BatchSize, Region};

/// Side length of the default drawing surface.
pub const DEFAULT_CANVAS_SIZE: i64 = 500;

/// Inset of the sampling square from each canvas edge.
pub const DEFAULT_MARGIN: i64 = 20;

/// Top-level configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PiConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Sampling square bounds.
    #[serde(default)]
    pub region: RegionConfig,

    /// Batch settings.
    #[validate(nested)]
    #[serde(default)]
    pub batch: BatchConfig,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Display settings.
    #[validate(nested)]
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl PiConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> PiResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> PiResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> PiResult<String> {
        serde_yaml::to_string(self).map_err(|e| PiError::serialization(e.to_string()))
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> PiConfigBuilder {
        PiConfigBuilder::default()
    }

    /// Validate constraints that span fields.
    fn validate_semantic(&self) -> PiResult<()> {
        let region = self.region()?;

        let canvas = self.display.canvas_size;
        if region.left() < 0 || region.top() < 0 || region.right() > canvas || region.bottom() > canvas
        {
            return Err(PiError::config(format!(
                "region [{}..={}]x[{}..={}] does not fit on a {canvas}x{canvas} canvas",
                region.left(),
                region.right(),
                region.top(),
                region.bottom()
            )));
        }

        Ok(())
    }

    /// The validated square region.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] for inverted or non-square bounds.
    pub fn region(&self) -> PiResult<Region> {
        let r = &self.region;
        Region::square(r.left, r.right, r.top, r.bottom)
    }

    /// The configured batch size.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidBatchSize`] if the size is zero or above
    /// [`crate::estimator::MAX_BATCH_SIZE`].
    pub fn batch_size(&self) -> PiResult<BatchSize> {
        BatchSize::new(i64::try_from(self.batch.size).unwrap_or(i64::MAX))
    }
}

impl Default for PiConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            region: RegionConfig::default(),
            batch: BatchConfig::default(),
            reproducibility: ReproducibilityConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct PiConfigBuilder {
    seed: Option<u64>,
    region: Option<RegionConfig>,
    batch_size: Option<u64>,
    max_table_rows: Option<usize>,
}

impl PiConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the region bounds.
    #[must_use]
    pub const fn region(mut self, left: i64, right: i64, top: i64, bottom: i64) -> Self {
        self.region = Some(RegionConfig {
            left,
            right,
            top,
            bottom,
        });
        self
    }

    /// Set the default batch size.
    #[must_use]
    pub const fn batch_size(mut self, size: u64) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Set how many rows of the points table are shown.
    #[must_use]
    pub const fn max_table_rows(mut self, rows: usize) -> Self {
        self.max_table_rows = Some(rows);
        self
    }

    /// Build the configuration.
    ///
    /// Values are not validated here; [`PiConfig::region`] and
    /// [`PiConfig::batch_size`] report bad values when used.
    #[must_use]
    pub fn build(self) -> PiConfig {
        let mut config = PiConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = Some(seed);
        }

        if let Some(region) = self.region {
            config.region = region;
        }

        if let Some(size) = self.batch_size {
            config.batch.size = size;
        }

        if let Some(rows) = self.max_table_rows {
            config.display.max_table_rows = rows;
        }

        config
    }
}

/// Region bounds as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    /// Left bound (inclusive).
    pub left: i64,
    /// Right bound (inclusive).
    pub right: i64,
    /// Top bound (inclusive).
    pub top: i64,
    /// Bottom bound (inclusive).
    pub bottom: i64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            left: DEFAULT_MARGIN,
            right: DEFAULT_CANVAS_SIZE - DEFAULT_MARGIN,
            top: DEFAULT_MARGIN,
            bottom: DEFAULT_CANVAS_SIZE - DEFAULT_MARGIN,
        }
    }
}

/// Batch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Samples per run when none is supplied.
    #[validate(range(min = 1, max = 10_000_000))]
    #[serde(default = "default_batch_size")]
    pub size: u64,
}

const fn default_batch_size() -> u64 {
    1000
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            size: default_batch_size(),
        }
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReproducibilityConfig {
    /// Master seed; `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Side length of the drawing surface in region units.
    #[validate(range(min = 1))]
    #[serde(default = "default_canvas_size")]
    pub canvas_size: i64,
    /// Rows of the points table printed per run.
    #[validate(range(min = 1, max = 100_000))]
    #[serde(default = "default_max_table_rows")]
    pub max_table_rows: usize,
    /// Whether the points table is shown at all.
    #[serde(default = "default_true")]
    pub show_points: bool,
}

const fn default_canvas_size() -> i64 {
    DEFAULT_CANVAS_SIZE
}

const fn default_max_table_rows() -> usize {
    20
}

const fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_size: default_canvas_size(),
            max_table_rows: default_max_table_rows(),
            show_points: true,
        }
    }
}
