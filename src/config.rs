//! Configuration of statistics providers and scoring functions.
//!
//! [`HistogramParams`] configures the histogram quantile provider and uses
//! the `bon` crate for a builder with validation at build time.
//! [`ScoringSpec`] selects a scoring function at runtime; it is what a merge
//! driver reads from its own configuration file (all types here implement
//! serde's `Serialize` / `Deserialize`).
//!
//! # Example
//!
//! ```
//! use region_merge::config::{HistogramParams, ScoringSpec};
//!
//! // All defaults: 256 bins, init-with-max enabled
//! let params = HistogramParams::builder().build().unwrap();
//!
//! // Coarse histogram accumulating every sample
//! let params = HistogramParams::builder()
//!     .num_bins(16)
//!     .init_with_max(false)
//!     .build()
//!     .unwrap();
//!
//! // 95th percentile of the affinities on each edge
//! let spec = ScoringSpec::histogram_quantile(95.0, params);
//! spec.validate().unwrap();
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Largest supported histogram resolution.
pub const MAX_BINS: usize = 65536;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors raised while validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("num_bins must be in [1, 65536], got {0}")]
    InvalidBinCount(usize),

    #[error("quantile must be a percentage in [0, 100], got {0}")]
    InvalidQuantile(f32),

    #[error("k must be at least 1")]
    InvalidK,
}

// =============================================================================
// HistogramParams
// =============================================================================

/// Parameters of [`HistogramQuantileProvider`](crate::providers::HistogramQuantileProvider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
#[serde(default)]
pub struct HistogramParams {
    /// Number of equal-width bins over `[0, 1]`. Default: 256.
    #[builder(default = 256)]
    pub num_bins: usize,

    /// Keep only samples at least as high as the best one seen so far.
    ///
    /// When set, a sample landing in a bin strictly above the edge's lowest
    /// populated bin restarts the edge's histogram, and any other sample is
    /// dropped. Merges always accumulate regardless. Default: `true`.
    #[builder(default = true)]
    pub init_with_max: bool,
}

impl<S: histogram_params_builder::IsComplete> HistogramParamsBuilder<S> {
    /// Build and validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBinCount`] if `num_bins` is zero or
    /// above [`MAX_BINS`].
    pub fn build(self) -> Result<HistogramParams, ConfigError> {
        let params = self.__build_internal();
        params.validate()?;
        Ok(params)
    }
}

impl HistogramParams {
    /// Check the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_bins == 0 || self.num_bins > MAX_BINS {
            return Err(ConfigError::InvalidBinCount(self.num_bins));
        }
        Ok(())
    }
}

impl Default for HistogramParams {
    fn default() -> Self {
        Self {
            num_bins: 256,
            init_with_max: true,
        }
    }
}

// =============================================================================
// ScoringSpec
// =============================================================================

/// Runtime selection of a scoring function and its parameters.
///
/// Serialized with a `kind` tag:
///
/// ```json
/// { "kind": "histogram_quantile", "quantile": 50.0,
///   "histogram": { "num_bins": 256, "init_with_max": true } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringSpec {
    /// The same value for every edge.
    Constant { value: f32 },
    /// Size of the smaller incident region.
    MinSize,
    /// Size of the larger incident region.
    MaxSize,
    /// Smallest affinity seen on the edge.
    MinAffinity,
    /// Largest affinity seen on the edge.
    MaxAffinity,
    /// Mean affinity of the edge.
    MeanAffinity,
    /// Number of affinity samples on the edge.
    ContactArea,
    /// Quantile (as a percentage) of the edge's binned affinities.
    HistogramQuantile {
        quantile: f32,
        #[serde(default)]
        histogram: HistogramParams,
    },
    /// Exact quantile (as a percentage) of the edge's stored affinities.
    Quantile {
        quantile: f32,
        #[serde(default = "default_init_with_max")]
        init_with_max: bool,
    },
    /// Mean of the `k` largest affinities on the edge.
    MeanMaxK { k: usize },
    /// Uniform random score in `[0, 1)`.
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
}

/// Convenience constructors.
impl ScoringSpec {
    pub fn constant(value: f32) -> Self {
        Self::Constant { value }
    }

    /// Histogram quantile with `quantile` given as a percentage.
    pub fn histogram_quantile(quantile: f32, histogram: HistogramParams) -> Self {
        Self::HistogramQuantile {
            quantile,
            histogram,
        }
    }

    /// Median of the binned affinities with default histogram parameters.
    pub fn median() -> Self {
        Self::histogram_quantile(50.0, HistogramParams::default())
    }

    /// Exact quantile with `quantile` given as a percentage.
    pub fn quantile(quantile: f32, init_with_max: bool) -> Self {
        Self::Quantile {
            quantile,
            init_with_max,
        }
    }

    pub fn mean_max_k(k: usize) -> Self {
        Self::MeanMaxK { k }
    }

    pub fn random(seed: u64) -> Self {
        Self::Random { seed: Some(seed) }
    }

    /// Check all parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::HistogramQuantile {
                quantile,
                histogram,
            } => {
                if !(0.0..=100.0).contains(quantile) {
                    return Err(ConfigError::InvalidQuantile(*quantile));
                }
                histogram.validate()
            }
            Self::Quantile { quantile, .. } if !(0.0..=100.0).contains(quantile) => {
                Err(ConfigError::InvalidQuantile(*quantile))
            }
            Self::MeanMaxK { k } if *k == 0 => Err(ConfigError::InvalidK),
            _ => Ok(()),
        }
    }

    /// Name of the scoring function (for logging).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::MinSize => "min_size",
            Self::MaxSize => "max_size",
            Self::MinAffinity => "min_affinity",
            Self::MaxAffinity => "max_affinity",
            Self::MeanAffinity => "mean_affinity",
            Self::ContactArea => "contact_area",
            Self::HistogramQuantile { .. } => "histogram_quantile",
            Self::Quantile { .. } => "quantile",
            Self::MeanMaxK { .. } => "mean_max_k",
            Self::Random { .. } => "random",
        }
    }
}

fn default_init_with_max() -> bool {
    true
}
