use serde::{Deserialize, Serialize};

use super::{rating, top};

/// Defaults used by [`crate::ScoreCalculator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Fractional digits of computed ratings
    pub precision: u32,
    /// Size of the top rating list
    pub top_capacity: usize,
    /// Share of non-degraded notes expected to be JUSTICE CRITICAL (0.0..=1.0)
    pub justice_critical_ratio: f64,
    /// Share of the degraded budget spent on MISS rather than ATTACK (0.0..=1.0)
    pub miss_fraction: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: rating::DEFAULT_PRECISION,
            top_capacity: top::TOP_K,
            justice_critical_ratio: 1.0,
            miss_fraction: 0.0,
        }
    }
}

impl CalculatorConfig {
    pub fn builder() -> CalculatorConfigBuilder {
        CalculatorConfigBuilder::default()
    }

    /// Ratio clamped into `0.0..=1.0`; non-finite values fall back to 1.0.
    pub fn clamped_ratio(&self) -> f64 {
        clamp_unit(self.justice_critical_ratio, 1.0)
    }

    /// Miss fraction clamped into `0.0..=1.0`; non-finite values fall back to 0.0.
    pub fn clamped_miss_fraction(&self) -> f64 {
        clamp_unit(self.miss_fraction, 0.0)
    }
}

/// Clamp into `0.0..=1.0`, mapping NaN and infinities to `fallback`.
pub(crate) fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// Builder for [`CalculatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfigBuilder {
    config: CalculatorConfig,
}

impl CalculatorConfigBuilder {
    /// Capped at [`rating::MAX_PRECISION`].
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision.min(rating::MAX_PRECISION);
        self
    }

    pub fn top_capacity(mut self, capacity: usize) -> Self {
        self.config.top_capacity = capacity;
        self
    }

    pub fn justice_critical_ratio(mut self, ratio: f64) -> Self {
        self.config.justice_critical_ratio = ratio;
        self
    }

    pub fn miss_fraction(mut self, fraction: f64) -> Self {
        self.config.miss_fraction = fraction;
        self
    }

    pub fn build(self) -> CalculatorConfig {
        self.config
    }
}
