//! Engine constants and calculator configuration.
//!
//! This module contains:
//! - Scoring constants (maximum score, per-judgment weights)
//! - Rating constants (ceiling bonus, default precisions)
//! - Top rating list constants (list size, averaging precision)
//! - `CalculatorConfig` - user-tunable defaults for the calculator

mod calculator;

pub use calculator::*;
pub(crate) use calculator::clamp_unit;

/// Scoring rules of the title.
pub mod score {
    /// Highest attainable score on any chart.
    pub const MAX_SCORE: u32 = 1_010_000;

    /// Score weight of a JUSTICE CRITICAL, spread over the chart's note count.
    pub const JUSTICE_CRITICAL_WEIGHT: u64 = 1_010_000;

    /// Score weight of a JUSTICE.
    pub const JUSTICE_WEIGHT: u64 = 1_000_000;

    /// Score weight of an ATTACK.
    pub const ATTACK_WEIGHT: u64 = 500_000;

    /// Score weight of a MISS.
    pub const MISS_WEIGHT: u64 = 0;

    /// At or below this score any judgment distribution clears the target.
    pub const ATTACK_FLOOR: u32 = 500_000;
}

/// Rating formula constants.
pub mod rating {
    /// Rating bonus over the chart level at the score cap, in hundredths.
    pub const MAX_BONUS: i64 = 215;

    /// Fractional digits used when a caller does not pick a precision.
    pub const DEFAULT_PRECISION: u32 = 8;

    /// Largest precision accepted from the command line.
    pub const MAX_PRECISION: u32 = 64;

    /// Precision used when deriving per-rank rating thresholds.
    pub const RANK_THRESHOLD_PRECISION: u32 = 3;
}

/// Top rating list constants.
pub mod top {
    /// Number of chart ratings that make up the top list.
    pub const TOP_K: usize = 30;

    /// Fractional digits kept when averaging the top list.
    pub const AVERAGE_PRECISION: u32 = 4;

    /// Fractional digits shown for a projected top average increase.
    pub const INCREASE_DISPLAY_PLACES: u32 = 3;
}
