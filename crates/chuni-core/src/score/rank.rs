use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::chart::Level;
use crate::config::rating::RANK_THRESHOLD_PRECISION;
use crate::decimal::ExactDecimal;
use crate::rating::rating;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    EnumIter,
)]
#[repr(u8)]
pub enum ScoreRank {
    #[default]
    D = 0,
    C = 1,
    B = 2,
    #[strum(serialize = "BB")]
    Bb = 3,
    #[strum(serialize = "BBB")]
    Bbb = 4,
    A = 5,
    #[strum(serialize = "AA")]
    Aa = 6,
    #[strum(serialize = "AAA")]
    Aaa = 7,
    S = 8,
    #[strum(serialize = "S+")]
    SPlus = 9,
    #[strum(serialize = "SS")]
    Ss = 10,
    #[strum(serialize = "SS+")]
    SsPlus = 11,
    #[strum(serialize = "SSS")]
    Sss = 12,
    #[strum(serialize = "SSS+")]
    SssPlus = 13,
}

impl ScoreRank {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Lowest score that earns this rank.
    pub fn threshold(&self) -> u32 {
        match self {
            Self::D => 0,
            Self::C => 500_000,
            Self::B => 600_000,
            Self::Bb => 700_000,
            Self::Bbb => 800_000,
            Self::A => 900_000,
            Self::Aa => 925_000,
            Self::Aaa => 950_000,
            Self::S => 975_000,
            Self::SPlus => 990_000,
            Self::Ss => 1_000_000,
            Self::SsPlus => 1_005_000,
            Self::Sss => 1_007_500,
            Self::SssPlus => 1_009_000,
        }
    }

    pub fn from_score(score: u32) -> Self {
        Self::iter()
            .rev()
            .find(|rank| score >= rank.threshold())
            .unwrap_or_default()
    }

    /// Smallest two-decimal rating that guarantees this rank on a chart.
    ///
    /// The threshold score's rating rounded up to hundredths. Reaching C only
    /// needs a positive rating, so it reports `0.01`.
    pub fn min_rating(&self, level: Level) -> ExactDecimal {
        if *self == Self::C {
            return ExactDecimal::new(1, 2);
        }
        let at_threshold = rating(self.threshold(), level, RANK_THRESHOLD_PRECISION);
        let hundredths = at_threshold.mul(&ExactDecimal::from(100)).ceil();
        ExactDecimal::new(hundredths, 2)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ScoreRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
