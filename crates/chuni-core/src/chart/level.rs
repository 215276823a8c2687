use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::rating::MAX_BONUS;
use crate::decimal::ExactDecimal;
use crate::error::{Error, Result};

/// Chart constant such as `13.5`, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ExactDecimal", into = "ExactDecimal")]
pub struct Level(u32);

impl Level {
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    pub fn tenths(&self) -> u32 {
        self.0
    }

    /// Level in rating hundredths (`13.5` → `1350`).
    pub fn hundredths(&self) -> i64 {
        i64::from(self.0) * 10
    }

    pub fn to_decimal(&self) -> ExactDecimal {
        ExactDecimal::new(self.0, 1)
    }

    /// Highest rating the chart can give (`level + 2.15`).
    pub fn max_rating(&self) -> ExactDecimal {
        ExactDecimal::new(self.hundredths() + MAX_BONUS, 2)
    }
}

impl TryFrom<ExactDecimal> for Level {
    type Error = Error;

    fn try_from(value: ExactDecimal) -> Result<Self> {
        let invalid = || Error::InvalidLevel(value.to_string());
        let tenths = value.rescale(1);
        if value.is_negative() || tenths != value {
            return Err(invalid());
        }
        tenths
            .magnitude()
            .to_u32()
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl From<Level> for ExactDecimal {
    fn from(level: Level) -> Self {
        level.to_decimal()
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: ExactDecimal = s.parse().map_err(|_| Error::InvalidLevel(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let level: Level = "13.5".parse().unwrap();
        assert_eq!(level.tenths(), 135);
        assert_eq!(level.hundredths(), 1350);
        assert_eq!(level.to_string(), "13.5");

        let level: Level = "14".parse().unwrap();
        assert_eq!(level.tenths(), 140);
        assert_eq!(level.to_string(), "14.0");
    }

    #[test]
    fn test_parse_level_trailing_zero_is_fine() {
        let level: Level = "12.70".parse().unwrap();
        assert_eq!(level.tenths(), 127);
    }

    #[test]
    fn test_parse_level_rejects_extra_precision() {
        assert!(matches!(
            "13.55".parse::<Level>(),
            Err(Error::InvalidLevel(_))
        ));
        assert!("-1.0".parse::<Level>().is_err());
        assert!("abc".parse::<Level>().is_err());
    }

    #[test]
    fn test_max_rating() {
        let level: Level = "13.5".parse().unwrap();
        assert_eq!(level.max_rating().to_string(), "15.65");
    }

    #[test]
    fn test_level_serde() {
        let level: Level = serde_json::from_str(r#""14.8""#).unwrap();
        assert_eq!(level, Level::from_tenths(148));
        let level: Level = serde_json::from_str("14.8").unwrap();
        assert_eq!(level, Level::from_tenths(148));
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""14.8""#);
        assert!(serde_json::from_str::<Level>("14.85").is_err());
    }
}
