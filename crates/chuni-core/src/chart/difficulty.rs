use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

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
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(to_string = "BAS", serialize = "BASIC")]
    Basic = 0,
    #[strum(to_string = "ADV", serialize = "ADVANCED")]
    Advanced = 1,
    #[strum(to_string = "EXP", serialize = "EXPERT")]
    Expert = 2,
    #[strum(to_string = "MAS", serialize = "MASTER")]
    Master = 3,
    #[strum(to_string = "ULT", serialize = "ULTIMA")]
    Ultima = 4,
    #[strum(to_string = "WE", serialize = "WORLD'S END")]
    WorldsEnd = 5,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Parse a short or expanded name, ignoring case ("mas", "World's End").
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .to_ascii_uppercase()
            .parse()
            .map_err(|_| Error::UnknownDifficulty(name.to_string()))
    }

    /// Get the expanded difficulty name (e.g., "EXPERT", "WORLD'S END")
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Advanced => "ADVANCED",
            Self::Expert => "EXPERT",
            Self::Master => "MASTER",
            Self::Ultima => "ULTIMA",
            Self::WorldsEnd => "WORLD'S END",
        }
    }

    /// WORLD'S END charts have no numeric level and never count toward rating
    pub fn is_rated(&self) -> bool {
        !matches!(self, Self::WorldsEnd)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_u8() {
        assert_eq!(Difficulty::from_u8(0), Some(Difficulty::Basic));
        assert_eq!(Difficulty::from_u8(3), Some(Difficulty::Master));
        assert_eq!(Difficulty::from_u8(5), Some(Difficulty::WorldsEnd));
        assert_eq!(Difficulty::from_u8(6), None);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Master.short_name(), "MAS");
        assert_eq!(Difficulty::Ultima.expand_name(), "ULTIMA");
        assert_eq!("EXP".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!("MASTER".parse::<Difficulty>().unwrap(), Difficulty::Master);
        assert!("HYPER".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_from_name() {
        assert_eq!(Difficulty::from_name("ult").unwrap(), Difficulty::Ultima);
        assert_eq!(Difficulty::from_name("World's End").unwrap(), Difficulty::WorldsEnd);
        assert!(matches!(
            Difficulty::from_name("hyper"),
            Err(Error::UnknownDifficulty(name)) if name == "hyper"
        ));
    }

    #[test]
    fn test_difficulty_is_rated() {
        assert!(Difficulty::Master.is_rated());
        assert!(!Difficulty::WorldsEnd.is_rated());
    }
}
