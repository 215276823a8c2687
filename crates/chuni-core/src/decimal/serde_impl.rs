use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ExactDecimal;

impl Serialize for ExactDecimal {
    /// Serialized as a string at the full internal scale, so `"13.2500"`
    /// stays `"13.2500"` instead of drifting through a float.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fixed(self.scale()))
    }
}

struct ExactDecimalVisitor;

impl Visitor<'_> for ExactDecimalVisitor {
    type Value = ExactDecimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ExactDecimal, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ExactDecimal, E> {
        Ok(ExactDecimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ExactDecimal, E> {
        Ok(ExactDecimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ExactDecimal, E> {
        ExactDecimal::try_from(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ExactDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExactDecimalVisitor)
    }
}
