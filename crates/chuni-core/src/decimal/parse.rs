use std::str::FromStr;

use num_bigint::BigInt;

use super::ExactDecimal;
use crate::error::{Error, Result};

impl FromStr for ExactDecimal {
    type Err = Error;

    /// Parse a plain decimal literal such as `"13.5"`, `"-0.25"` or `"1009000"`.
    ///
    /// Exponents, separators and surrounding whitespace are rejected. The
    /// number of digits after the point becomes the scale, so `"1.50"` keeps
    /// scale 2.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDecimal(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let mut magnitude: BigInt = format!("{int_part}{frac_part}")
            .parse()
            .map_err(|_| invalid())?;
        if negative {
            magnitude = -magnitude;
        }
        let scale = u32::try_from(frac_part.len()).map_err(|_| invalid())?;

        Ok(Self::new(magnitude, scale))
    }
}

impl TryFrom<&str> for ExactDecimal {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<f64> for ExactDecimal {
    type Error = Error;

    /// Goes through the shortest round-trip rendering of the float, so
    /// `13.25_f64` becomes exactly `13.25`.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidDecimal(value.to_string()));
        }
        value.to_string().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let d: ExactDecimal = "1009000".parse().unwrap();
        assert_eq!(d.scale(), 0);
        assert_eq!(d.magnitude(), &BigInt::from(1_009_000));
    }

    #[test]
    fn test_parse_fraction_keeps_scale() {
        let d: ExactDecimal = "1.50".parse().unwrap();
        assert_eq!(d.scale(), 2);
        assert_eq!(d.magnitude(), &BigInt::from(150));
    }

    #[test]
    fn test_parse_signs() {
        let d: ExactDecimal = "-0.25".parse().unwrap();
        assert_eq!(d.magnitude(), &BigInt::from(-25));
        let d: ExactDecimal = "+3".parse().unwrap();
        assert_eq!(d.magnitude(), &BigInt::from(3));
    }

    #[test]
    fn test_parse_bare_point_forms() {
        let d: ExactDecimal = ".5".parse().unwrap();
        assert_eq!(d.to_string(), "0.5");
        let d: ExactDecimal = "5.".parse().unwrap();
        assert_eq!(d.scale(), 0);
        assert_eq!(d.to_string(), "5");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "-", ".", "abc", "1.2.3", "1e5", " 1", "1 ", "--1", "1,5", "0x10"] {
            let result = input.parse::<ExactDecimal>();
            assert!(
                matches!(result, Err(Error::InvalidDecimal(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_f64() {
        let d = ExactDecimal::try_from(13.25_f64).unwrap();
        assert_eq!(d.to_string(), "13.25");
        let d = ExactDecimal::try_from(0.1_f64).unwrap();
        assert_eq!(d.to_string(), "0.1");
        assert!(ExactDecimal::try_from(f64::NAN).is_err());
        assert!(ExactDecimal::try_from(f64::INFINITY).is_err());
    }
}
