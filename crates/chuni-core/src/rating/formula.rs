use tracing::trace;

use crate::chart::Level;
use crate::config::rating::MAX_BONUS;
use crate::decimal::ExactDecimal;

/// Piece of the score-to-rating curve a score falls into.
///
/// Named after the lowest rank each piece covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    SssPlus,
    Sss,
    SsPlus,
    Ss,
    S,
    A,
    Bbb,
    C,
    D,
}

impl Segment {
    pub(crate) fn of(score: u32) -> Self {
        match score {
            1_009_000.. => Self::SssPlus,
            1_007_500.. => Self::Sss,
            1_005_000.. => Self::SsPlus,
            1_000_000.. => Self::Ss,
            975_000.. => Self::S,
            900_000.. => Self::A,
            800_000.. => Self::Bbb,
            500_000.. => Self::C,
            _ => Self::D,
        }
    }
}

fn int(value: i64) -> ExactDecimal {
    ExactDecimal::from(value)
}

/// Rating times 100 for `score`, with every division kept to `places` digits.
///
/// `L` below is the level in hundredths and `H = (L - 500) / 2`.
pub(crate) fn rating_hundredths(score: u32, level: Level, places: u32) -> ExactDecimal {
    let l = level.hundredths();
    let s = i64::from(score);
    let over = |floor: i64, step: i64| int(s - floor).div(&int(step), places);
    let half_span = || int(l - 500).div(&int(2), places);

    let segment = Segment::of(score);
    trace!("Score {} at level {} uses segment {:?}", score, level, segment);

    match segment {
        // L + 2.15
        Segment::SssPlus => int(l + MAX_BONUS),
        // L + 200 + (s - 1007500) / 100
        Segment::Sss => int(l + 200).add(&over(1_007_500, 100)),
        // L + 150 + (s - 1005000) / 50
        Segment::SsPlus => int(l + 150).add(&over(1_005_000, 50)),
        // L + 100 + (s - 1000000) / 100
        Segment::Ss => int(l + 100).add(&over(1_000_000, 100)),
        // L + (s - 975000) / 250
        Segment::S => int(l).add(&over(975_000, 250)),
        // L - 500 + (s - 900000) / 150
        Segment::A => int(l - 500).add(&over(900_000, 150)),
        // H + (s - 800000) * H / 100000
        Segment::Bbb => {
            let h = half_span();
            let slope = int(s - 800_000).mul(&h).div(&int(100_000), places);
            h.add(&slope)
        }
        // H * (s - 500000) / 300000
        Segment::C => half_span()
            .mul(&int(s - 500_000))
            .div(&int(300_000), places),
        Segment::D => ExactDecimal::zero(),
    }
}

/// Rating earned by `score` on a chart of `level`.
///
/// The result carries exactly `precision` fractional digits, truncated, and is
/// never negative.
pub fn rating(score: u32, level: Level, precision: u32) -> ExactDecimal {
    // Truncating at two extra digits first composes exactly with the final
    // truncation after the division by 100.
    let hundredths = rating_hundredths(score, level, precision.saturating_add(2));
    let value = hundredths.div(&int(100), precision);
    if value.is_negative() {
        ExactDecimal::zero().rescale(precision)
    } else {
        value.rescale(precision)
    }
}

/// [`rating`] for an optional score; no score means no rating.
pub fn rating_opt(score: Option<u32>, level: Level, precision: u32) -> Option<ExactDecimal> {
    score.map(|score| rating(score, level, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: Level = Level::from_tenths(135);

    fn rated(score: u32) -> String {
        rating(score, LEVEL, 8).to_string()
    }

    #[test]
    fn test_segment_of() {
        assert_eq!(Segment::of(1_010_000), Segment::SssPlus);
        assert_eq!(Segment::of(1_009_000), Segment::SssPlus);
        assert_eq!(Segment::of(1_008_999), Segment::Sss);
        assert_eq!(Segment::of(975_000), Segment::S);
        assert_eq!(Segment::of(800_000), Segment::Bbb);
        assert_eq!(Segment::of(499_999), Segment::D);
    }

    #[test]
    fn test_rating_at_segment_floors() {
        assert_eq!(rated(1_010_000), "15.65");
        assert_eq!(rated(1_009_000), "15.65");
        assert_eq!(rated(1_007_500), "15.5");
        assert_eq!(rated(1_005_000), "15");
        assert_eq!(rated(1_000_000), "14.5");
        assert_eq!(rated(975_000), "13.5");
        assert_eq!(rated(900_000), "8.5");
        assert_eq!(rated(800_000), "4.25");
        assert_eq!(rated(500_000), "0");
        assert_eq!(rated(0), "0");
    }

    #[test]
    fn test_rating_inside_segments() {
        // 1350 + 200 + 750 / 100 = 1557.5
        assert_eq!(rated(1_008_250), "15.575");
        // 1350 + 150 + 1000 / 50 = 1520
        assert_eq!(rated(1_006_000), "15.2");
        // 1350 + 12500 / 250 = 1400
        assert_eq!(rated(987_500), "14");
        // 425 * 100000 / 300000 = 141.666...
        assert_eq!(rated(600_000), "1.41666666");
        // 1350 - 500 + 1 / 150
        assert_eq!(rated(900_001), "8.50006666");
    }

    #[test]
    fn test_rating_keeps_precision() {
        let value = rating(1_009_000, LEVEL, 8);
        assert_eq!(value.scale(), 8);
        assert_eq!(value.to_fixed(8), "15.65000000");

        let value = rating(600_000, LEVEL, 2);
        assert_eq!(value.to_fixed(2), "1.41");
        assert_eq!(rating(0, LEVEL, 3).to_fixed(3), "0.000");
    }

    #[test]
    fn test_rating_clamps_low_levels() {
        // Below level 5.0 the lower segments turn negative.
        let level = Level::from_tenths(30);
        assert!(rating(850_000, level, 5).is_zero());
        assert!(!rating(850_000, level, 5).is_negative());
        assert_eq!(rating(1_009_000, level, 5).to_string(), "5.15");
    }

    #[test]
    fn test_rating_opt() {
        assert_eq!(rating_opt(None, LEVEL, 8), None);
        assert_eq!(
            rating_opt(Some(1_009_000), LEVEL, 8),
            Some(rating(1_009_000, LEVEL, 8))
        );
    }
}
