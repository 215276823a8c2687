//! Property tests for the rating formulas and the judgment editor.

use chuni_core::{ExactDecimal, JudgmentEditor, JudgmentField, Level, inverse_rating, rating};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = Level> {
    (10u32..=155).prop_map(Level::from_tenths)
}

fn field() -> impl Strategy<Value = JudgmentField> {
    prop_oneof![
        Just(JudgmentField::Miss),
        Just(JudgmentField::Attack),
        Just(JudgmentField::Justice),
        Just(JudgmentField::JusticeCritical),
    ]
}

proptest! {
    /// Property: rating never decreases as the score goes up.
    #[test]
    fn rating_monotonic_in_score(level in any_level(), a in 0u32..=1_010_000, b in 0u32..=1_010_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rating(low, level, 8) <= rating(high, level, 8));
    }

    /// Property: rating never decreases as the level goes up.
    #[test]
    fn rating_monotonic_in_level(score in 0u32..=1_010_000, a in 10u32..=155, b in 10u32..=155) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            rating(score, Level::from_tenths(low), 8) <= rating(score, Level::from_tenths(high), 8)
        );
    }

    /// Property: the inverse of a score's rating is the smallest score with that rating.
    #[test]
    fn inverse_is_minimal(level in any_level(), score in 0u32..=1_010_000) {
        let rated = rating(score, level, 8);
        let back = inverse_rating(&rated, level).score();
        prop_assert!(back.is_some());
        let back = back.unwrap();
        prop_assert!(back <= score);
        prop_assert!(rating(back, level, 8) >= rated);
        if back > 0 {
            prop_assert!(rating(back - 1, level, 8) < rated);
        }
    }

    /// Property: ratings above the ceiling are never reachable.
    #[test]
    fn above_ceiling_unachievable(level in any_level(), extra in 1i64..100_000) {
        let target = level.max_rating().add(&ExactDecimal::new(extra, 5));
        prop_assert!(!inverse_rating(&target, level).is_achievable());
    }

    /// Property: every edit keeps the four counts summing to the note total.
    #[test]
    fn editor_keeps_total(
        total in 1u32..5_000,
        edits in prop::collection::vec((field(), -100i64..6_000), 1..30)
    ) {
        let mut editor = JudgmentEditor::new(total);
        for (field, value) in edits {
            let counts = *editor.edit(field, value);
            prop_assert_eq!(counts.total(), u64::from(total));
        }
    }

    /// Property: decimal addition is exact.
    #[test]
    fn decimal_add_exact(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000, scale in 0u32..6) {
        let sum = ExactDecimal::new(a, scale).add(&ExactDecimal::new(b, scale));
        prop_assert_eq!(sum, ExactDecimal::new(a + b, scale));
    }
}
