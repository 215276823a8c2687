use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use tracing::trace;

use crate::config::score::{ATTACK_WEIGHT, JUSTICE_CRITICAL_WEIGHT, JUSTICE_WEIGHT, MISS_WEIGHT};
use crate::error::{Error, Result};

/// One of the four judgment grades a note can receive
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
pub enum JudgmentField {
    #[strum(serialize = "MISS")]
    Miss,
    #[strum(serialize = "ATTACK")]
    Attack,
    #[strum(serialize = "JUSTICE")]
    Justice,
    #[strum(serialize = "JUSTICE CRITICAL")]
    JusticeCritical,
}

impl JudgmentField {
    /// Score weight of one note with this grade, before dividing by the note count
    pub fn weight(&self) -> u64 {
        match self {
            Self::Miss => MISS_WEIGHT,
            Self::Attack => ATTACK_WEIGHT,
            Self::Justice => JUSTICE_WEIGHT,
            Self::JusticeCritical => JUSTICE_CRITICAL_WEIGHT,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for JudgmentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Note counts per judgment grade for one play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentAllocation {
    pub miss: u32,
    pub attack: u32,
    pub justice: u32,
    pub justice_critical: u32,
}

impl JudgmentAllocation {
    /// Every note a JUSTICE CRITICAL
    pub fn all_justice_critical(total_notes: u32) -> Self {
        Self {
            justice_critical: total_notes,
            ..Default::default()
        }
    }

    pub fn get(&self, field: JudgmentField) -> u32 {
        match field {
            JudgmentField::Miss => self.miss,
            JudgmentField::Attack => self.attack,
            JudgmentField::Justice => self.justice,
            JudgmentField::JusticeCritical => self.justice_critical,
        }
    }

    pub fn set(&mut self, field: JudgmentField, value: u32) {
        match field {
            JudgmentField::Miss => self.miss = value,
            JudgmentField::Attack => self.attack = value,
            JudgmentField::Justice => self.justice = value,
            JudgmentField::JusticeCritical => self.justice_critical = value,
        }
    }

    /// Total note count (miss + attack + justice + justice critical)
    pub fn total(&self) -> u64 {
        u64::from(self.miss)
            + u64::from(self.attack)
            + u64::from(self.justice)
            + u64::from(self.justice_critical)
    }

    /// Score earned by these judgments, rounded down.
    ///
    /// `floor((jc * 1010000 + j * 1000000 + attack * 500000) / notes)`
    pub fn score(&self) -> Result<u32> {
        let notes = self.total();
        if notes == 0 {
            return Err(Error::InvalidNoteCount);
        }
        let weighted = u64::from(self.justice_critical) * JUSTICE_CRITICAL_WEIGHT
            + u64::from(self.justice) * JUSTICE_WEIGHT
            + u64::from(self.attack) * ATTACK_WEIGHT
            + u64::from(self.miss) * MISS_WEIGHT;
        // Bounded by JUSTICE_CRITICAL_WEIGHT since every weight is at most that.
        Ok((weighted / notes) as u32)
    }
}

const DEFAULT_ORDER: [JudgmentField; 4] = [
    JudgmentField::Miss,
    JudgmentField::Attack,
    JudgmentField::Justice,
    JudgmentField::JusticeCritical,
];

/// Edits one judgment count at a time while keeping the total fixed.
///
/// Fields are tracked in most-recently-edited order. After an edit the
/// overflow is taken from the least recently edited fields first, and a
/// deficit is given to the least recently edited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgmentEditor {
    counts: JudgmentAllocation,
    order: [JudgmentField; 4],
    total_notes: u32,
}

impl JudgmentEditor {
    pub fn new(total_notes: u32) -> Self {
        Self {
            counts: JudgmentAllocation::all_justice_critical(total_notes),
            order: DEFAULT_ORDER,
            total_notes,
        }
    }

    /// Start over with every note a JUSTICE CRITICAL.
    pub fn reset(&mut self, total_notes: u32) {
        *self = Self::new(total_notes);
    }

    pub fn counts(&self) -> &JudgmentAllocation {
        &self.counts
    }

    pub fn order(&self) -> &[JudgmentField; 4] {
        &self.order
    }

    pub fn total_notes(&self) -> u32 {
        self.total_notes
    }

    /// Set `field` to `value` (clamped to `0..=total_notes`) and rebalance the rest.
    pub fn edit(&mut self, field: JudgmentField, value: i64) -> &JudgmentAllocation {
        let value = value.clamp(0, i64::from(self.total_notes)) as u32;
        self.counts.set(field, value);

        if let Some(pos) = self.order.iter().position(|&f| f == field) {
            self.order[..=pos].rotate_right(1);
        }

        let total = u64::from(self.total_notes);
        let sum = self.counts.total();

        if sum < total {
            let last = self.order[self.order.len() - 1];
            let deficit = (total - sum) as u32;
            self.counts.set(last, self.counts.get(last) + deficit);
            trace!("Gave {} notes to {}", deficit, last);
        } else if sum > total {
            let mut overflow = sum - total;
            for &key in self.order.iter().rev() {
                if overflow == 0 {
                    break;
                }
                let current = self.counts.get(key);
                let taken = u64::from(current).min(overflow);
                self.counts.set(key, current - taken as u32);
                overflow -= taken;
                trace!("Took {} notes from {}", taken, key);
            }
        }

        debug_assert_eq!(self.counts.total(), total);
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_all_justice_critical() {
        let alloc = JudgmentAllocation::all_justice_critical(2000);
        assert_eq!(alloc.score().unwrap(), 1_010_000);
    }

    #[test]
    fn test_score_mixed() {
        let alloc = JudgmentAllocation {
            miss: 1,
            attack: 2,
            justice: 10,
            justice_critical: 987,
        };
        // (987 * 1010000 + 10 * 1000000 + 2 * 500000) / 1000 = 1007870
        assert_eq!(alloc.score().unwrap(), 1_007_870);
    }

    #[test]
    fn test_score_rounds_down() {
        let alloc = JudgmentAllocation {
            justice: 1,
            justice_critical: 2,
            ..Default::default()
        };
        // 3020000 / 3 = 1006666.67
        assert_eq!(alloc.score().unwrap(), 1_006_666);
    }

    #[test]
    fn test_score_requires_notes() {
        assert!(matches!(
            JudgmentAllocation::default().score(),
            Err(Error::InvalidNoteCount)
        ));
    }

    #[test]
    fn test_editor_starts_all_justice_critical() {
        let editor = JudgmentEditor::new(1500);
        assert_eq!(editor.counts().justice_critical, 1500);
        assert_eq!(editor.counts().total(), 1500);
    }

    #[test]
    fn test_edit_takes_overflow_from_least_recent() {
        let mut editor = JudgmentEditor::new(1000);
        let counts = *editor.edit(JudgmentField::Justice, 30);
        assert_eq!(counts.justice, 30);
        assert_eq!(counts.justice_critical, 970);
        assert_eq!(
            editor.order(),
            &[
                JudgmentField::Justice,
                JudgmentField::Miss,
                JudgmentField::Attack,
                JudgmentField::JusticeCritical,
            ]
        );
    }

    #[test]
    fn test_edit_gives_deficit_to_least_recent() {
        let mut editor = JudgmentEditor::new(1000);
        editor.edit(JudgmentField::Justice, 30);
        let counts = *editor.edit(JudgmentField::Justice, 10);
        assert_eq!(counts.justice, 10);
        assert_eq!(counts.justice_critical, 990);
    }

    #[test]
    fn test_edit_cascades_through_fields() {
        let mut editor = JudgmentEditor::new(100);
        editor.edit(JudgmentField::Miss, 10);
        editor.edit(JudgmentField::Attack, 20);
        // JC now holds 70; asking for 95 justice drains JC then miss.
        let counts = *editor.edit(JudgmentField::Justice, 95);
        assert_eq!(counts.justice, 95);
        assert_eq!(counts.justice_critical, 0);
        assert_eq!(counts.miss, 0);
        assert_eq!(counts.attack, 5);
        assert_eq!(counts.total(), 100);
    }

    #[test]
    fn test_edit_clamps_input() {
        let mut editor = JudgmentEditor::new(100);
        let counts = *editor.edit(JudgmentField::Miss, 500);
        assert_eq!(counts.miss, 100);
        assert_eq!(counts.justice_critical, 0);

        let counts = *editor.edit(JudgmentField::Miss, -5);
        assert_eq!(counts.miss, 0);
        assert_eq!(counts.total(), 100);
    }

    #[test]
    fn test_reset() {
        let mut editor = JudgmentEditor::new(100);
        editor.edit(JudgmentField::Attack, 50);
        editor.reset(200);
        assert_eq!(editor.counts(), &JudgmentAllocation::all_justice_critical(200));
        assert_eq!(editor.total_notes(), 200);
    }
}
