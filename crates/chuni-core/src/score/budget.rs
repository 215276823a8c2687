//! Degraded-judgment budget for reaching a target score.
//!
//! A MISS costs two budget units and an ATTACK costs one: one MISS plus one
//! JUSTICE scores exactly the same as two ATTACKs.

use serde::Serialize;
use tracing::debug;

use super::JudgmentAllocation;
use crate::config::clamp_unit;
use crate::config::score::ATTACK_FLOOR;

/// Result of [`solve_budget`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetOutcome {
    Achievable(JudgmentBudget),
    /// The target cannot be reached at the requested JUSTICE CRITICAL ratio
    Unachievable,
}

impl BudgetOutcome {
    pub fn budget(&self) -> Option<&JudgmentBudget> {
        match self {
            Self::Achievable(budget) => Some(budget),
            Self::Unachievable => None,
        }
    }

    pub fn is_achievable(&self) -> bool {
        matches!(self, Self::Achievable(_))
    }
}

/// Worst judgment spread that still reaches a target score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JudgmentBudget {
    /// Degraded budget in units (ATTACK = 1, MISS = 2)
    pub max_degraded: u32,
    pub allocation: JudgmentAllocation,
}

/// Largest degraded budget that still reaches `target_score`.
///
/// `None` when the target is out of reach at this ratio. Targets at or below
/// 500,000 accept any spread, so the whole chart is budget.
///
/// This departs from the plain closed form when flooring the JUSTICE CRITICAL
/// count loses score: the result is the largest budget whose floored split
/// still reaches the target, or `None` if even zero does not.
pub fn max_degraded_budget(total_notes: u32, target_score: u32, ratio: f64) -> Option<u32> {
    if target_score <= ATTACK_FLOOR {
        return Some(total_notes);
    }

    let ratio = clamp_unit(ratio, 1.0);
    let notes = f64::from(total_notes);
    let target = f64::from(target_score);
    let estimate =
        (notes * (10_000.0 * ratio - target + 1_000_000.0) / (10_000.0 * (ratio + 50.0))).floor();
    if estimate < 0.0 {
        return None;
    }

    // The closed form assumes fractional JUSTICE CRITICAL counts; walk down
    // until the floored split really clears the target.
    let mut budget = (estimate as u32).min(total_notes);
    loop {
        let score = attack_only(total_notes, budget, ratio).score().unwrap_or(0);
        if score >= target_score {
            return Some(budget);
        }
        if budget == 0 {
            return None;
        }
        budget -= 1;
    }
}

/// `budget` ATTACKs, the rest split by `ratio` into JUSTICE CRITICAL and JUSTICE.
fn attack_only(total_notes: u32, budget: u32, ratio: f64) -> JudgmentAllocation {
    let remaining = total_notes - budget;
    let justice_critical = (f64::from(remaining) * ratio).floor() as u32;
    JudgmentAllocation {
        miss: 0,
        attack: budget,
        justice: remaining - justice_critical,
        justice_critical,
    }
}

/// Split a degraded budget into MISS and ATTACK counts.
///
/// `miss = ceil(min(budget * miss_fraction, floor(budget / 2)))`,
/// `attack = budget - 2 * miss`.
pub fn split_degraded(budget: u32, miss_fraction: f64) -> (u32, u32) {
    let miss_fraction = clamp_unit(miss_fraction, 0.0);
    let miss = (f64::from(budget) * miss_fraction)
        .min(f64::from(budget / 2))
        .ceil() as u32;
    (miss, budget - 2 * miss)
}

/// Solve the full judgment spread for a target score.
///
/// Each MISS frees one note, which is credited as a JUSTICE so the four
/// counts always add up to `total_notes` and the score is unchanged.
pub fn solve_budget(
    total_notes: u32,
    target_score: u32,
    ratio: f64,
    miss_fraction: f64,
) -> BudgetOutcome {
    let ratio = clamp_unit(ratio, 1.0);
    let Some(max_degraded) = max_degraded_budget(total_notes, target_score, ratio) else {
        debug!(
            "Target {} unreachable with {} notes at ratio {}",
            target_score, total_notes, ratio
        );
        return BudgetOutcome::Unachievable;
    };

    let (miss, attack) = split_degraded(max_degraded, miss_fraction);
    let base = attack_only(total_notes, max_degraded, ratio);
    let allocation = JudgmentAllocation {
        miss,
        attack,
        justice: base.justice + miss,
        justice_critical: base.justice_critical,
    };
    debug!(
        "Target {}: budget {} ({} miss, {} attack)",
        target_score, max_degraded, miss, attack
    );
    debug_assert_eq!(allocation.total(), u64::from(total_notes));

    BudgetOutcome::Achievable(JudgmentBudget {
        max_degraded,
        allocation,
    })
}

/// MISS/ATTACK split of a fixed degraded budget, edited one side at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegradedSplit {
    budget: u32,
    miss: u32,
    attack: u32,
}

impl DegradedSplit {
    pub fn new(budget: u32, miss_fraction: f64) -> Self {
        let (miss, attack) = split_degraded(budget, miss_fraction);
        Self {
            budget,
            miss,
            attack,
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn miss(&self) -> u32 {
        self.miss
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    /// Share of the budget's note slots taken by MISS.
    pub fn miss_fraction(&self) -> f64 {
        if self.budget == 0 {
            0.0
        } else {
            f64::from(self.miss) / f64::from(self.budget)
        }
    }

    /// Set the MISS count (clamped to `budget / 2`); ATTACK takes the rest.
    pub fn with_miss(self, miss: u32) -> Self {
        let miss = miss.min(self.budget / 2);
        Self {
            miss,
            attack: self.budget - 2 * miss,
            ..self
        }
    }

    /// Set the ATTACK count (clamped to `budget`); MISS fills what remains.
    ///
    /// With `snap`, a lowered ATTACK rounds MISS up and ATTACK is re-derived
    /// from it so the budget is used exactly.
    pub fn with_attack(self, attack: u32, snap: bool) -> Self {
        let attack = attack.min(self.budget);
        let freed = self.budget - attack;
        let miss = if snap && attack < self.attack {
            freed.div_ceil(2)
        } else {
            freed / 2
        }
        .min(self.budget / 2);
        let attack = if snap {
            self.budget - 2 * miss
        } else {
            attack
        };
        Self {
            miss,
            attack,
            ..self
        }
    }
}
