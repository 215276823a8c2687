//! Console output formatting with colored display

use std::fmt::Write as _;

use chuni_core::config::top::INCREASE_DISPLAY_PLACES;
use chuni_core::{
    BudgetOutcome, Chart, Difficulty, IncreaseTarget, JudgmentResult, Level, RatingResult,
    ScoreRank, ScoreResult, ScoreTarget, TopProjection,
};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Chart header: "2338 [MAS 13.5] 1000 notes"
pub fn format_chart(chart: &Chart) -> String {
    format!(
        "{} [{} {}] {} notes",
        chart.key.song_id.bold(),
        format_colored_difficulty(&chart.key.difficulty),
        chart.level,
        chart.total_judge_count
    )
}

pub fn format_rating(result: &RatingResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  SCORE  : {} {}", result.score, format_colored_rank(&result.rank));
    let _ = write!(output, "  RATING : {}", result.rating.bold());
    if let Some(top) = &result.top {
        let _ = write!(output, "\n  TOP    : {}", format_projection(top));
    }
    output
}

pub fn format_score(result: &ScoreResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  RATING : {}", result.rating);
    match (result.score, result.rank) {
        (ScoreTarget::Score(score), Some(rank)) => {
            let _ = write!(output, "  SCORE  : {} {}", score.bold(), format_colored_rank(&rank));
        }
        _ => {
            let _ = write!(output, "  SCORE  : {}", "unachievable".red());
        }
    }
    if let Some(top) = &result.top {
        let _ = write!(output, "\n  TOP    : {}", format_projection(top));
    }
    output
}

pub fn format_judgments(result: &JudgmentResult) -> String {
    let counts = &result.allocation;
    let mut output = String::new();
    let _ = writeln!(
        output,
        "  JUDGE  : {}/{}/{}/{}",
        counts.justice_critical.truecolor(255, 200, 0),
        counts.justice.truecolor(255, 140, 0),
        counts.attack.green(),
        counts.miss.dimmed(),
    );
    let _ = writeln!(output, "  SCORE  : {} {}", result.score, format_colored_rank(&result.rank));
    let _ = write!(output, "  RATING : {}", result.rating.bold());
    if let Some(top) = &result.top {
        let _ = write!(output, "\n  TOP    : {}", format_projection(top));
    }
    output
}

pub fn format_budget(outcome: &BudgetOutcome) -> String {
    let Some(budget) = outcome.budget() else {
        return format!("  BUDGET : {}", "unachievable at this ratio".red());
    };
    let counts = &budget.allocation;
    let mut output = String::new();
    let _ = writeln!(output, "  BUDGET : {} (MISS = 2, ATTACK = 1)", budget.max_degraded.bold());
    let _ = write!(
        output,
        "  JUDGE  : {}/{}/{}/{}",
        counts.justice_critical.truecolor(255, 200, 0),
        counts.justice.truecolor(255, 140, 0),
        counts.attack.green(),
        counts.miss.dimmed(),
    );
    output
}

/// "+0.031, #1"
pub fn format_projection(projection: &TopProjection) -> String {
    let increase = format!("+{}", projection.increase.to_fixed(INCREASE_DISPLAY_PLACES));
    match projection.rank {
        Some(rank) => format!("{}, #{}", increase.green(), rank),
        None => increase.green().to_string(),
    }
}

pub fn format_increase_target(target: &IncreaseTarget) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  RATING : {}", target.rating);
    match target.score {
        ScoreTarget::Score(score) => {
            let _ = write!(output, "  SCORE  : {}", score.bold());
        }
        ScoreTarget::Unachievable => {
            let _ = write!(output, "  SCORE  : {}", "unachievable".red());
        }
    }
    if let Some(average) = &target.average {
        let _ = write!(output, "\n  TOP    : {}", average);
        if let Some(rank) = target.rank {
            let _ = write!(output, ", #{}", rank);
        }
    }
    output
}

/// Minimum rating per rank, highest rank first.
pub fn format_ranks(level: Level) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  LEVEL  : {}", level);
    for rank in ScoreRank::iter().rev() {
        let _ = writeln!(
            output,
            "  {:>7}  {:>5}  {}",
            rank.threshold(),
            rank.min_rating(level).to_fixed(2),
            format_colored_rank(&rank)
        );
    }
    output.trim_end().to_string()
}

/// Format difficulty with color
fn format_colored_difficulty(difficulty: &Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::Basic => name.green().to_string(),
        Difficulty::Advanced => name.yellow().to_string(),
        Difficulty::Expert => name.red().to_string(),
        Difficulty::Master => name.purple().to_string(),
        Difficulty::Ultima => name.truecolor(120, 0, 0).bold().to_string(),
        Difficulty::WorldsEnd => name.bold().to_string(),
    }
}

/// Format rank with color
fn format_colored_rank(rank: &ScoreRank) -> String {
    let name = rank.short_name();
    match rank {
        ScoreRank::D => name.dimmed().to_string(),
        ScoreRank::C | ScoreRank::B | ScoreRank::Bb | ScoreRank::Bbb => {
            name.truecolor(110, 170, 255).to_string()
        }
        ScoreRank::A | ScoreRank::Aa | ScoreRank::Aaa => name.truecolor(255, 80, 80).to_string(),
        ScoreRank::S | ScoreRank::SPlus => name.truecolor(255, 200, 0).to_string(),
        ScoreRank::Ss | ScoreRank::SsPlus => name.truecolor(255, 200, 0).bold().to_string(),
        ScoreRank::Sss | ScoreRank::SssPlus => name.truecolor(255, 240, 150).bold().to_string(),
    }
}
