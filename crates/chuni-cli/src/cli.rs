//! CLI argument definitions for chuni-calc.

use std::path::PathBuf;

use chuni_core::config::rating::MAX_PRECISION;
use chuni_core::{Chart, ChartKey, Difficulty, ExactDecimal, Level};
use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chuni-calc")]
#[command(about = "CHUNITHM rating calculator", version)]
pub struct Args {
    /// Load calculator settings from a TOML file
    #[arg(long, value_name = "FILE", env = "CHUNI_CALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Fractional digits of computed ratings
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_PRECISION))
    )]
    pub precision: Option<u32>,

    /// Share of non-degraded notes that are JUSTICE CRITICAL (0.0 - 1.0)
    #[arg(long, global = true)]
    pub ratio: Option<f64>,

    /// Share of the degraded budget spent on MISS (0.0 - 1.0)
    #[arg(long, global = true)]
    pub miss_fraction: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Chart the calculation runs against
#[derive(ClapArgs, Debug, Clone)]
pub struct ChartArgs {
    /// Chart level, e.g. 13.5
    #[arg(long, short)]
    pub level: Level,

    /// Total note count of the chart
    #[arg(long, short)]
    pub notes: u32,

    /// Song ID, used to find the chart on the top list
    #[arg(long, default_value = "0")]
    pub song_id: u32,

    /// Difficulty (BAS, ADV, EXP, MAS, ULT, WE)
    #[arg(long, short, default_value = "MAS", value_parser = parse_difficulty)]
    pub difficulty: Difficulty,

    /// JSON list of best scores to build the top rating list from
    #[arg(long, value_name = "FILE")]
    pub top: Option<PathBuf>,
}

impl ChartArgs {
    pub fn chart(&self) -> chuni_core::Result<Chart> {
        Chart::new(
            ChartKey::new(self.song_id, self.difficulty),
            self.level,
            self.notes,
        )
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(s).map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum Command {
    /// Rating earned by a score
    Rating {
        #[command(flatten)]
        chart: ChartArgs,
        /// Achieved score (0 - 1010000)
        #[arg(long, short)]
        score: u32,
        /// Also show the judgment budget for this score
        #[arg(long)]
        budget: bool,
    },
    /// Minimum score for a target rating
    Score {
        #[command(flatten)]
        chart: ChartArgs,
        /// Target rating, e.g. 15.25
        #[arg(long, short)]
        rating: ExactDecimal,
        /// Also show the judgment budget for the resulting score
        #[arg(long)]
        budget: bool,
    },
    /// Score and rating from judgment counts (JUSTICE CRITICAL takes the rest)
    Notes {
        #[command(flatten)]
        chart: ChartArgs,
        #[arg(long, default_value = "0")]
        miss: u32,
        #[arg(long, default_value = "0")]
        attack: u32,
        #[arg(long, default_value = "0")]
        justice: u32,
    },
    /// Worst judgment spread that still reaches a score
    Budget {
        #[command(flatten)]
        chart: ChartArgs,
        /// Target score
        #[arg(long, short)]
        target: u32,
    },
    /// Score needed to raise the top rating average
    Top {
        #[command(flatten)]
        chart: ChartArgs,
        /// Increase of the top average; shows the maximum when omitted
        #[arg(long)]
        increase: Option<ExactDecimal>,
    },
    /// Minimum rating for every score rank on a level
    Ranks {
        /// Chart level, e.g. 13.5
        #[arg(long, short)]
        level: Level,
    },
}
