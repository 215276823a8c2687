//! CLI command implementations.
//!
//! Every command builds a `ScoreCalculator` for the chart given on the command
//! line and prints either colored text or JSON.

pub mod budget;
pub mod notes;
pub mod ranks;
pub mod rating;
pub mod score;
pub mod top;

use anyhow::{Context, Result};
use chuni_core::{CalculatorConfig, ScoreCalculator};
use serde::Serialize;

use crate::cli::ChartArgs;
use crate::display;
use crate::top_list::load_top;

/// Calculator for the chart, with the top list attached when one was given.
pub fn calculator(args: &ChartArgs, config: &CalculatorConfig) -> Result<ScoreCalculator> {
    let chart = args.chart().context("Invalid chart")?;
    let calculator = ScoreCalculator::new(chart, config.clone());

    match &args.top {
        Some(path) => Ok(calculator.with_top(load_top(path, config)?)),
        None => Ok(calculator),
    }
}

/// Print `value` as pretty JSON, or the chart header and `text`.
pub fn emit<T: Serialize>(
    calculator: &ScoreCalculator,
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", display::format_chart(calculator.chart()));
        println!("{}", text());
    }
    Ok(())
}
