//! Top rating list increase.

use anyhow::{Result, bail};
use chuni_core::{CalculatorConfig, ExactDecimal};

use super::{calculator, emit};
use crate::cli::ChartArgs;
use crate::display;

/// Run the top command
pub fn run(
    chart: &ChartArgs,
    increase: Option<&ExactDecimal>,
    config: &CalculatorConfig,
    json: bool,
) -> Result<()> {
    if chart.top.is_none() {
        bail!("--top is required for the top command");
    }
    let calc = calculator(chart, config)?;

    let Some(max) = calc.max_top_increase() else {
        eprintln!("This chart cannot increase your top rating.");
        return Ok(());
    };

    match increase {
        None => emit(&calc, json, &max, || {
            format!("  MAX    : {}", display::format_projection(&max))
        }),
        Some(increase) => {
            if increase.is_negative() {
                bail!("Increase must not be negative");
            }
            if *increase > max.increase {
                eprintln!("Requested increase is above the maximum of {}", max.increase);
            }
            let Some(target) = calc.top_increase(increase) else {
                return Ok(());
            };
            emit(&calc, json, &target, || display::format_increase_target(&target))
        }
    }
}
