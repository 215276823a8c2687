use anyhow::Result;
use chuni_cli::cli::{Args, Command};
use chuni_cli::{commands, config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chuni_cli=warn,chuni_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::resolve(&args)?;
    let json = args.json;

    match &args.command {
        Command::Rating {
            chart,
            score,
            budget,
        } => commands::rating::run(chart, *score, *budget, &config, json),
        Command::Score {
            chart,
            rating,
            budget,
        } => commands::score::run(chart, rating, *budget, &config, json),
        Command::Notes {
            chart,
            miss,
            attack,
            justice,
        } => commands::notes::run(chart, *miss, *attack, *justice, &config, json),
        Command::Budget { chart, target } => commands::budget::run(chart, *target, &config, json),
        Command::Top { chart, increase } => {
            commands::top::run(chart, increase.as_ref(), &config, json)
        }
        Command::Ranks { level } => commands::ranks::run(*level, json),
    }
}
