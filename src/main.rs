use anyhow::Result;
use clap::Parser;
use supplyscore::cli::{Cli, Commands};
use supplyscore::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            format,
            output,
            config,
        } => commands::score::run(commands::score::ScoreConfig {
            input,
            format,
            output,
            config,
        }),
        Commands::Risk {
            input,
            policy,
            format,
            output,
        } => commands::risk::run(commands::risk::RiskConfig {
            input,
            policy,
            format,
            output,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
