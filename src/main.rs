use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use repo_shell::{
    Config,
    cli::{Cli, Commands, ConfigCommands},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None | Some(Commands::Tui) => {
            let config = Config::load()?;
            let initial = cli
                .identifier
                .unwrap_or_else(|| config.shell.identifier());
            repo_shell::tui::run(initial, &config).await?;
        }

        Some(Commands::Check { raw }) => {
            println!("{}", repo_shell::cli::check(&raw)?);
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                let config = Config::load()?;
                println!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigCommands::Path => {
                let path = Config::config_path()?;
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}
