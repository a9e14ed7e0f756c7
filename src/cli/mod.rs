//! CLI command parsing.

use clap::{Parser, Subcommand};

use crate::core::Identifier;

/// repo-shell - browse a repository by its owner/repo identifier.
#[derive(Parser)]
#[command(name = "repo-shell")]
#[command(about = "Browse a repository by its owner/repo identifier")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Start from this identifier instead of the configured one.
    #[arg(short, long, global = true, value_parser = parse_identifier, env = "REPO_SHELL_IDENTIFIER")]
    pub identifier: Option<Identifier>,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the TUI interface.
    Tui,

    /// Validate an identifier without starting the TUI.
    Check {
        /// Text in owner/repo form.
        #[arg(value_name = "IDENTIFIER")]
        raw: String,
    },

    /// Manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration.
    Show,

    /// Show the configuration file path.
    Path,
}

fn parse_identifier(raw: &str) -> Result<Identifier, String> {
    Identifier::parse(raw).map_err(|e| e.to_string())
}

/// Validate `raw` and render it as pretty JSON.
///
/// # Errors
///
/// Returns an error if `raw` is not an owner/repo pair.
pub fn check(raw: &str) -> anyhow::Result<String> {
    let identifier = Identifier::parse(raw)?;
    Ok(serde_json::to_string_pretty(&identifier)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["repo-shell"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn identifier_flag_is_parsed() {
        let cli = Cli::try_parse_from(["repo-shell", "-i", "facebook/react", "tui"]).unwrap();
        assert_eq!(cli.identifier, Some(Identifier::new("facebook", "react")));
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn malformed_identifier_flag_is_rejected() {
        assert!(Cli::try_parse_from(["repo-shell", "--identifier", "a/b/c"]).is_err());
    }

    #[test]
    fn check_takes_raw_text() {
        let cli = Cli::try_parse_from(["repo-shell", "check", "badvalue"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Check { ref raw }) if raw == "badvalue"
        ));
    }

    #[test]
    fn check_alongside_global_identifier() {
        let cli =
            Cli::try_parse_from(["repo-shell", "-i", "a/b", "check", "facebook/react"]).unwrap();
        assert_eq!(cli.identifier, Some(Identifier::new("a", "b")));
        assert!(matches!(
            cli.command,
            Some(Commands::Check { ref raw }) if raw == "facebook/react"
        ));
    }

    #[test]
    fn check_renders_json() {
        let json = check("facebook/react").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["username"], "facebook");
        assert_eq!(value["repo"], "react");
    }

    #[test]
    fn check_rejects_malformed_input() {
        let err = check("badvalue").unwrap_err();
        assert!(err.to_string().contains("found 1 segment(s)"));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["repo-shell", "-vv", "config", "path"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Path
            })
        ));
    }
}
