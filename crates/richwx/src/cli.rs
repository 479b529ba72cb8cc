//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use richwx_render::OutputMode;

use crate::api::DEFAULT_API_BASE;

/// A fun little tool that uses the National Weather Service API to display
/// weather data in the terminal.
#[derive(Debug, Parser)]
#[command(name = "richwx", version, about)]
pub struct Cli {
    /// Output mode: auto, term, text, term-debug, or json
    #[arg(long, global = true, value_name = "MODE", default_value = "auto")]
    pub output: OutputMode,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// User agent settings file
    #[arg(long, global = true, value_name = "PATH", env = "RICHWX_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Base URL of the NWS API
    #[arg(long, global = true, value_name = "URL", env = "RICHWX_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Provides an introduction to ensure that the CLI works.
    Intro,

    /// Functionality for displaying NWS alerts.
    #[command(subcommand)]
    Alerts(AlertsCommand),

    /// Sets metadata for NWS API maintainers.
    ///
    /// The maintainers encourage clients to send contact details so they can
    /// reach you if a security event occurs. The details are sent as the
    /// User-Agent header and saved locally; `richwx auth purge` removes them.
    #[command(subcommand)]
    Auth(AuthCommand),
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// Displays NWS alerts for a 2 letter state abbreviation (i.e. FL) or a full state name.
    State {
        state: String,
        /// Add a column with each alert's ID
        #[arg(long)]
        show_id: bool,
    },
    /// Displays an alert's information by its ID.
    Id { id: String },
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sets contact information to be sent to the NWS API.
    Set {
        #[arg(required = true, num_args = 1..)]
        contact: Vec<String>,
    },
    /// Purges the metadata information locally.
    Purge,
    /// Checks the current user agent information.
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alerts_state() {
        let cli = Cli::try_parse_from(["richwx", "alerts", "state", "FL", "--show-id"]).unwrap();
        match cli.command {
            Command::Alerts(AlertsCommand::State { state, show_id }) => {
                assert_eq!(state, "FL");
                assert!(show_id);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, OutputMode::Auto);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["richwx", "intro", "--output", "term-debug", "-vv"]).unwrap();
        assert_eq!(cli.output, OutputMode::TermDebug);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bad_output_mode() {
        assert!(Cli::try_parse_from(["richwx", "intro", "--output", "html"]).is_err());
    }

    #[test]
    fn test_auth_set_collects_words() {
        let cli = Cli::try_parse_from(["richwx", "auth", "set", "wx", "fan,", "me@example.com"]).unwrap();
        match cli.command {
            Command::Auth(AuthCommand::Set { contact }) => {
                assert_eq!(contact.join(" "), "wx fan, me@example.com");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_auth_set_requires_contact() {
        assert!(Cli::try_parse_from(["richwx", "auth", "set"]).is_err());
    }
}
