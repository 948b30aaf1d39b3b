//! CLI for sharein: a host simulator that delivers share events and bridge
//! calls against a directory-backed content provider.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sharein_core::config::{self, ShareConfig};
use sharein_core::IntentAction;
use std::path::PathBuf;

use commands::{run_call, run_completions, run_read, run_share};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sharein")]
#[command(about = "sharein: resolve shared-file intents into local file paths", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Event action to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    /// "Open with": the URI travels in the data field.
    View,
    /// "Share": the URI travels in the stream extra.
    Send,
}

impl From<ActionArg> for IntentAction {
    fn from(a: ActionArg) -> Self {
        match a {
            ActionArg::View => IntentAction::View,
            ActionArg::Send => IntentAction::Send,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Deliver a share/open event, then fetch the shared file once.
    Share {
        /// Locator of the shared content (file://, content://, ...).
        uri: String,
        #[arg(long, value_enum, default_value_t = ActionArg::View)]
        action: ActionArg,
        /// MIME type declared by the sender.
        #[arg(long)]
        mime: Option<String>,
        /// Directory serving content:// locators (default: current directory).
        #[arg(long, value_name = "DIR")]
        provider_root: Option<PathBuf>,
        /// Deliver the same event N times before fetching (lifecycle re-delivery).
        #[arg(long, default_value = "1", value_name = "N")]
        deliveries: u32,
    },

    /// Resolve a URI on demand and print the local path (or the content with --text).
    Read {
        uri: String,
        /// Print the content as text instead of materializing it.
        #[arg(long)]
        text: bool,
        #[arg(long, value_name = "DIR")]
        provider_root: Option<PathBuf>,
    },

    /// Dispatch a JSON method call (e.g. '{"method":"getSharedFile"}') and print the JSON result.
    Call {
        json: String,
        /// Deliver a VIEW event for this URI before the call.
        #[arg(long, value_name = "URI")]
        event: Option<String>,
        #[arg(long, value_name = "DIR")]
        provider_root: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn load_config() -> Result<ShareConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Share {
                uri,
                action,
                mime,
                provider_root,
                deliveries,
            } => {
                run_share(
                    &load_config()?,
                    &uri,
                    action.into(),
                    mime.as_deref(),
                    provider_root.as_deref(),
                    deliveries,
                )?;
            }
            CliCommand::Read {
                uri,
                text,
                provider_root,
            } => run_read(&load_config()?, &uri, text, provider_root.as_deref())?,
            CliCommand::Call {
                json,
                event,
                provider_root,
            } => {
                run_call(
                    &load_config()?,
                    &json,
                    event.as_deref(),
                    provider_root.as_deref(),
                )?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
