//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate command handlers.

use crate::commands::{self, LiveOverrides};
use crate::logging;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

/// A live scrolling audio waveform for the terminal
#[derive(Parser)]
#[command(name = "wavetrail")]
#[command(version)]
#[command(about = "A live scrolling audio waveform for the terminal")]
#[command(long_about = "A live scrolling audio waveform for the terminal.\n\nDEFAULT COMMAND:\n    If no command is specified, 'live' is used by default.\n    Live options (--fullscreen, --bar-width, --no-animate) can be used without explicitly saying 'live'.\n\nKEYS:\n    space    pause / resume\n    s        stop / start\n    f        toggle fullscreen\n    a        toggle live bar\n    q, Esc   quit\n\nSIGNALS:\n    SIGUSR1  pause / resume")]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/wavetrail/wavetrail.toml\n    Logs:               ~/.local/state/wavetrail/wavetrail.log.*\n    Log filter:         WAVETRAIL_LOG or RUST_LOG (default: info)"
)]
struct Cli {
    #[command(flatten)]
    live: LiveArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
struct LiveArgs {
    /// Scroll across the whole width instead of the left half
    #[arg(long, global = true)]
    fullscreen: bool,

    /// Bar width in terminal columns (overrides the config file)
    #[arg(long, value_name = "N", global = true)]
    bar_width: Option<u32>,

    /// Hide the live bar for the current peak
    #[arg(long, global = true)]
    no_animate: bool,
}

impl From<LiveArgs> for LiveOverrides {
    fn from(args: LiveArgs) -> Self {
        LiveOverrides {
            fullscreen: args.fullscreen,
            bar_width: args.bar_width,
            no_animate: args.no_animate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the live scrolling waveform (default)
    ///
    /// Space pauses, 's' stops and restarts, 'f' toggles fullscreen,
    /// 'a' toggles the live bar, Escape/q quits.
    #[command(visible_alias = "l")]
    Live,

    /// Open configuration file in your preferred editor
    ///
    /// Writes the default configuration first if none exists.
    /// Uses $EDITOR environment variable or falls back to nano/vi.
    #[command(visible_alias = "c")]
    Config,

    /// Show recent log entries from the application
    ///
    /// Display the last 50 lines of the most recent log file.
    Logs,

    /// Generate shell completion script
    ///
    /// Examples:
    ///   wavetrail completions bash > wavetrail.bash
    ///   wavetrail completions zsh > _wavetrail
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the application based on command-line arguments.
///
/// # Errors
/// - If logging initialization fails
/// - If command execution fails
pub fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Commands that don't need logging
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "wavetrail", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Logs) => return commands::handle_logs(),
        _ => {}
    }

    logging::init_logging()?;

    match cli.command {
        None | Some(Commands::Live) => commands::handle_live(cli.live.into())?,
        Some(Commands::Config) => commands::handle_config()?,
        Some(Commands::Completions { .. }) | Some(Commands::Logs) => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_takes_live_options() {
        let cli = Cli::try_parse_from(["wavetrail", "--fullscreen", "--bar-width", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.live.fullscreen);
        assert_eq!(cli.live.bar_width, Some(3));
        assert!(!cli.live.no_animate);
    }

    #[test]
    fn test_live_subcommand_accepts_options() {
        let cli = Cli::try_parse_from(["wavetrail", "live", "--no-animate"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Live)));
        assert!(cli.live.no_animate);
    }
}
