//! CLI command definitions and handlers

mod init;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use report::ReportOptions;

/// gitowners - per-file ownership attribution from git history
#[derive(Parser, Debug)]
#[command(name = "gitowners")]
#[command(
    version,
    about = "Attribute every file in a git repository to the people who touched it",
    long_about = "gitowners walks the full history of a repository, earliest commit first, \
and tracks which contributors added or modified every file (following renames). \
Each file at the tip is then labelled relative to one distinguished contributor:\n\n  \
Complete   only they touched it\n  \
Partial    they and others touched it\n  \
Inherited  others only, but it existed before their last commit\n  \
None       created after their last commit and never touched by them\n\n\
The distinguished contributor is configured in gitowners.toml (see `gitowners init`).",
    after_help = "\
Examples:
  gitowners .                             Report ownership for the current repository
  gitowners . report --format json        JSON output for scripting
  gitowners . report --only complete      Only files owned outright
  gitowners /path/to/repo contributors    List every contributor ever seen"
)]
pub struct Cli {
    /// Path to repository (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the history and print one ownership label per file (default)
    Report {
        /// Output format: text, json (default: from gitowners.toml, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Only show files with these labels
        #[arg(long, value_delimiter = ',', value_parser = ["complete", "partial", "inherited", "none"])]
        only: Vec<String>,

        /// Skip checking that every file from history exists in the working tree
        #[arg(long)]
        no_verify: bool,
    },

    /// List every contributor credited with an add or modify
    Contributors {
        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Write an example gitowners.toml into the repository
    Init,
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run(&cli.path),

        Some(Commands::Report {
            format,
            output,
            only,
            no_verify,
        }) => report::run(
            &cli.path,
            ReportOptions {
                format,
                output,
                only,
                no_verify,
            },
        ),

        Some(Commands::Contributors { format }) => report::run_contributors(&cli.path, format),

        None => report::run(&cli.path, ReportOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_report() {
        let cli = Cli::try_parse_from(["gitowners", "/tmp/repo"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/tmp/repo"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_report_flags() {
        let cli = Cli::try_parse_from([
            "gitowners",
            ".",
            "report",
            "--format",
            "json",
            "--only",
            "complete,partial",
            "--no-verify",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report {
                format,
                only,
                no_verify,
                ..
            }) => {
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(only, vec!["complete", "partial"]);
                assert!(no_verify);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(Cli::try_parse_from(["gitowners", ".", "report", "--only", "most"]).is_err());
    }
}
