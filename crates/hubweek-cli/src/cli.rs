//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};

use hubweek_core::DEFAULT_HUB;

/// Hubweek - weekly hub staffing digest from Airtable to Slack
#[derive(Parser, Debug)]
#[command(name = "hubweek")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hub whose designers the report covers
    #[arg(long, default_value = DEFAULT_HUB, global = true)]
    pub hub: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tables of the configured base
    Tables,

    /// List designers with resolved name, hub and email fields
    Designers,

    /// List active focus projects staffed from the target hub
    Projects,

    /// Build the weekly digest and post it to the channel
    Post {
        /// Dry run: print the digest instead of posting
        #[arg(long = "test")]
        test: bool,

        /// Use the local mock dataset instead of the remote service
        #[arg(long = "use-mock")]
        use_mock: bool,
    },

    /// Post once now, then every Monday at 09:00
    Run {
        /// Dry run: print the digest instead of posting
        #[arg(long = "test")]
        test: bool,

        /// Use the local mock dataset instead of the remote service
        #[arg(long = "use-mock")]
        use_mock: bool,
    },

    /// Check connectivity to the base and report accessible tables
    Check,
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "hubweek_core=debug,hubweek_airtable=debug,hubweek_slack=debug,info",
            2 => "hubweek_core=trace,hubweek_airtable=trace,hubweek_slack=trace,debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_post_flags() {
        let cli = Cli::parse_from(["hubweek", "post", "--test", "--use-mock"]);
        match cli.command {
            Commands::Post { test, use_mock } => {
                assert!(test);
                assert!(use_mock);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_hub_override() {
        let cli = Cli::parse_from(["hubweek", "--hub", "Chicago", "projects"]);
        assert_eq!(cli.hub, "Chicago");
    }
}
