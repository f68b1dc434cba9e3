use clap::{ArgAction, Parser};

use crate::constants::DEFAULT_MATCH_LIMIT;

#[derive(Parser)]
#[command(
    name = "account-matcher",
    about = "Match raw customer names to known accounts",
    long_about = "Fuzzy-matches raw customer names (as they appear in point-of-sale exports) \
                  against known accounts and their aliases, using the database's trigram \
                  similarity. You must specify either --server mode, --seed, or a --query.",
    version
)]
pub struct Args {
    /// The raw customer name to look up
    #[arg(
        short,
        long,
        help = "The raw customer name to match against accounts and aliases",
        required_unless_present_any = ["server", "seed"]
    )]
    pub query: Option<String>,

    /// Show all candidate matches
    #[arg(
        long,
        help = "Show all candidate matches instead of just the best match",
        action = ArgAction::SetTrue
    )]
    pub all: bool,

    /// Candidate cap used with --all
    #[arg(
        short,
        long,
        help = "Maximum number of candidates to show with --all",
        default_value_t = DEFAULT_MATCH_LIMIT
    )]
    pub limit: usize,

    /// Run in server mode
    #[arg(
        long,
        help = "Run as an HTTP server instead of CLI mode",
        conflicts_with = "query",
        action = ArgAction::SetTrue
    )]
    pub server: bool,

    /// Create schema and sample data, then exit
    #[arg(
        long,
        help = "Create the dev schema and sample data, then exit",
        action = ArgAction::SetTrue
    )]
    pub seed: bool,

    /// Enable debug output
    #[arg(
        long,
        help = "Enable debug logging",
        action = ArgAction::SetTrue
    )]
    pub debug: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
