//! Command-line interface for groupctl
//!
//! Every invocation targets one GoPhish instance (`--url`) and runs exactly
//! one subcommand:
//!
//! - `create` uploads a contact file as a new group, optionally sampled
//! - `list` shows every group with its unique target count
//! - `show` prints the targets of one group
//! - `search` looks a contact up across all groups
//! - `delete` removes a group by id
//!
//! The API key is read from `--api-key`, `GOPHISH_API_KEY`, or a `.env` file.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::SearchError;
use crate::groups::SearchCriteria;
use crate::sample::SampleRequest;

/// Main command-line interface structure for groupctl
///
/// Global options apply to every subcommand.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use groupctl::cli::{Cli, Commands};
///
/// let cli = Cli::parse_from(["groupctl", "-u", "phish.example.com", "list"]);
/// assert!(matches!(cli.command, Commands::List));
/// assert_eq!(cli.timeout_ms, 10000);
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "groupctl",
    about = "Create, inspect, search and delete GoPhish target groups",
    version
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// GoPhish instance: a bare host (port 3333 assumed), host:port, or full URL
    #[arg(short = 'u', long = "url")]
    pub instance: String,

    /// API key; falls back to GOPHISH_API_KEY from the environment or .env
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short = 't', long, default_value = "10000")]
    pub timeout_ms: u64,

    /// Accept a self-signed admin certificate
    #[arg(long)]
    pub insecure: bool,
}

/// Available subcommands for groupctl
///
/// # Examples
///
/// ```text
/// groupctl -u phish.example.com create --file staff.csv --name "Q3 Finance" --randomize --count 40
/// groupctl -u phish.example.com list
/// groupctl -u phish.example.com show --name "Q3 Finance"
/// groupctl -u phish.example.com search --email jdoe@example.com
/// groupctl -u phish.example.com delete --id 12
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a group from a delimited contact file
    ///
    /// The file needs a header row with an email column; first name, last
    /// name and position columns are picked up when present. Rows without an
    /// email are reported and skipped.
    Create(CreateArgs),

    /// List existing groups with their number of unique targets
    List,

    /// Show the targets of one group
    Show {
        /// Exact (case-sensitive) group name
        #[arg(short, long)]
        name: String,
    },

    /// Search every group for a contact by email or by first and last name
    Search(SearchArgs),

    /// Delete a group by its numeric id
    Delete {
        /// Group id as shown by `list`
        #[arg(long)]
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Contact file with a header row
    #[arg(short, long)]
    pub file: PathBuf,

    /// Name of the group to create
    #[arg(short, long)]
    pub name: String,

    /// Field delimiter (a single character, or `tab`)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Upload a random subset of the contacts instead of all of them
    #[arg(short, long)]
    pub randomize: bool,

    /// Exact number of targets to select (requires --randomize)
    #[arg(short, long, requires = "randomize")]
    pub count: Option<usize>,
}

impl CreateArgs {
    pub fn sample_request(&self) -> SampleRequest {
        SampleRequest {
            randomize: self.randomize,
            target_count: self.count,
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Email address of the contact
    #[arg(short, long)]
    pub email: Option<String>,

    /// First name of the contact (use with --last-name)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name of the contact (use with --first-name)
    #[arg(long)]
    pub last_name: Option<String>,
}

impl SearchArgs {
    pub fn criteria(&self) -> Result<SearchCriteria, SearchError> {
        SearchCriteria::new(
            self.email.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
        )
    }
}
