//! CLI argument parsing types using `clap`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Resolve MongoDB authentication credentials from connection properties
#[derive(Parser)]
#[command(name = "mongoauth-cli")]
#[command(author, version, about = "MongoAuth command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a connection properties file (TOML)
    #[arg(short, long, global = true, env = "MONGOAUTH_CONFIG")]
    pub config: Option<String>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the credentials a driver would authenticate with
    #[command(about = "Resolve credentials and show the connection plan")]
    Resolve {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Check a username against the `user[@authDatabase]` notation
    #[command(about = "Validate a username and show its authentication database")]
    Validate {
        /// Username to check (defaults to the one in the properties file)
        #[arg(short, long)]
        username: Option<String>,

        /// Database name used when the username carries no source
        #[arg(short, long)]
        database: Option<String>,
    },

    /// Generate shell completion scripts
    #[command(about = "Generate shell completions")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Connection properties given on the command line
///
/// Each flag overrides the same key from the properties file.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Username, optionally as user@authDatabase
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password
    #[arg(short, long, env = "MONGOAUTH_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Prompt for the password instead of passing it as an argument
    #[arg(long, conflicts_with = "password")]
    pub prompt_password: bool,

    /// Target database name
    #[arg(short, long)]
    pub database: Option<String>,

    /// Server host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Authenticate with Kerberos (GSSAPI)
    #[arg(long)]
    pub kerberos: bool,

    /// Authenticate with username/password even if the file enables Kerberos
    #[arg(long, conflicts_with = "kerberos")]
    pub no_kerberos: bool,

    /// Authentication mechanism (SCRAM-SHA-1, SCRAM-SHA-256, MONGODB-CR,
    /// PLAIN, GSSAPI)
    #[arg(long, value_name = "MECHANISM")]
    pub mechanism: Option<String>,
}

/// Output format for resolved credentials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON document
    Json,
}
