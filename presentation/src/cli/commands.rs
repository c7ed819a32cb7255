//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted sections (personal information, addresses, country)
    Full,
    /// The raw result as JSON
    Json,
}

/// CLI arguments for callerid
#[derive(Parser, Debug)]
#[command(name = "callerid")]
#[command(author, version, about = "Phone number lookup gateway and client")]
#[command(long_about = r#"
callerid looks up the owner of a phone number through a third-party provider.

`serve` runs the gateway, which forwards each lookup to the provider using the
configured installation identifier. `lookup` is a client: it validates the
number locally, sends it to a gateway and prints the answer.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./callerid.toml     Project-level config
3. ~/.config/callerid/config.toml   Global config

The environment variables PORT and ID set the gateway port and the provider
installation identifier.

Example:
  ID=<installation id> callerid serve --port 5000
  callerid lookup IN 9876543210
  callerid lookup US 2025550123 --gateway http://gateway:5000 --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lookup gateway
    Serve {
        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Look up a phone number through a gateway
    Lookup {
        /// Two-letter region code, e.g. IN
        country_code: String,

        /// The phone number, exactly 10 characters
        phone_number: String,

        /// Gateway base URL (overrides configuration)
        #[arg(short, long, value_name = "URL")]
        gateway: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "full")]
        output: OutputFormat,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the selectable dialing regions
    Countries,
}
