use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "inventhora-utils")]
#[command(about = "Text, date and number helpers of the Inventhora web app")]
pub struct CliArgs {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Turn text into a URL slug
    Slug { text: String },

    /// Generate a random string of special characters, digits and letters
    RandomString {
        #[arg(default_value = "16")]
        length: usize,
    },

    /// Render a date (RFC 3339, YYYY-MM-DD or epoch milliseconds)
    FormatDate {
        date: String,
        #[arg(long, default_value = "daytime")]
        format: String,
        #[arg(long, help = "IANA timezone, e.g. Europe/Madrid")]
        timezone: Option<String>,
    },

    /// Parse text written in one of the display formats
    ParseDate {
        text: String,
        #[arg(long, default_value = "daytime")]
        format: String,
    },

    /// Parse a number that may use a decimal comma
    ParseNumber { value: String },

    /// Resolve the tenant subdomain of a hostname or URL
    Subdomain {
        host: String,
        #[arg(long, help = "TOML file with a [deployment] section; defaults to the environment")]
        config: Option<PathBuf>,
    },

    /// Tell whether a user agent belongs to a phone or tablet
    IsMobile { user_agent: String },
}
