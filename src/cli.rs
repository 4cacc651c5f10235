use std::ffi::OsString;

use clap::Parser;

/// List the in-scope URL assets of every program visible to your API account.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API username for basic auth
    #[arg(short = 'u', long = "username", env = "H1_USERNAME")]
    pub username: String,

    /// API token for basic auth
    #[arg(short = 't', long = "token", env = "H1_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Only include assets eligible for a bounty
    #[arg(long, default_value_t = false)]
    pub paid: bool,

    /// Write identifiers to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// JSON config file (flags given on the command line win)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Program detail requests in flight at once (default: 1)
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// API root, e.g. https://api.hackerone.com/v1/hackers
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

/// Accept the single-dash `-paid` spelling alongside `--paid`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|a| if a.as_os_str() == "-paid" { OsString::from("--paid") } else { a })
        .collect()
}

pub fn parse_cli() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}
