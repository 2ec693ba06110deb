use std::path::PathBuf;
use clap::{Parser, ValueEnum};

pub const DEFAULT_PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Parser, Clone, Debug)]
#[clap(name = "top-restaurants", about = "Look up the top restaurants in a city via Google Places")]
pub struct Config {
    /// Google Places API key. Also read from GOOGLE_API_KEY or a .env file.
    #[clap(env = "GOOGLE_API_KEY", long, hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// City to search. Prompted for interactively when omitted.
    #[clap(long)]
    pub city: Option<String>,

    #[clap(env = "OUTPUT_DIR", long, default_value = ".")]
    pub output_dir: PathBuf,

    #[clap(env = "PLACES_API_URL", long, default_value = DEFAULT_PLACES_API_URL)]
    pub places_api_url: String,

    #[clap(long, value_enum, default_value_t = ResultOrder::Provider)]
    pub order: ResultOrder,

    /// Fetch url, website and review snippets for each result (one extra request per place).
    #[clap(long)]
    pub details: bool,

    #[clap(env = "REQUEST_TIMEOUT_SECS", long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// Exit code for a failed `Config::try_parse`: 0 for `--help`/`--version`,
/// 1 for usage errors so they never collide with lookup error codes.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultOrder {
    /// Keep the provider's relevance order.
    Provider,
    /// Rank by rating weighted with review count.
    Composite,
}
