use clap::Parser;

#[derive(Debug, Parser)]
pub struct Cli {
    #[clap(long, value_name = "TRPAPP_DB_URL", env = "TRPAPP_DB_URL", default_value = "sqlite:trpapp.db")]
    pub trpapp_db_url: String,
    #[clap(long, value_name = "LISTEN_ADDR", env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: String,
    #[clap(long, value_name = "CORS_ALLOW_ORIGIN", env = "CORS_ALLOW_ORIGIN", value_delimiter = ';')]
    pub cors_allow_origins: Vec<String>,
    /// Upper bound in seconds on each storage call; expiry is reported
    /// as a retrieval failure.
    #[clap(long, value_name = "QUERY_TIMEOUT", env = "QUERY_TIMEOUT", default_value = "10")]
    pub query_timeout_secs: u64,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
