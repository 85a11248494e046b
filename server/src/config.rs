use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// Mines wager game server.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "MINES_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Keep games as JSON files in this directory instead of in memory
    #[arg(long, env = "MINES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Requests running longer than this are answered with 408
    #[arg(long, env = "MINES_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// What log level to use; `RUST_LOG` takes precedence when set
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Filter directive equivalent to the verbosity flags.
    pub fn log_directive(&self) -> String {
        self.verbose.log_level_filter().to_string().to_lowercase()
    }
}
