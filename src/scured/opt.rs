use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve files from a directory with no access log
#[derive(Args, Debug)]
pub struct Options {
    /// Socket address to listen on
    #[arg(default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Directory to serve files from
    #[arg(long, default_value = "static")]
    pub root: PathBuf,
}
