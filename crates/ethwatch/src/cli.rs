use clap::Parser;

/// ethwatch: query the latest Ethereum block for transactions touching
/// subscribed addresses.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Ethereum JSON-RPC endpoint URL.
    #[arg(long, default_value = "https://cloudflare-eth.com", env = "ETHWATCH_RPC_URL")]
    pub rpc_url: String,

    /// Total per-request timeout in seconds. Without it, requests wait for
    /// the node indefinitely.
    #[arg(long, env = "ETHWATCH_RPC_TIMEOUT_SECS")]
    pub rpc_timeout_secs: Option<u64>,

    /// Capacity of the queue between the input reader and the command worker.
    #[arg(long, default_value = "16", value_parser = clap::value_parser!(u16).range(1..))]
    pub queue_capacity: u16,
}
