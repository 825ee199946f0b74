mod cli;
mod command;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use ethwatch_core::rpc::HttpRpcClient;
use ethwatch_core::ChainClient;

use command::Command;

const PROMPT: &str = "Enter command (e.g: getCurrentBlock): ";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let rpc = HttpRpcClient::new(
        &args.rpc_url,
        args.rpc_timeout_secs.map(Duration::from_secs),
    )
    .wrap_err("configure JSON-RPC client")?;
    tracing::info!(url = rpc.url(), "using Ethereum JSON-RPC endpoint");

    let client = ChainClient::new(Arc::new(rpc));

    // Input is read on this task; commands run one at a time on the worker.
    let (tx, rx) = mpsc::channel::<String>(usize::from(args.queue_capacity));
    let worker = tokio::spawn(run_worker(client, rx));

    prompt();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read standard input")? {
        if tx.send(line).await.is_err() {
            break;
        }
    }

    drop(tx);
    worker.await.context("join command worker")?;
    Ok(())
}

async fn run_worker(mut client: ChainClient, mut rx: mpsc::Receiver<String>) {
    while let Some(line) = rx.recv().await {
        match command::parse(&line) {
            Ok(Some(command)) => match execute(&mut client, command).await {
                Ok(output) => println!("{output}"),
                Err(err) => println!("error: {err:#}"),
            },
            Ok(None) => println!("{}", command::USAGE),
            Err(err) => println!("{err}"),
        }
        prompt();
    }
}

async fn execute(client: &mut ChainClient, command: Command) -> eyre::Result<String> {
    match command {
        Command::CurrentBlock => {
            let height = client
                .current_block_height()
                .await
                .wrap_err("get current block")?;
            Ok(height.to_string())
        }
        Command::Transactions(address) => {
            let txs = client
                .transactions_for_address(&address)
                .await
                .wrap_err("get transactions")?;
            if txs.is_empty() {
                return Ok(format!("no transactions for {address} in the latest block"));
            }
            serde_json::to_string_pretty(&txs).wrap_err("render transactions")
        }
        Command::Subscribe(address) => Ok(client
            .subscribe_address(&address)
            .wrap_err("subscribe address")?
            .to_string()),
        Command::Unsubscribe(address) => Ok(client
            .unsubscribe_address(&address)
            .wrap_err("unsubscribe address")?
            .to_string()),
        Command::ListSubscribers => {
            let subscribers = client.subscribers();
            if subscribers.is_empty() {
                return Ok("no subscribed addresses".to_owned());
            }
            Ok(subscribers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Help => Ok(command::USAGE.to_owned()),
    }
}

fn prompt() {
    print!("{PROMPT}");
    // Prompt only; a failed flush is not reported.
    std::io::stdout().flush().ok();
}
