//! Line-oriented command parsing for the interactive prompt.

use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    CurrentBlock,
    /// The address may be empty; the engine rejects it.
    Transactions(String),
    Subscribe(String),
    Unsubscribe(String),
    ListSubscribers,
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    UnknownAction(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction(action) => write!(
                f,
                "invalid action `{action}`; pick one of getCurrentBlock, getTransactions, \
                 subscribeAddress, unsubscribeAddress, listSubscribers, help"
            ),
        }
    }
}

pub const USAGE: &str = "\
commands:
  getCurrentBlock                 print the node's current block height
  getTransactions <address>       transactions for a subscribed address in the latest block
  subscribeAddress <address>      start tracking an address
  unsubscribeAddress <address>    stop tracking an address
  listSubscribers                 print tracked addresses
  help                            print this message";

/// Parse one input line. Blank lines yield `Ok(None)`; words after the
/// address are ignored.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(action) = words.next() else {
        return Ok(None);
    };
    let address = words.next().unwrap_or_default().to_owned();

    let command = match action.to_ascii_lowercase().as_str() {
        "getcurrentblock" => Command::CurrentBlock,
        "gettransactions" | "gettransaction" => Command::Transactions(address),
        "subscribeaddress" => Command::Subscribe(address),
        "unsubscribeaddress" => Command::Unsubscribe(address),
        "listsubscribers" => Command::ListSubscribers,
        "help" => Command::Help,
        _ => return Err(CommandError::UnknownAction(action.to_owned())),
    };
    Ok(Some(command))
}
