//! Hex quantity encoding as used by Ethereum JSON-RPC (`0x`-prefixed,
//! base 16, no leading zeros on output).

use crate::error::ParseError;

/// Parse a `0x`-prefixed hex quantity into a `u64`.
///
/// Rejects a missing prefix, an empty digit string, any non-hex character
/// (including signs and whitespace), and values wider than 64 bits.
pub fn parse_quantity(raw: &str) -> Result<u64, ParseError> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| ParseError::MissingHexPrefix(raw.to_owned()))?;

    // `from_str_radix` tolerates a leading `+`, which is not a hex digit.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex(raw.to_owned()));
    }

    u64::from_str_radix(digits, 16).map_err(|_| ParseError::HexOverflow(raw.to_owned()))
}

pub fn encode_quantity(value: u64) -> String {
    format!("{value:#x}")
}
