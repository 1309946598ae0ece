//! Hex dumps of wire buffers
use core::fmt::Write;

use crate::ToolsError;

/// Parses a hex string such as `0x2f ff` or `2F:FF`.
///
/// An optional `0x` prefix is accepted; whitespace, `:` and `_` separators are ignored.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, ToolsError> {
    let input = input.trim();
    let input = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let digits = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !matches!(c, ':' | '_'))
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ToolsError::InvalidHexDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    if digits.len() % 2 != 0 {
        return Err(ToolsError::OddHexLength(digits.len()));
    }
    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Lower-case hex, one space between bytes
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}
