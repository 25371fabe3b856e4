//! Operand parsing.
//!
//! Small parsers for the three operand shapes the assembler accepts:
//! register names, numeric immediates (decimal or `0x` hexadecimal), and
//! `offset(register)` memory operands.

use super::AsmErrorKind;
use crate::isa::abi;

/// A parsed `offset(register)` memory operand.
pub(super) struct MemOperand {
    /// Signed byte offset.
    pub offset: i64,
    /// Base register index.
    pub base: usize,
}

/// Resolves a register operand to its index.
pub(super) fn register(token: &str) -> Result<usize, AsmErrorKind> {
    abi::parse_register(token).ok_or_else(|| AsmErrorKind::UnknownRegister(token.to_string()))
}

/// True when the token can only be a numeric immediate, not a label.
pub(super) fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+')
}

/// Parses a numeric immediate, accepting decimal and `0x` hexadecimal with
/// an optional leading sign.
pub(super) fn immediate(token: &str) -> Result<i64, AsmErrorKind> {
    let malformed = || AsmErrorKind::MalformedOperand(token.to_string());

    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let magnitude = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).map_err(|_| malformed())?
    } else {
        rest.parse::<i64>().map_err(|_| malformed())?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Parses an `offset(register)` memory operand, e.g. `-8(sp)` or `0(x2)`.
pub(super) fn memory(token: &str) -> Result<MemOperand, AsmErrorKind> {
    let malformed = || AsmErrorKind::MalformedOperand(token.to_string());

    let open = token.find('(').ok_or_else(malformed)?;
    let close = token.strip_suffix(')').ok_or_else(malformed)?;

    let offset_text = &token[..open];
    let base_text = &close[open + 1..];

    let offset = if offset_text.is_empty() {
        0
    } else {
        immediate(offset_text)?
    };

    Ok(MemOperand {
        offset,
        base: register(base_text)?,
    })
}
