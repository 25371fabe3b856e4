//! Two-pass RV32I assembler.
//!
//! This module translates assembly text into machine words. It performs:
//! 1. **Pass 1:** Comment stripping, label collection, address assignment,
//!    and the `NOP` rewrite.
//! 2. **Pass 2:** Operand resolution (including branch/jump labels) and
//!    bit-exact encoding in the same layouts the decoder reads.
//! 3. **Reporting:** Every failure carries the 1-based source line and the
//!    raw line text; a single failing line invalidates the whole call.
//!
//! Alongside the machine words the assembler emits a line map pairing each
//! word with the source line that produced it, for editors and debuggers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::constants::WORD_BYTES;

mod encoder;
mod operand;

/// Assembler output: machine words plus their source-line map.
///
/// `line_map[i]` is the 1-based source line that produced `machine_code[i]`;
/// the two vectors always have equal length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Encoded instruction words in emission order.
    pub machine_code: Vec<u32>,
    /// 1-based source line of each emitted word.
    pub line_map: Vec<u32>,
}

/// An assembly failure, located at its source line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line} (\"{text}\"): {kind}")]
pub struct AsmError {
    /// 1-based line number of the failing line.
    pub line: u32,
    /// The raw source text of the failing line.
    pub text: String,
    /// What went wrong.
    pub kind: AsmErrorKind,
}

/// The specific cause of an assembly failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmErrorKind {
    /// The mnemonic is not part of the supported subset.
    #[error("unknown mnemonic: {0}")]
    UnknownMnemonic(String),

    /// An operand that should name a register does not.
    #[error("unknown register: {0}")]
    UnknownRegister(String),

    /// A branch or jump target names a label that was never defined.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// The same label is defined twice.
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    /// An operand could not be parsed in its expected shape.
    #[error("malformed operand: {0}")]
    MalformedOperand(String),

    /// An immediate that does not fit its encoding field.
    #[error("immediate out of range: {0}")]
    ImmediateOutOfRange(i64),

    /// Fewer operands than the mnemonic requires.
    #[error("missing operand")]
    MissingOperand,
}

/// One retained instruction after pass 1.
struct Statement {
    /// 1-based source line.
    line: u32,
    /// Raw line text, kept for error reporting.
    text: String,
    /// Uppercased mnemonic.
    mnemonic: String,
    /// Operand tokens in source order, original case preserved.
    operands: Vec<String>,
    /// Byte address assigned in emission order.
    address: u32,
}

/// Cuts `#` and `//` comments off the end of a line.
fn strip_comment(line: &str) -> &str {
    let hash = line.find('#').unwrap_or(line.len());
    let slashes = line.find("//").unwrap_or(line.len());
    &line[..hash.min(slashes)]
}

/// A label is an identifier: letters, digits, `_` or `.`, not starting with
/// a digit.
fn is_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '.')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Assembles a program.
///
/// The input is UTF-8 text with one instruction or label per non-comment
/// line. Comments run from `#` or `//` to the end of the line. Operands are
/// separated by whitespace or commas; memory operands use the
/// `offset(register)` form; registers accept ABI names and `x0`-`x31`.
///
/// # Errors
///
/// [`AsmError`] naming the first failing line and its raw text. There is no
/// partial output: any failure invalidates the entire call.
pub fn assemble(source: &str) -> Result<Program, AsmError> {
    let mut statements: Vec<Statement> = Vec::new();
    let mut labels: HashMap<String, u32> = HashMap::new();

    // Pass 1: strip comments, collect labels, assign addresses.
    for (index, raw) in source.lines().enumerate() {
        let line = (index + 1) as u32;
        let text = raw.trim();
        let mut code = strip_comment(raw).trim();
        if code.is_empty() {
            continue;
        }

        if let Some(pos) = code.find(':') {
            let name = code[..pos].trim();
            if !is_label_name(name) {
                return Err(AsmError {
                    line,
                    text: text.to_string(),
                    kind: AsmErrorKind::MalformedOperand(format!("bad label name: {name}")),
                });
            }

            let address = statements.len() as u32 * WORD_BYTES;
            if labels.insert(name.to_string(), address).is_some() {
                return Err(AsmError {
                    line,
                    text: text.to_string(),
                    kind: AsmErrorKind::DuplicateLabel(name.to_string()),
                });
            }

            code = code[pos + 1..].trim();
            if code.is_empty() {
                continue;
            }
        }

        let spaced = code.replace(',', " ");
        let mut parts = spaced.split_whitespace();
        let Some(first) = parts.next() else {
            continue;
        };
        let mut mnemonic = first.to_ascii_uppercase();
        let mut operands: Vec<String> = parts.map(str::to_string).collect();

        // NOP is sugar for an addition into the zero register.
        if mnemonic == "NOP" {
            if !operands.is_empty() {
                return Err(AsmError {
                    line,
                    text: text.to_string(),
                    kind: AsmErrorKind::MalformedOperand("NOP takes no operands".to_string()),
                });
            }
            mnemonic = "ADDI".to_string();
            operands = vec!["x0".to_string(), "x0".to_string(), "0".to_string()];
        }

        statements.push(Statement {
            line,
            text: text.to_string(),
            mnemonic,
            operands,
            address: statements.len() as u32 * WORD_BYTES,
        });
    }

    tracing::debug!(
        instructions = statements.len(),
        labels = labels.len(),
        "first pass complete"
    );

    // Pass 2: encode with all labels known.
    let mut machine_code = Vec::with_capacity(statements.len());
    let mut line_map = Vec::with_capacity(statements.len());

    for stmt in &statements {
        let word = encoder::encode(stmt, &labels).map_err(|kind| AsmError {
            line: stmt.line,
            text: stmt.text.clone(),
            kind,
        })?;
        machine_code.push(word);
        line_map.push(stmt.line);
    }

    Ok(Program {
        machine_code,
        line_map,
    })
}
