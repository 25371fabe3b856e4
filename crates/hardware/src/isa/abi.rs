//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the standard ABI register names and their indices. The assembler
//! resolves operands through [`parse_register`]; debug output uses [`NAMES`].

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;

/// Canonical ABI name for each register index, used in register dumps.
pub const NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Resolves a register name to its index.
///
/// Accepts the numeric `x0`-`x31` form and every standard ABI name,
/// including the `fp` alias for `s0`. Matching is case-insensitive.
///
/// # Arguments
///
/// * `name` - The register name as written in assembly source.
///
/// # Returns
///
/// The register index (0-31), or `None` if the name is not a register.
pub fn parse_register(name: &str) -> Option<usize> {
    let lower = name.to_ascii_lowercase();

    if let Some(num) = lower.strip_prefix('x') {
        if let Ok(idx) = num.parse::<usize>() {
            if idx < 32 && !num.is_empty() && !num.starts_with('+') {
                return Some(idx);
            }
        }
        return None;
    }

    // fp is the frame-pointer alias for s0.
    if lower == "fp" {
        return Some(8);
    }

    NAMES.iter().position(|&abi| abi == lower)
}
