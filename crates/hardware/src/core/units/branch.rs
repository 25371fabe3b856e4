//! Branch resolution.
//!
//! For branch instructions the ALU produces 1 when the underlying comparison
//! holds and 0 otherwise. The control unit's invert signal turns the three
//! base comparisons into their complements, covering all six branch
//! mnemonics with two ALU comparison operations.

/// Decides whether a branch is taken.
///
/// Not a branch: always false. Otherwise the condition is
/// `(alu_result != 0) XOR invert`.
///
/// # Arguments
///
/// * `branch` - Control signal marking a branch instruction.
/// * `invert` - Control signal inverting the comparison (BNE, BGE, BGEU).
/// * `alu_result` - The ALU's comparison result.
pub const fn take_branch(branch: bool, invert: bool, alu_result: i32) -> bool {
    if !branch {
        return false;
    }

    (alu_result != 0) != invert
}
