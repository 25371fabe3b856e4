//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU of the datapath. It handles
//! arithmetic, logic, shift, and comparison operations on signed 32-bit
//! operands, and reports the standard condition flags alongside every
//! result:
//! 1. **Zero/Negative:** Derived from the result for every operation.
//! 2. **Overflow:** Sign-mismatch rule, defined only for add and subtract.
//! 3. **Carry:** Unsigned comparison rule, defined only for add and subtract.
//!
//! The ALU knows nothing about branching. The comparison operations
//! (set-equal, set-less-than) produce 0/1 results that branch resolution
//! interprets downstream.

use crate::core::signals::AluOp;

/// Result and condition flags of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// The 32-bit operation result.
    pub result: i32,
    /// Result is zero.
    pub zero: bool,
    /// Result is negative (sign bit set).
    pub negative: bool,
    /// Signed overflow occurred (add/sub only, otherwise false).
    pub overflow: bool,
    /// Unsigned carry/borrow occurred (add/sub only, otherwise false).
    pub carry: bool,
}

/// Integer arithmetic logic unit.
///
/// Stateless; every call is a pure function of the operation and operands.
#[derive(Clone, Copy, Debug)]
pub struct Alu;

impl Alu {
    /// Executes one ALU operation.
    ///
    /// Add and subtract wrap mod 2^32. Shift amounts use only the low 5 bits
    /// of `b`. Comparisons produce 0 or 1.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a` - First operand (signed word).
    /// * `b` - Second operand (signed word, also the shift amount source).
    ///
    /// # Returns
    ///
    /// The result together with the zero, negative, overflow, and carry flags.
    pub fn execute(op: AluOp, a: i32, b: i32) -> AluOutput {
        let result = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Sll => a.wrapping_shl(b as u32 & 0x1F),
            AluOp::Srl => ((a as u32).wrapping_shr(b as u32 & 0x1F)) as i32,
            AluOp::Sra => a.wrapping_shr(b as u32 & 0x1F),
            AluOp::Slt => (a < b) as i32,
            AluOp::Sltu => ((a as u32) < (b as u32)) as i32,
            AluOp::Seq => (a == b) as i32,
        };

        let (overflow, carry) = match op {
            AluOp::Add => (
                // Same-sign operands producing a result of the other sign.
                (a < 0) == (b < 0) && (a < 0) != (result < 0),
                {
                    let unsigned = result as u32;
                    unsigned < a as u32 || unsigned < b as u32
                },
            ),
            AluOp::Sub => (
                // Different-sign operands producing a result whose sign
                // differs from the minuend.
                (a < 0) != (b < 0) && (a < 0) != (result < 0),
                (a as u32) < (b as u32),
            ),
            _ => (false, false),
        };

        AluOutput {
            result,
            zero: result == 0,
            negative: result < 0,
            overflow,
            carry,
        }
    }
}
