//! Control signals and operation types.
//!
//! This module defines the signals the control unit derives from an
//! instruction word. It performs:
//! 1. **Operation Classification:** The ALU operation vocabulary.
//! 2. **Operand Selection:** Whether the second ALU operand is a register or
//!    the immediate.
//! 3. **Memory and Write-Back Control:** Read/write enables and the
//!    write-back source.
//! 4. **Control Flow:** Branch, branch inversion, and jump signals.

use serde::Serialize;

use crate::isa::imm::ImmFormat;

/// ALU operation types.
///
/// The vocabulary is closed: every decodable instruction maps onto exactly
/// one of these, and the ALU matches them exhaustively, so an unsupported
/// operation cannot be represented. Comparison operations double as branch
/// condition evaluators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// Integer addition (also address generation and LUI/AUIPC/JAL paths).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Set equal (branch equality comparisons).
    Seq,
}

/// Control signals for one instruction.
///
/// Produced fresh by the control unit for every step and consumed by the
/// execution engine; never persisted between steps.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct ControlSignals {
    /// Major opcode (bits 6-0).
    pub opcode: u32,
    /// The funct3 field (bits 14-12).
    pub funct3: u32,
    /// The funct7 field (bits 31-25).
    pub funct7: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable data memory read (load).
    pub mem_read: bool,
    /// Enable data memory write (store).
    pub mem_write: bool,
    /// Write-back source: memory data instead of the ALU result.
    pub mem_to_reg: bool,
    /// Second ALU operand source: immediate instead of `rs2`.
    pub alu_src_imm: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Invert the branch condition (BNE, BGE, BGEU).
    pub branch_invert: bool,
    /// Instruction is an unconditional jump (JAL/JALR).
    pub jump: bool,
    /// Immediate format, when the instruction carries an immediate.
    pub imm_format: Option<ImmFormat>,
    /// ALU operation to perform.
    pub alu_op: AluOp,
}
