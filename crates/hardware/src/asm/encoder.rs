//! Instruction encoding.
//!
//! This module holds the mnemonic table and the bit-packing routines of the
//! assembler's second pass. Encodings are the exact mirror of what the
//! decoder and immediate generator read:
//!
//! - R: `funct7 | rs2 | rs1 | funct3 | rd | opcode`
//! - I: `imm[11:0] | rs1 | funct3 | rd | opcode` (shift-immediates place
//!   funct7 in `imm[11:5]`)
//! - S: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
//! - B: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
//! - U: `imm[31:12] | rd | opcode`
//! - J: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`

use std::collections::HashMap;

use super::operand::{self, MemOperand};
use super::{AsmErrorKind, Statement};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Encoding class of a mnemonic.
enum InstClass {
    /// Register-register ALU operation.
    Register { f3: u32, f7: u32 },
    /// Register-immediate ALU operation.
    ImmediateAlu { f3: u32 },
    /// Shift by immediate amount (funct7 rides in the immediate field).
    ShiftImmediate { f3: u32, f7: u32 },
    /// Memory load.
    Load { f3: u32 },
    /// Memory store.
    Store { f3: u32 },
    /// Conditional branch.
    Branch { f3: u32 },
    /// LUI or AUIPC.
    UpperImmediate { opcode: u32 },
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
}

/// The fixed mnemonic table.
fn class_of(mnemonic: &str) -> Option<InstClass> {
    use InstClass::{
        Branch, ImmediateAlu, Jal, Jalr, Load, Register, ShiftImmediate, Store, UpperImmediate,
    };

    Some(match mnemonic {
        "ADD" => Register {
            f3: funct3::ADD_SUB,
            f7: funct7::BASE,
        },
        "SUB" => Register {
            f3: funct3::ADD_SUB,
            f7: funct7::ALT,
        },
        "SLL" => Register {
            f3: funct3::SLL,
            f7: funct7::BASE,
        },
        "SLT" => Register {
            f3: funct3::SLT,
            f7: funct7::BASE,
        },
        "SLTU" => Register {
            f3: funct3::SLTU,
            f7: funct7::BASE,
        },
        "XOR" => Register {
            f3: funct3::XOR,
            f7: funct7::BASE,
        },
        "SRL" => Register {
            f3: funct3::SRL_SRA,
            f7: funct7::BASE,
        },
        "SRA" => Register {
            f3: funct3::SRL_SRA,
            f7: funct7::ALT,
        },
        "OR" => Register {
            f3: funct3::OR,
            f7: funct7::BASE,
        },
        "AND" => Register {
            f3: funct3::AND,
            f7: funct7::BASE,
        },

        "ADDI" => ImmediateAlu {
            f3: funct3::ADD_SUB,
        },
        "SLTI" => ImmediateAlu { f3: funct3::SLT },
        "SLTIU" => ImmediateAlu { f3: funct3::SLTU },
        "XORI" => ImmediateAlu { f3: funct3::XOR },
        "ORI" => ImmediateAlu { f3: funct3::OR },
        "ANDI" => ImmediateAlu { f3: funct3::AND },

        "SLLI" => ShiftImmediate {
            f3: funct3::SLL,
            f7: funct7::BASE,
        },
        "SRLI" => ShiftImmediate {
            f3: funct3::SRL_SRA,
            f7: funct7::BASE,
        },
        "SRAI" => ShiftImmediate {
            f3: funct3::SRL_SRA,
            f7: funct7::ALT,
        },

        "LB" => Load { f3: funct3::LB },
        "LH" => Load { f3: funct3::LH },
        "LW" => Load { f3: funct3::LW },
        "LBU" => Load { f3: funct3::LBU },
        "LHU" => Load { f3: funct3::LHU },

        "SB" => Store { f3: funct3::SB },
        "SH" => Store { f3: funct3::SH },
        "SW" => Store { f3: funct3::SW },

        "BEQ" => Branch { f3: funct3::BEQ },
        "BNE" => Branch { f3: funct3::BNE },
        "BLT" => Branch { f3: funct3::BLT },
        "BGE" => Branch { f3: funct3::BGE },
        "BLTU" => Branch { f3: funct3::BLTU },
        "BGEU" => Branch { f3: funct3::BGEU },

        "LUI" => UpperImmediate {
            opcode: opcodes::OP_LUI,
        },
        "AUIPC" => UpperImmediate {
            opcode: opcodes::OP_AUIPC,
        },
        "JAL" => Jal,
        "JALR" => Jalr,

        _ => return None,
    })
}

/// Fetches operand `index`, failing with `MissingOperand` when absent.
fn operand_at(operands: &[String], index: usize) -> Result<&str, AsmErrorKind> {
    operands
        .get(index)
        .map(String::as_str)
        .ok_or(AsmErrorKind::MissingOperand)
}

/// Rejects extra operands beyond `count`.
fn expect_count(operands: &[String], count: usize) -> Result<(), AsmErrorKind> {
    if operands.len() > count {
        return Err(AsmErrorKind::MalformedOperand(format!(
            "expected {count} operands, found {}",
            operands.len()
        )));
    }
    Ok(())
}

/// Validates that `value` fits a signed field of `bits` bits.
fn check_signed(value: i64, bits: u32) -> Result<i32, AsmErrorKind> {
    let bound = 1i64 << (bits - 1);
    if value < -bound || value >= bound {
        return Err(AsmErrorKind::ImmediateOutOfRange(value));
    }
    Ok(value as i32)
}

/// Validates a branch/jump byte offset: signed width plus evenness (bit 0 of
/// those immediates is hardwired to zero).
fn check_offset(value: i64, bits: u32) -> Result<i32, AsmErrorKind> {
    if value % 2 != 0 {
        return Err(AsmErrorKind::ImmediateOutOfRange(value));
    }
    check_signed(value, bits)
}

/// Resolves a branch/jump target: a numeric token is a literal byte offset;
/// anything else is looked up in the label table and turned into
/// `label_address - current_address`.
fn jump_target(
    token: &str,
    address: u32,
    labels: &HashMap<String, u32>,
) -> Result<i64, AsmErrorKind> {
    if operand::looks_numeric(token) {
        return operand::immediate(token);
    }

    let Some(&target) = labels.get(token) else {
        return Err(AsmErrorKind::UnknownLabel(token.to_string()));
    };
    Ok(i64::from(target) - i64::from(address))
}

const fn pack_r(op: u32, f3: u32, f7: u32, rd: usize, rs1: usize, rs2: usize) -> u32 {
    (f7 << 25) | ((rs2 as u32) << 20) | ((rs1 as u32) << 15) | (f3 << 12) | ((rd as u32) << 7) | op
}

const fn pack_i(op: u32, f3: u32, rd: usize, rs1: usize, imm: i32) -> u32 {
    (((imm as u32) & 0xFFF) << 20) | ((rs1 as u32) << 15) | (f3 << 12) | ((rd as u32) << 7) | op
}

const fn pack_s(op: u32, f3: u32, rs1: usize, rs2: usize, imm: i32) -> u32 {
    let imm = imm as u32;
    let high = (imm >> 5) & 0x7F;
    let low = imm & 0x1F;
    (high << 25) | ((rs2 as u32) << 20) | ((rs1 as u32) << 15) | (f3 << 12) | (low << 7) | op
}

const fn pack_b(op: u32, f3: u32, rs1: usize, rs2: usize, imm: i32) -> u32 {
    let imm = imm as u32;
    let bit12 = (imm >> 12) & 0x1;
    let bits10_5 = (imm >> 5) & 0x3F;
    let bits4_1 = (imm >> 1) & 0xF;
    let bit11 = (imm >> 11) & 0x1;
    (bit12 << 31)
        | (bits10_5 << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | (f3 << 12)
        | (bits4_1 << 8)
        | (bit11 << 7)
        | op
}

const fn pack_u(op: u32, rd: usize, imm20: u32) -> u32 {
    ((imm20 & 0xFFFFF) << 12) | ((rd as u32) << 7) | op
}

const fn pack_j(op: u32, rd: usize, imm: i32) -> u32 {
    let imm = imm as u32;
    let bit20 = (imm >> 20) & 0x1;
    let bits10_1 = (imm >> 1) & 0x3FF;
    let bit11 = (imm >> 11) & 0x1;
    let bits19_12 = (imm >> 12) & 0xFF;
    (bit20 << 31) | (bits10_1 << 21) | (bit11 << 20) | (bits19_12 << 12) | ((rd as u32) << 7) | op
}

/// Encodes one statement against the completed label table.
pub(super) fn encode(stmt: &Statement, labels: &HashMap<String, u32>) -> Result<u32, AsmErrorKind> {
    let Some(class) = class_of(&stmt.mnemonic) else {
        return Err(AsmErrorKind::UnknownMnemonic(stmt.mnemonic.clone()));
    };

    let ops = &stmt.operands;

    match class {
        InstClass::Register { f3, f7 } => {
            expect_count(ops, 3)?;
            let rd = operand::register(operand_at(ops, 0)?)?;
            let rs1 = operand::register(operand_at(ops, 1)?)?;
            let rs2 = operand::register(operand_at(ops, 2)?)?;
            Ok(pack_r(opcodes::OP_REG, f3, f7, rd, rs1, rs2))
        }

        InstClass::ImmediateAlu { f3 } => {
            expect_count(ops, 3)?;
            let rd = operand::register(operand_at(ops, 0)?)?;
            let rs1 = operand::register(operand_at(ops, 1)?)?;
            let imm = check_signed(operand::immediate(operand_at(ops, 2)?)?, 12)?;
            Ok(pack_i(opcodes::OP_IMM, f3, rd, rs1, imm))
        }

        InstClass::ShiftImmediate { f3, f7 } => {
            expect_count(ops, 3)?;
            let rd = operand::register(operand_at(ops, 0)?)?;
            let rs1 = operand::register(operand_at(ops, 1)?)?;
            let shamt = operand::immediate(operand_at(ops, 2)?)?;
            if !(0..32).contains(&shamt) {
                return Err(AsmErrorKind::ImmediateOutOfRange(shamt));
            }
            // funct7 occupies imm[11:5] of the I-format field.
            let imm = ((f7 << 5) | shamt as u32) as i32;
            Ok(pack_i(opcodes::OP_IMM, f3, rd, rs1, imm))
        }

        InstClass::Load { f3 } => {
            expect_count(ops, 2)?;
            let rd = operand::register(operand_at(ops, 0)?)?;
            let MemOperand { offset, base } = operand::memory(operand_at(ops, 1)?)?;
            let imm = check_signed(offset, 12)?;
            Ok(pack_i(opcodes::OP_LOAD, f3, rd, base, imm))
        }

        InstClass::Store { f3 } => {
            expect_count(ops, 2)?;
            let rs2 = operand::register(operand_at(ops, 0)?)?;
            let MemOperand { offset, base } = operand::memory(operand_at(ops, 1)?)?;
            let imm = check_signed(offset, 12)?;
            Ok(pack_s(opcodes::OP_STORE, f3, base, rs2, imm))
        }

        InstClass::Branch { f3 } => {
            expect_count(ops, 3)?;
            let rs1 = operand::register(operand_at(ops, 0)?)?;
            let rs2 = operand::register(operand_at(ops, 1)?)?;
            let target = jump_target(operand_at(ops, 2)?, stmt.address, labels)?;
            let imm = check_offset(target, 13)?;
            Ok(pack_b(opcodes::OP_BRANCH, f3, rs1, rs2, imm))
        }

        InstClass::UpperImmediate { opcode } => {
            expect_count(ops, 2)?;
            let rd = operand::register(operand_at(ops, 0)?)?;
            let value = operand::immediate(operand_at(ops, 1)?)?;
            // Accept the 20-bit field as either unsigned or signed.
            if value < -(1 << 19) || value >= 1 << 20 {
                return Err(AsmErrorKind::ImmediateOutOfRange(value));
            }
            Ok(pack_u(opcode, rd, value as u32))
        }

        InstClass::Jal => {
            expect_count(ops, 2)?;
            let rd = operand::register(operand_at(ops, 0)?)?;
            let target = jump_target(operand_at(ops, 1)?, stmt.address, labels)?;
            let imm = check_offset(target, 21)?;
            Ok(pack_j(opcodes::OP_JAL, rd, imm))
        }

        InstClass::Jalr => {
            // Both `jalr rd, offset(rs1)` and `jalr rd, rs1, imm` are accepted.
            let rd = operand::register(operand_at(ops, 0)?)?;
            let (base, offset) = if ops.len() == 2 {
                let MemOperand { offset, base } = operand::memory(operand_at(ops, 1)?)?;
                (base, offset)
            } else {
                expect_count(ops, 3)?;
                let base = operand::register(operand_at(ops, 1)?)?;
                let offset = operand::immediate(operand_at(ops, 2)?)?;
                (base, offset)
            };
            let imm = check_signed(offset, 12)?;
            Ok(pack_i(opcodes::OP_JALR, funct3::JALR, rd, base, imm))
        }
    }
}
