//! Decoder / control unit.
//!
//! This module turns a raw instruction word into the full set of control
//! signals driving one step of the datapath. It performs:
//! 1. **Field Extraction:** Opcode, register indices, funct3/funct7.
//! 2. **Dispatch:** A fixed opcode table, refined by funct3 (and funct7 for
//!    add/sub and the shift family).
//! 3. **Rejection:** Any combination outside the supported subset fails with
//!    an unsupported-instruction fault; nothing is silently defaulted.
//!
//! Branches share the ALU with the arithmetic instructions: equality uses
//! the set-equal operation and the orderings use set-less-than, with
//! `branch_invert` turning BNE, BGE, and BGEU into the complements of BEQ,
//! BLT, and BLTU.

use crate::common::error::Fault;
use crate::core::signals::{AluOp, ControlSignals};
use crate::isa::imm::ImmFormat;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Selects the ALU operation for an R-type or I-type arithmetic instruction.
///
/// `reg_form` distinguishes the register-register form, where funct7 selects
/// SUB, from the immediate form, where ADDI has no alternate encoding. The
/// shift family checks funct7 in both forms because shift-immediates carry
/// funct7 in the upper bits of their immediate field.
fn alu_dispatch(inst: u32, reg_form: bool) -> Result<AluOp, Fault> {
    let reject = || {
        Err(Fault::UnsupportedInstruction {
            opcode: inst.opcode(),
            funct3: inst.funct3(),
            funct7: inst.funct7(),
        })
    };

    match (inst.funct3(), inst.funct7()) {
        (funct3::ADD_SUB, funct7::BASE) => Ok(AluOp::Add),
        (funct3::ADD_SUB, funct7::ALT) if reg_form => Ok(AluOp::Sub),
        (funct3::ADD_SUB, _) if !reg_form => Ok(AluOp::Add),
        (funct3::AND, funct7::BASE) if reg_form => Ok(AluOp::And),
        (funct3::AND, _) if !reg_form => Ok(AluOp::And),
        (funct3::OR, funct7::BASE) if reg_form => Ok(AluOp::Or),
        (funct3::OR, _) if !reg_form => Ok(AluOp::Or),
        (funct3::XOR, funct7::BASE) if reg_form => Ok(AluOp::Xor),
        (funct3::XOR, _) if !reg_form => Ok(AluOp::Xor),
        (funct3::SLT, funct7::BASE) if reg_form => Ok(AluOp::Slt),
        (funct3::SLT, _) if !reg_form => Ok(AluOp::Slt),
        (funct3::SLTU, funct7::BASE) if reg_form => Ok(AluOp::Sltu),
        (funct3::SLTU, _) if !reg_form => Ok(AluOp::Sltu),
        (funct3::SLL, funct7::BASE) => Ok(AluOp::Sll),
        (funct3::SRL_SRA, funct7::BASE) => Ok(AluOp::Srl),
        (funct3::SRL_SRA, funct7::ALT) => Ok(AluOp::Sra),
        _ => reject(),
    }
}

/// Selects the ALU comparison and inversion for a branch instruction.
const fn branch_dispatch(f3: u32) -> Option<(AluOp, bool)> {
    match f3 {
        funct3::BEQ => Some((AluOp::Seq, false)),
        funct3::BNE => Some((AluOp::Seq, true)),
        funct3::BLT => Some((AluOp::Slt, false)),
        funct3::BGE => Some((AluOp::Slt, true)),
        funct3::BLTU => Some((AluOp::Sltu, false)),
        funct3::BGEU => Some((AluOp::Sltu, true)),
        _ => None,
    }
}

/// Decodes an instruction word into its control signals.
///
/// Pure function of the instruction word: no datapath state is read or
/// mutated. The returned bundle is fresh per call.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction word fetched from program memory.
///
/// # Errors
///
/// [`Fault::UnsupportedInstruction`] for any opcode, funct3, or funct7
/// combination outside the supported RV32I subset.
pub fn decode(inst: u32) -> Result<ControlSignals, Fault> {
    let mut ctrl = ControlSignals {
        opcode: inst.opcode(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        ..ControlSignals::default()
    };

    let reject = || {
        Err(Fault::UnsupportedInstruction {
            opcode: inst.opcode(),
            funct3: inst.funct3(),
            funct7: inst.funct7(),
        })
    };

    match ctrl.opcode {
        opcodes::OP_REG => {
            ctrl.reg_write = true;
            ctrl.alu_op = alu_dispatch(inst, true)?;
        }

        opcodes::OP_IMM => {
            ctrl.reg_write = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::I);
            ctrl.alu_op = alu_dispatch(inst, false)?;
        }

        opcodes::OP_LOAD => {
            match ctrl.funct3 {
                funct3::LB | funct3::LH | funct3::LW | funct3::LBU | funct3::LHU => {}
                _ => return reject(),
            }
            ctrl.reg_write = true;
            ctrl.mem_read = true;
            ctrl.mem_to_reg = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::I);
            ctrl.alu_op = AluOp::Add;
        }

        opcodes::OP_STORE => {
            match ctrl.funct3 {
                funct3::SB | funct3::SH | funct3::SW => {}
                _ => return reject(),
            }
            ctrl.mem_write = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::S);
            ctrl.alu_op = AluOp::Add;
        }

        opcodes::OP_BRANCH => {
            let Some((alu_op, invert)) = branch_dispatch(ctrl.funct3) else {
                return reject();
            };
            ctrl.branch = true;
            ctrl.branch_invert = invert;
            ctrl.imm_format = Some(ImmFormat::B);
            ctrl.alu_op = alu_op;
        }

        // LUI computes 0 + immU through the adder; the zero comes from the
        // operand-A selector, not from rs1.
        opcodes::OP_LUI => {
            ctrl.reg_write = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::U);
            ctrl.alu_op = AluOp::Add;
        }

        // AUIPC computes PC + immU the same way, with PC on operand A.
        opcodes::OP_AUIPC => {
            ctrl.reg_write = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::U);
            ctrl.alu_op = AluOp::Add;
        }

        opcodes::OP_JAL => {
            ctrl.reg_write = true;
            ctrl.jump = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::J);
            ctrl.alu_op = AluOp::Add;
        }

        opcodes::OP_JALR => {
            if ctrl.funct3 != funct3::JALR {
                return reject();
            }
            ctrl.reg_write = true;
            ctrl.jump = true;
            ctrl.alu_src_imm = true;
            ctrl.imm_format = Some(ImmFormat::I);
            ctrl.alu_op = AluOp::Add;
        }

        _ => return reject(),
    }

    Ok(ctrl)
}
