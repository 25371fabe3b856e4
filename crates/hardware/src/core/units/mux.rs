//! Datapath selection functions.
//!
//! The hardware multiplexers of the single-cycle datapath, modeled as pure
//! functions rather than stateful objects: operand-A and operand-B selection
//! in front of the ALU, the write-back source selector, and the PC-next
//! selector.

use crate::core::signals::ControlSignals;
use crate::isa::rv32i::opcodes;

/// Selects the first ALU operand.
///
/// Most instructions feed `rs1` into the ALU. AUIPC and JAL feed the current
/// PC (target and link arithmetic are PC-relative), and LUI feeds zero so
/// the adder passes the upper immediate through.
pub const fn operand_a(ctrl: &ControlSignals, pc: u32, rs1_value: i32) -> i32 {
    match ctrl.opcode {
        opcodes::OP_AUIPC | opcodes::OP_JAL => pc as i32,
        opcodes::OP_LUI => 0,
        _ => rs1_value,
    }
}

/// Selects the second ALU operand: the immediate when `alu_src_imm` is set,
/// otherwise `rs2`.
pub const fn operand_b(alu_src_imm: bool, rs2_value: i32, immediate: i32) -> i32 {
    if alu_src_imm { immediate } else { rs2_value }
}

/// Selects the write-back value: memory data when `mem_to_reg` is set,
/// otherwise the ALU result.
///
/// The link value for jumps bypasses this selector entirely; the execution
/// engine writes `pc + 4` directly.
pub const fn write_back(mem_to_reg: bool, alu_result: i32, mem_value: i32) -> i32 {
    if mem_to_reg { mem_value } else { alu_result }
}

/// Selects the next program counter.
///
/// Priority order: JALR computes `(rs1 + immediate)` with bit 0 cleared;
/// JAL computes `pc + immediate`; a taken branch computes
/// `pc + branch_offset`; everything else falls through to `pc + 4`.
/// All additions wrap at 32 bits.
///
/// # Arguments
///
/// * `pc` - Current program counter.
/// * `take_branch` - Branch resolution verdict.
/// * `branch_offset` - B-format immediate (already sign-extended).
/// * `jump` - Control signal for JAL/JALR.
/// * `is_jalr` - Distinguishes JALR from JAL.
/// * `immediate` - I- or J-format immediate for the jump target.
/// * `rs1_value` - Base register value for JALR.
pub const fn next_pc(
    pc: u32,
    take_branch: bool,
    branch_offset: i32,
    jump: bool,
    is_jalr: bool,
    immediate: i32,
    rs1_value: i32,
) -> u32 {
    if jump && is_jalr {
        return (rs1_value.wrapping_add(immediate) & !1) as u32;
    }

    if jump {
        return pc.wrapping_add_signed(immediate);
    }

    if take_branch {
        return pc.wrapping_add_signed(branch_offset);
    }

    pc.wrapping_add(4)
}
