//! CPU core: architectural state and the single-cycle execution engine.
//!
//! This module owns all mutable CPU state and sequences one full instruction
//! retirement per [`Cpu::step`] call:
//! 1. **Fetch:** Read the instruction word at the program counter.
//! 2. **Decode:** Derive control signals and the immediate.
//! 3. **Register Read:** Read both source registers.
//! 4. **Execute:** Select operands and run the ALU.
//! 5. **Branch Resolution:** Combine control signals with the ALU result.
//! 6. **Memory Access:** Load or store at the ALU-computed address.
//! 7. **Write-Back:** Store the selected value into the destination register.
//! 8. **PC Update:** Select and commit the next program counter.
//!
//! A fault anywhere in the sequence propagates unmodified and aborts the
//! step; stages already executed are not rolled back.

use serde::Serialize;

use crate::common::error::Fault;
use crate::isa::imm;
use crate::isa::rv32i::opcodes;
use crate::mem::{DataMemory, ProgramMemory};
use crate::state::CpuState;

/// Architectural state elements.
pub mod arch;

/// Decoder / control unit.
pub mod control;

/// Control signal definitions.
pub mod signals;

/// Combinational units (ALU, branch resolution, selectors).
pub mod units;

use arch::{ProgramCounter, RegisterFile};
use signals::ControlSignals;
use units::mux;
use units::{Alu, branch};

/// Complete record of one executed step.
///
/// Every intermediate value of the datapath is exposed so external
/// collaborators (UIs, trace logs, history buffers) can render the step
/// without re-deriving anything. The record is a transient return value; the
/// engine does not retain it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StepTrace {
    /// Program counter the instruction was fetched from.
    pub pc_before: u32,
    /// Program counter committed at the end of the step.
    pub pc_after: u32,
    /// The fetched instruction word.
    pub instruction: u32,
    /// Decoded control signals.
    pub control: ControlSignals,
    /// Sign-extended immediate (zero when the format carries none).
    pub immediate: i32,
    /// First source register value.
    pub rs1_value: i32,
    /// Second source register value.
    pub rs2_value: i32,
    /// Value selected onto the ALU's first input.
    pub alu_operand_a: i32,
    /// Value selected onto the ALU's second input.
    pub alu_operand_b: i32,
    /// ALU result (also the memory address for loads and stores).
    pub alu_result: i32,
    /// Byte address presented to data memory.
    pub mem_address: u32,
    /// Word read from data memory (zero when `mem_read` is clear).
    pub mem_read_value: i32,
    /// Whether branch resolution took the branch.
    pub branch_taken: bool,
}

/// The single-cycle CPU: registers, memories, and program counter.
///
/// All mutable state lives here and is touched only through
/// [`Cpu::step`] (and the explicit reset/import operations). There is no
/// hidden global state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program counter.
    pub pc: ProgramCounter,
    /// Instruction memory.
    pub program_mem: ProgramMemory,
    /// Data memory.
    pub data_mem: DataMemory,
    /// General-purpose register file.
    pub regs: RegisterFile,
    cycles: u64,
}

impl Cpu {
    /// Creates a CPU around the given memories, starting at `initial_pc`.
    pub fn new(program_mem: ProgramMemory, data_mem: DataMemory, initial_pc: u32) -> Self {
        Self {
            pc: ProgramCounter::new(initial_pc),
            program_mem,
            data_mem,
            regs: RegisterFile::new(),
            cycles: 0,
        }
    }

    /// Number of instructions retired since the last reset.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Executes exactly one instruction.
    ///
    /// Runs the full fetch/decode/execute/memory/write-back/pc-update
    /// sequence and returns the trace of every intermediate value.
    ///
    /// # Errors
    ///
    /// Propagates any [`Fault`] from fetch, decode, register access, or
    /// memory access. State mutated before the failing stage stays mutated;
    /// callers must treat the run as over and reset explicitly if they want
    /// a clean machine.
    pub fn step(&mut self) -> Result<StepTrace, Fault> {
        let pc_before = self.pc.value();

        // Fetch and decode.
        let instruction = self.program_mem.read(pc_before)?;
        let ctrl = control::decode(instruction)?;

        let immediate = ctrl.imm_format.map_or(0, |f| imm::generate(f, instruction));

        // Register read.
        let (rs1_value, rs2_value) = self.regs.read_pair(ctrl.rs1, ctrl.rs2)?;

        // Execute.
        let alu_operand_a = mux::operand_a(&ctrl, pc_before, rs1_value);
        let alu_operand_b = mux::operand_b(ctrl.alu_src_imm, rs2_value, immediate);
        let alu = Alu::execute(ctrl.alu_op, alu_operand_a, alu_operand_b);

        // Branch resolution.
        let branch_taken = branch::take_branch(ctrl.branch, ctrl.branch_invert, alu.result);

        // Memory access: the address is always the ALU result.
        let mem_address = alu.result as u32;
        let mem_read_value = if ctrl.mem_read {
            self.data_mem.read(mem_address)?
        } else {
            0
        };
        let _ = self.data_mem.write(mem_address, rs2_value, ctrl.mem_write)?;

        // Write-back. Jumps link pc + 4; everything else goes through the
        // write-back selector.
        if ctrl.reg_write {
            let value = if ctrl.jump {
                pc_before.wrapping_add(4) as i32
            } else {
                mux::write_back(ctrl.mem_to_reg, alu.result, mem_read_value)
            };
            let _ = self.regs.write(ctrl.rd, value)?;
        }

        // PC update, committed exactly once per completed step.
        let is_jalr = ctrl.jump && ctrl.opcode == opcodes::OP_JALR;
        let pc_after = mux::next_pc(
            pc_before,
            branch_taken,
            immediate,
            ctrl.jump,
            is_jalr,
            immediate,
            rs1_value,
        );
        self.pc.set(pc_after);
        self.cycles += 1;

        tracing::trace!(
            pc = pc_before,
            inst = instruction,
            alu_result = alu.result,
            branch_taken,
            "retired instruction"
        );

        Ok(StepTrace {
            pc_before,
            pc_after,
            instruction,
            control: ctrl,
            immediate,
            rs1_value,
            rs2_value,
            alu_operand_a,
            alu_operand_b,
            alu_result: alu.result,
            mem_address,
            mem_read_value,
            branch_taken,
        })
    }

    /// Executes `n` steps, stopping at the first fault.
    ///
    /// # Errors
    ///
    /// The fault of the failing step, with earlier steps' effects retained.
    pub fn run_steps(&mut self, n: u64) -> Result<(), Fault> {
        for _ in 0..n {
            let _ = self.step()?;
        }
        Ok(())
    }

    /// Clears registers, data memory, the cycle counter, and the program
    /// counter.
    ///
    /// Program memory is left intact so the loaded program can be re-run.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.data_mem.reset();
        self.pc.reset();
        self.cycles = 0;
    }

    /// Exports the non-memory architectural state as a snapshot.
    pub fn state(&self) -> CpuState {
        CpuState {
            pc: self.pc.value(),
            cycles: self.cycles,
            registers: self.regs.export(),
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(ProgramMemory::default(), DataMemory::default(), 0)
    }
}
