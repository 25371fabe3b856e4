//! RV32I single-cycle datapath simulator library.
//!
//! This crate implements an instruction-set simulator for a constrained
//! RV32I subset, built as an explicit single-cycle datapath with the
//! following:
//! 1. **Core:** Register file, program counter, ALU, branch resolution, and
//!    the selection functions between them, sequenced by a one-step-at-a-time
//!    execution engine that exposes every intermediate value.
//! 2. **Memory:** Word-addressed program and data memories with alignment
//!    and bounds checking.
//! 3. **ISA:** Opcode/funct tables, field extraction, and per-format
//!    immediate generation for the R/I/S/B/U/J layouts.
//! 4. **Assembler:** A two-pass translator from assembly text to machine
//!    words with label resolution and a source-line map.
//! 5. **State:** Serde-serializable snapshots of registers, memory, and CPU
//!    state for export, import, and external history keeping.

/// Two-pass assembler.
pub mod asm;

/// Common constants and fault definitions.
pub mod common;

/// CPU core (architectural state, control unit, combinational units, engine).
pub mod core;

/// Instruction set tables, field extraction, and immediates.
pub mod isa;

/// Word-addressed memories.
pub mod mem;

/// Architectural state snapshots.
pub mod state;

/// Assembler entry point; see [`asm::assemble`].
pub use crate::asm::{Program, assemble};
/// Fault taxonomy shared by all datapath components.
pub use crate::common::error::Fault;
/// Main CPU type; construct with `Cpu::new` or `Cpu::default`.
pub use crate::core::{Cpu, StepTrace};
