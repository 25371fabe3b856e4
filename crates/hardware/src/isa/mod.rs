//! Instruction set definitions for the supported RV32I subset.
//!
//! This module collects everything that is a property of the instruction
//! encoding itself, independent of any datapath state:
//! 1. **Opcodes and Function Codes:** The fixed opcode/funct3/funct7 tables.
//! 2. **Field Extraction:** Bit-level access to instruction words.
//! 3. **Immediates:** Per-format extraction and sign extension.
//! 4. **ABI Names:** Register naming for the assembler and debug output.

/// Register ABI name constants and name-to-index resolution.
pub mod abi;

/// Immediate formats and the immediate generator.
pub mod imm;

/// Instruction field masks and the extraction trait.
pub mod instruction;

/// Base integer instruction set tables (opcodes, funct3, funct7).
pub mod rv32i;
