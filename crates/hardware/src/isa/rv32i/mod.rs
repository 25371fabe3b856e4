//! RV32I base integer instruction set tables.

/// Funct3 codes for loads, stores, branches, and ALU operations.
pub mod funct3;

/// Funct7 codes distinguishing alternate encodings.
pub mod funct7;

/// Major opcodes (bits 6-0).
pub mod opcodes;
