//! Combinational units of the datapath.
//!
//! Everything in here is pure: the ALU, branch resolution, and the selection
//! functions standing in for the datapath's multiplexers. None of these hold
//! state between steps.

/// Arithmetic logic unit.
pub mod alu;

/// Branch resolution.
pub mod branch;

/// Operand, write-back, and PC-next selection functions.
pub mod mux;

pub use alu::{Alu, AluOutput};
