//! Architectural state snapshots.
//!
//! This module defines the serde-serializable snapshot types used for state
//! export and import. Snapshots are plain data: producing one never mutates
//! the component, and importing one validates shape before touching any
//! state. External collaborators (undo history, persistence, UIs) are built
//! entirely on these types.

use serde::{Deserialize, Serialize};

use crate::common::constants::NUM_REGISTERS;

/// Snapshot of the register file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterState {
    /// The 32 architectural registers, `x0` first.
    pub registers: [i32; NUM_REGISTERS],
}

/// Snapshot of a data memory's complete contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryState {
    /// Every word in the memory, in address order.
    pub words: Vec<i32>,
}

/// Snapshot of the CPU's non-memory architectural state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuState {
    /// Current program counter.
    pub pc: u32,
    /// Number of retired instructions since the last reset.
    pub cycles: u64,
    /// Register file contents.
    pub registers: RegisterState,
}

impl CpuState {
    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates the underlying serializer error, which cannot occur for
    /// this plain-data type in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
