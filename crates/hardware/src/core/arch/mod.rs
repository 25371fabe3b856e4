//! Architectural state elements (register file, program counter).

/// Program counter register.
pub mod pc;

/// General-purpose register file.
pub mod reg;

pub use pc::ProgramCounter;
pub use reg::RegisterFile;
