//! Instruction field extraction.
//!
//! Provides bit masks and an extraction trait for reading the fields of a
//! 32-bit RV32I instruction word. Extraction is read-only: the instruction
//! word is never mutated.

/// Bit mask for extracting the opcode field (bits 6-0).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 11-7).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 19-15).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 24-20).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 14-12).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 31-25).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instruction words.
///
/// Provides methods to extract all standard RV32I instruction fields from a
/// 32-bit encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 6-0).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 11-7).
    ///
    /// Returns the 5-bit register index (0-31) for the destination register.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 19-15).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 24-20).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 14-12).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 31-25).
    ///
    /// Used to distinguish between standard and alternate encodings
    /// (e.g., ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}
