//! Immediate generator tests.
//!
//! Bit-for-bit checks of every format's permutation and sign extension,
//! using the raw instruction builder so no assembler code is involved.

use rstest::rstest;

use crate::common::builder::InstructionBuilder;
use rv32_core::isa::imm::{ImmFormat, generate};
use rv32_core::isa::rv32i::opcodes;

// ─── I-format ────────────────────────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(2047)]
#[case(-1)]
#[case(-5)]
#[case(-2048)]
fn i_format_round_trips(#[case] value: i32) {
    let word = InstructionBuilder::new().addi(1, 0, value).build();
    assert_eq!(generate(ImmFormat::I, word), value);
}

#[test]
fn i_format_is_upper_twelve_bits() {
    // imm[11:0] = inst[31:20]; all ones decodes to -1.
    assert_eq!(generate(ImmFormat::I, 0xFFF00000), -1);
    assert_eq!(generate(ImmFormat::I, 0x80000000), -2048);
    assert_eq!(generate(ImmFormat::I, 0x7FF00000), 2047);
}

// ─── S-format ────────────────────────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(4)]
#[case(31)]
#[case(2047)]
#[case(-1)]
#[case(-32)]
#[case(-2048)]
fn s_format_round_trips(#[case] value: i32) {
    let word = InstructionBuilder::new().sw(2, 3, value).build();
    assert_eq!(generate(ImmFormat::S, word), value);
}

#[test]
fn s_format_reassembles_split_fields() {
    // imm[11:5] = inst[31:25], imm[4:0] = inst[11:7].
    // High field 0b0000001, low field 0b00001 => 0b000000100001 = 33.
    let word = (0b0000001 << 25) | (0b00001 << 7);
    assert_eq!(generate(ImmFormat::S, word), 33);
}

// ─── B-format ────────────────────────────────────────────────────────────────

#[test]
fn b_format_sign_bit_alone_is_minus_4096() {
    // Only inst[31] set: imm[12] = 1, everything else 0.
    assert_eq!(generate(ImmFormat::B, 0x80000000), -4096);
}

#[test]
fn b_format_bit_eleven_comes_from_inst_seven() {
    assert_eq!(generate(ImmFormat::B, 1 << 7), 2048);
}

#[test]
fn b_format_low_bit_is_always_zero() {
    for offset in [-4096, -8, -2, 2, 8, 2046, 4094] {
        let word = InstructionBuilder::new().beq(1, 2, offset).build();
        let decoded = generate(ImmFormat::B, word);
        assert_eq!(decoded % 2, 0);
        assert_eq!(decoded, offset);
    }
}

// ─── U-format ────────────────────────────────────────────────────────────────

#[test]
fn u_format_keeps_upper_twenty_bits() {
    let word = InstructionBuilder::new().lui(1, 0x12345000).build();
    assert_eq!(generate(ImmFormat::U, word), 0x12345000);
}

#[test]
fn u_format_clears_low_twelve_bits() {
    // Low 12 bits of the instruction are rd/opcode, not immediate.
    assert_eq!(generate(ImmFormat::U, 0xFFFFFFFF), 0xFFFFF000u32 as i32);
    assert_eq!(generate(ImmFormat::U, 0x00000FFF), 0);
}

// ─── J-format ────────────────────────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(2)]
#[case(-2)]
#[case(4096)]
#[case(-4096)]
#[case(1_048_574)]
#[case(-1_048_576)]
fn j_format_round_trips(#[case] offset: i32) {
    let word = InstructionBuilder::new().jal(1, offset).build();
    assert_eq!(generate(ImmFormat::J, word), offset);
}

#[test]
fn j_format_sign_bit_alone() {
    // Only inst[31] set: imm[20] = 1, sign-extended from 21 bits.
    assert_eq!(generate(ImmFormat::J, 0x80000000), -1_048_576);
}

#[test]
fn j_format_bit_eleven_comes_from_inst_twenty() {
    assert_eq!(generate(ImmFormat::J, 1 << 20), 2048);
}

// ─── Never mutates ───────────────────────────────────────────────────────────

#[test]
fn generation_is_pure() {
    let word = InstructionBuilder::new().addi(5, 6, -77).build();
    let first = generate(ImmFormat::I, word);
    let second = generate(ImmFormat::I, word);
    assert_eq!(first, second);
    assert_eq!(word, InstructionBuilder::new().addi(5, 6, -77).build());
}

#[test]
fn builder_uses_expected_opcodes() {
    let word = InstructionBuilder::new().addi(1, 0, 0).build();
    assert_eq!(word & 0x7F, opcodes::OP_IMM);
}
