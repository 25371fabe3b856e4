//! Decoder / control unit tests.
//!
//! Covers the full opcode dispatch table: the control signals each class
//! produces, the funct3/funct7 refinement for the ALU families, and the
//! rejection of every combination outside the supported subset.

use rstest::rstest;

use crate::common::builder::InstructionBuilder;
use rv32_core::Fault;
use rv32_core::core::control::decode;
use rv32_core::core::signals::AluOp;
use rv32_core::isa::imm::ImmFormat;
use rv32_core::isa::rv32i::opcodes;

fn r_type(funct3: u32, funct7: u32) -> u32 {
    InstructionBuilder::new()
        .opcode(opcodes::OP_REG)
        .rd(1)
        .rs1(2)
        .rs2(3)
        .funct3(funct3)
        .funct7(funct7)
        .build()
}

fn i_type(funct3: u32, imm: i32) -> u32 {
    InstructionBuilder::new()
        .opcode(opcodes::OP_IMM)
        .rd(1)
        .rs1(2)
        .funct3(funct3)
        .imm(imm)
        .build()
}

// ─── Field extraction ────────────────────────────────────────────────────────

#[test]
fn fields_are_extracted_verbatim() {
    let word = InstructionBuilder::new().add(5, 6, 7).build();
    let ctrl = decode(word).unwrap();
    assert_eq!(ctrl.opcode, opcodes::OP_REG);
    assert_eq!(ctrl.rd, 5);
    assert_eq!(ctrl.rs1, 6);
    assert_eq!(ctrl.rs2, 7);
    assert_eq!(ctrl.funct3, 0);
    assert_eq!(ctrl.funct7, 0);
}

// ─── R-type dispatch ─────────────────────────────────────────────────────────

#[rstest]
#[case(0b000, 0b0000000, AluOp::Add)]
#[case(0b000, 0b0100000, AluOp::Sub)]
#[case(0b001, 0b0000000, AluOp::Sll)]
#[case(0b010, 0b0000000, AluOp::Slt)]
#[case(0b011, 0b0000000, AluOp::Sltu)]
#[case(0b100, 0b0000000, AluOp::Xor)]
#[case(0b101, 0b0000000, AluOp::Srl)]
#[case(0b101, 0b0100000, AluOp::Sra)]
#[case(0b110, 0b0000000, AluOp::Or)]
#[case(0b111, 0b0000000, AluOp::And)]
fn r_type_alu_dispatch(#[case] funct3: u32, #[case] funct7: u32, #[case] expected: AluOp) {
    let ctrl = decode(r_type(funct3, funct7)).unwrap();
    assert_eq!(ctrl.alu_op, expected);
    assert!(ctrl.reg_write);
    assert!(!ctrl.alu_src_imm);
    assert!(!ctrl.mem_read && !ctrl.mem_write && !ctrl.branch && !ctrl.jump);
    assert_eq!(ctrl.imm_format, None);
}

#[rstest]
#[case(0b000, 0b1000000)]
#[case(0b001, 0b0100000)]
#[case(0b111, 0b0000001)]
#[case(0b110, 0b0100000)]
fn r_type_rejects_unknown_funct7(#[case] funct3: u32, #[case] funct7: u32) {
    assert!(matches!(
        decode(r_type(funct3, funct7)),
        Err(Fault::UnsupportedInstruction { .. })
    ));
}

// ─── I-type dispatch ─────────────────────────────────────────────────────────

#[rstest]
#[case(0b000, AluOp::Add)]
#[case(0b010, AluOp::Slt)]
#[case(0b011, AluOp::Sltu)]
#[case(0b100, AluOp::Xor)]
#[case(0b110, AluOp::Or)]
#[case(0b111, AluOp::And)]
fn i_type_alu_dispatch(#[case] funct3: u32, #[case] expected: AluOp) {
    let ctrl = decode(i_type(funct3, 42)).unwrap();
    assert_eq!(ctrl.alu_op, expected);
    assert!(ctrl.reg_write);
    assert!(ctrl.alu_src_imm);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::I));
}

#[test]
fn addi_accepts_any_immediate_bits_in_funct7() {
    // A negative immediate fills the funct7 field with ones; ADDI must not
    // treat that as an alternate encoding.
    let ctrl = decode(i_type(0b000, -1)).unwrap();
    assert_eq!(ctrl.alu_op, AluOp::Add);
}

#[test]
fn shift_immediates_check_funct7() {
    // SLLI/SRLI need funct7 zero; SRAI needs the alternate bit.
    let slli = i_type(0b001, 5);
    assert_eq!(decode(slli).unwrap().alu_op, AluOp::Sll);

    let srli = i_type(0b101, 5);
    assert_eq!(decode(srli).unwrap().alu_op, AluOp::Srl);

    let srai = i_type(0b101, (0b0100000 << 5) | 5);
    assert_eq!(decode(srai).unwrap().alu_op, AluOp::Sra);

    let bad_slli = i_type(0b001, (0b0100000 << 5) | 5);
    assert!(matches!(
        decode(bad_slli),
        Err(Fault::UnsupportedInstruction { .. })
    ));
}

// ─── Loads and stores ────────────────────────────────────────────────────────

#[rstest]
#[case(0b000)]
#[case(0b001)]
#[case(0b010)]
#[case(0b100)]
#[case(0b101)]
fn load_signals(#[case] funct3: u32) {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_LOAD)
        .rd(1)
        .rs1(2)
        .funct3(funct3)
        .imm(8)
        .build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.reg_write);
    assert!(ctrl.mem_read);
    assert!(ctrl.mem_to_reg);
    assert!(ctrl.alu_src_imm);
    assert!(!ctrl.mem_write);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::I));
    assert_eq!(ctrl.alu_op, AluOp::Add);
}

#[rstest]
#[case(0b011)]
#[case(0b110)]
#[case(0b111)]
fn load_rejects_unknown_widths(#[case] funct3: u32) {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_LOAD)
        .funct3(funct3)
        .build();
    assert!(matches!(
        decode(word),
        Err(Fault::UnsupportedInstruction { .. })
    ));
}

#[rstest]
#[case(0b000)]
#[case(0b001)]
#[case(0b010)]
fn store_signals(#[case] funct3: u32) {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_STORE)
        .rs1(2)
        .rs2(3)
        .funct3(funct3)
        .imm(4)
        .build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.mem_write);
    assert!(!ctrl.reg_write);
    assert!(!ctrl.mem_read);
    assert!(ctrl.alu_src_imm);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::S));
}

#[test]
fn store_rejects_unknown_widths() {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_STORE)
        .funct3(0b011)
        .build();
    assert!(matches!(
        decode(word),
        Err(Fault::UnsupportedInstruction { .. })
    ));
}

// ─── Branches ────────────────────────────────────────────────────────────────

#[rstest]
#[case(0b000, AluOp::Seq, false)]
#[case(0b001, AluOp::Seq, true)]
#[case(0b100, AluOp::Slt, false)]
#[case(0b101, AluOp::Slt, true)]
#[case(0b110, AluOp::Sltu, false)]
#[case(0b111, AluOp::Sltu, true)]
fn branch_dispatch(#[case] funct3: u32, #[case] alu_op: AluOp, #[case] invert: bool) {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_BRANCH)
        .rs1(1)
        .rs2(2)
        .funct3(funct3)
        .imm(8)
        .build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.branch);
    assert_eq!(ctrl.branch_invert, invert);
    assert_eq!(ctrl.alu_op, alu_op);
    assert!(!ctrl.reg_write);
    assert!(!ctrl.alu_src_imm);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::B));
}

#[rstest]
#[case(0b010)]
#[case(0b011)]
fn branch_rejects_unknown_conditions(#[case] funct3: u32) {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_BRANCH)
        .funct3(funct3)
        .build();
    assert!(matches!(
        decode(word),
        Err(Fault::UnsupportedInstruction { .. })
    ));
}

// ─── Upper immediates and jumps ──────────────────────────────────────────────

#[test]
fn lui_signals() {
    let word = InstructionBuilder::new().lui(3, 0x12345000).build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.reg_write);
    assert!(ctrl.alu_src_imm);
    assert!(!ctrl.jump);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::U));
    assert_eq!(ctrl.alu_op, AluOp::Add);
}

#[test]
fn auipc_signals() {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_AUIPC)
        .rd(3)
        .imm(0x1000)
        .build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.reg_write);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::U));
}

#[test]
fn jal_signals() {
    let word = InstructionBuilder::new().jal(1, 8).build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.jump);
    assert!(ctrl.reg_write);
    assert!(!ctrl.branch);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::J));
}

#[test]
fn jalr_signals() {
    let word = InstructionBuilder::new().jalr(1, 2, 4).build();
    let ctrl = decode(word).unwrap();
    assert!(ctrl.jump);
    assert!(ctrl.reg_write);
    assert_eq!(ctrl.imm_format, Some(ImmFormat::I));
}

#[test]
fn jalr_requires_funct3_zero() {
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_JALR)
        .rd(1)
        .rs1(2)
        .funct3(0b010)
        .build();
    assert!(matches!(
        decode(word),
        Err(Fault::UnsupportedInstruction { .. })
    ));
}

// ─── Unknown opcodes ─────────────────────────────────────────────────────────

#[rstest]
#[case(0b0000000)]
#[case(0b1111111)]
#[case(0b0001111)] // FENCE, outside the subset
#[case(0b1110011)] // SYSTEM, outside the subset
fn unknown_opcodes_are_rejected(#[case] opcode: u32) {
    let err = decode(opcode).unwrap_err();
    assert!(matches!(
        err,
        Fault::UnsupportedInstruction { opcode: o, .. } if o == opcode
    ));
}

#[test]
fn decode_never_defaults_on_failure() {
    // A rejected word reports the exact fields it saw.
    let word = InstructionBuilder::new()
        .opcode(opcodes::OP_REG)
        .funct3(0b001)
        .funct7(0b0100000)
        .build();
    let err = decode(word).unwrap_err();
    assert_eq!(
        err,
        Fault::UnsupportedInstruction {
            opcode: opcodes::OP_REG,
            funct3: 0b001,
            funct7: 0b0100000,
        }
    );
}
