//! Word store tests.
//!
//! Alignment and bounds enforcement, the write-enable gate, resets, and
//! snapshot export/import for both memories.

use pretty_assertions::assert_eq;

use rv32_core::Fault;
use rv32_core::mem::{DataMemory, ProgramMemory};
use rv32_core::state::MemoryState;

const CAPACITY: usize = 16;

// ─── Data memory ─────────────────────────────────────────────────────────────

#[test]
fn write_then_read_round_trips() {
    let mut mem = DataMemory::new(CAPACITY);
    assert!(mem.write(0, 15, true).unwrap());
    assert!(mem.write(60, -7, true).unwrap());
    assert_eq!(mem.read(0).unwrap(), 15);
    assert_eq!(mem.read(60).unwrap(), -7);
}

#[test]
fn write_enable_low_is_a_gated_no_op() {
    let mut mem = DataMemory::new(CAPACITY);
    let _ = mem.write(8, 42, true).unwrap();

    assert!(!mem.write(8, 99, false).unwrap());
    assert_eq!(mem.read(8).unwrap(), 42);
}

#[test]
fn misaligned_addresses_fail() {
    let mut mem = DataMemory::new(CAPACITY);
    for addr in [1u32, 2, 3, 5, 61] {
        assert_eq!(mem.read(addr), Err(Fault::MisalignedAddress(addr)));
        assert_eq!(mem.write(addr, 1, true), Err(Fault::MisalignedAddress(addr)));
    }
}

#[test]
fn out_of_range_addresses_fail() {
    let mut mem = DataMemory::new(CAPACITY);
    let first_bad = CAPACITY as u32 * 4;
    assert_eq!(mem.read(first_bad), Err(Fault::AddressOutOfRange(first_bad)));
    assert_eq!(
        mem.write(first_bad, 1, true),
        Err(Fault::AddressOutOfRange(first_bad))
    );
}

#[test]
fn negative_address_bits_fail() {
    // -4 viewed as an unsigned byte address is far past capacity.
    let mem = DataMemory::new(CAPACITY);
    let addr = -4i32 as u32;
    assert_eq!(mem.read(addr), Err(Fault::AddressOutOfRange(addr)));
}

#[test]
fn failed_access_does_not_mutate() {
    let mut mem = DataMemory::new(CAPACITY);
    let _ = mem.write(0, 123, true).unwrap();
    let before = mem.export();

    let _ = mem.read(3).unwrap_err();
    let _ = mem.write(2, 9, true).unwrap_err();
    let _ = mem.write(CAPACITY as u32 * 4, 9, true).unwrap_err();

    assert_eq!(mem.export(), before);
}

#[test]
fn reset_clears_all_words() {
    let mut mem = DataMemory::new(CAPACITY);
    let _ = mem.write(0, 1, true).unwrap();
    let _ = mem.write(4, 2, true).unwrap();
    mem.reset();
    assert_eq!(mem.read(0).unwrap(), 0);
    assert_eq!(mem.read(4).unwrap(), 0);
}

#[test]
fn export_import_round_trips() {
    let mut mem = DataMemory::new(CAPACITY);
    let _ = mem.write(12, -55, true).unwrap();

    let snapshot = mem.export();
    assert_eq!(snapshot.words.len(), CAPACITY);

    let mut restored = DataMemory::new(CAPACITY);
    restored.import(&snapshot).unwrap();
    assert_eq!(restored.read(12).unwrap(), -55);
}

#[test]
fn import_rejects_length_mismatch() {
    let mut mem = DataMemory::new(CAPACITY);
    let _ = mem.write(0, 7, true).unwrap();

    let wrong = MemoryState {
        words: vec![0; CAPACITY - 1],
    };
    assert_eq!(
        mem.import(&wrong),
        Err(Fault::StateSizeMismatch {
            expected: CAPACITY,
            actual: CAPACITY - 1,
        })
    );
    // Contents untouched by the rejected import.
    assert_eq!(mem.read(0).unwrap(), 7);
}

// ─── Program memory ──────────────────────────────────────────────────────────

#[test]
fn program_words_are_unsigned_bit_patterns() {
    let mut mem = ProgramMemory::new(CAPACITY);
    mem.write(0, 0xFFFFFFFF).unwrap();
    assert_eq!(mem.read(0).unwrap(), 0xFFFFFFFF);
}

#[test]
fn sequential_load_starts_at_address_zero() {
    let mut mem = ProgramMemory::new(CAPACITY);
    mem.load(&[0x11, 0x22, 0x33]).unwrap();
    assert_eq!(mem.read(0).unwrap(), 0x11);
    assert_eq!(mem.read(4).unwrap(), 0x22);
    assert_eq!(mem.read(8).unwrap(), 0x33);
    assert_eq!(mem.read(12).unwrap(), 0);
}

#[test]
fn oversized_program_is_rejected_whole() {
    let mut mem = ProgramMemory::new(2);
    let err = mem.load(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, Fault::AddressOutOfRange(_)));
    // Nothing was partially written.
    assert_eq!(mem.read(0).unwrap(), 0);
}

#[test]
fn program_fetch_checks_alignment_and_bounds() {
    let mem = ProgramMemory::new(CAPACITY);
    assert_eq!(mem.read(6), Err(Fault::MisalignedAddress(6)));
    assert_eq!(
        mem.read(CAPACITY as u32 * 4),
        Err(Fault::AddressOutOfRange(CAPACITY as u32 * 4))
    );
}

#[test]
fn capacities_are_reported() {
    assert_eq!(DataMemory::new(CAPACITY).capacity(), CAPACITY);
    assert_eq!(ProgramMemory::new(CAPACITY).capacity(), CAPACITY);
    assert_eq!(DataMemory::default().capacity(), 1024);
    assert_eq!(ProgramMemory::default().capacity(), 1024);
}
