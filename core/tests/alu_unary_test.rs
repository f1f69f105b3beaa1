mod common;

use chroma_core::registers::CcFlag;
use common::cpu_with_program;

#[test]
fn test_nega_minus_128_is_its_own_negation() {
    let mut cpu = cpu_with_program(0x1000, &[0x40]); // NEGA
    cpu.io.regs.a = 0x80;

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x80);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(ticks, 2);
}

#[test]
fn test_nega_nonzero() {
    let mut cpu = cpu_with_program(0, &[0x40]);
    cpu.io.regs.a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0xFF);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    // Any negative result also reports V
    assert_ne!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
}

#[test]
fn test_nega_zero_sets_only_zero() {
    let mut cpu = cpu_with_program(0, &[0x40]);
    cpu.io.regs.a = 0x00;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
}

#[test]
fn test_coma_sets_carry_clears_overflow() {
    let mut cpu = cpu_with_program(0, &[0x43]); // COMA
    cpu.io.regs.a = 0x55;
    cpu.io.regs.cc = CcFlag::V as u8;

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0xAA);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(ticks, 2);
}

#[test]
fn test_lsra_shifts_bit_zero_into_carry() {
    let mut cpu = cpu_with_program(0, &[0x44]); // LSRA
    cpu.io.regs.a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
}

#[test]
fn test_lsra_never_sets_negative() {
    let mut cpu = cpu_with_program(0, &[0x44]);
    cpu.io.regs.a = 0xFE;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x7F);
    assert_eq!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
}

#[test]
fn test_rora_rotates_carry_into_bit_seven() {
    let mut cpu = cpu_with_program(0, &[0x46]); // RORA
    cpu.io.regs.a = 0x02;
    cpu.io.regs.cc = CcFlag::C as u8;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x81);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
}

#[test]
fn test_asra_preserves_sign_bit() {
    let mut cpu = cpu_with_program(0, &[0x47]); // ASRA
    cpu.io.regs.a = 0x81;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0xC0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
}

#[test]
fn test_asla_carry_and_overflow_from_top_bits() {
    // bit7 set, bit6 clear: C set, V set
    let mut cpu = cpu_with_program(0, &[0x48]); // ASLA
    cpu.io.regs.a = 0x80;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
}

#[test]
fn test_asla_equal_top_bits_clear_overflow() {
    let mut cpu = cpu_with_program(0, &[0x48]);
    cpu.io.regs.a = 0xC0;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x80);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
}

#[test]
fn test_rola_rotates_carry_into_bit_zero() {
    let mut cpu = cpu_with_program(0, &[0x49]); // ROLA
    cpu.io.regs.a = 0x80;
    cpu.io.regs.cc = CcFlag::C as u8;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x01);
    assert_ne!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
}

#[test]
fn test_deca_wraps_zero_with_overflow() {
    let mut cpu = cpu_with_program(0, &[0x4A]); // DECA
    cpu.io.regs.a = 0x00;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0xFF);
    assert_ne!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
}

#[test]
fn test_deca_to_zero() {
    let mut cpu = cpu_with_program(0, &[0x4A]);
    cpu.io.regs.a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
}

#[test]
fn test_inca_signed_overflow() {
    let mut cpu = cpu_with_program(0, &[0x4C]); // INCA
    cpu.io.regs.a = 0x7F;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x80);
    assert_ne!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
}

#[test]
fn test_incb_wraps_to_zero() {
    let mut cpu = cpu_with_program(0, &[0x5C]); // INCB
    cpu.io.regs.b = 0xFF;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.b, 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
}

#[test]
fn test_tsta_updates_flags_only() {
    let mut cpu = cpu_with_program(0, &[0x4D]); // TSTA
    cpu.io.regs.a = 0x80;
    cpu.io.regs.cc = CcFlag::V as u8;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x80);
    assert_ne!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
}

#[test]
fn test_clra_fixed_flag_pattern() {
    let mut cpu = cpu_with_program(0, &[0x4F]); // CLRA
    cpu.io.regs.a = 0x5A;
    cpu.io.regs.cc = CcFlag::N as u8 | CcFlag::V as u8 | CcFlag::C as u8;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::N as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::V as u8), 0);
    assert_eq!(cpu.io.regs.cc & (CcFlag::C as u8), 0);
}

#[test]
fn test_neg_direct_rewrites_memory() {
    let mut cpu = cpu_with_program(0x1000, &[0x00, 0x10]); // NEG <$10
    cpu.io.regs.dp = 0x20;
    cpu.io.memory.load(0x2010, &[0x01]);

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.read_byte(0x2010), 0xFF);
    assert_eq!(cpu.io.regs.pc, 0x1002);
    assert_eq!(ticks, 6);
}

#[test]
fn test_com_extended_rewrites_memory() {
    let mut cpu = cpu_with_program(0x1000, &[0x73, 0x20, 0x10]); // COM $2010
    cpu.io.memory.load(0x2010, &[0x55]);

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.read_byte(0x2010), 0xAA);
    assert_eq!(cpu.io.regs.pc, 0x1003);
    assert_eq!(ticks, 7);
}

#[test]
fn test_clr_indexed_rewrites_memory() {
    let mut cpu = cpu_with_program(0x1000, &[0x6F, 0x84]); // CLR ,X
    cpu.io.regs.x = 0x3000;
    cpu.io.memory.load(0x3000, &[0x99]);

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.read_byte(0x3000), 0x00);
    assert_ne!(cpu.io.regs.cc & (CcFlag::Z as u8), 0);
    assert_eq!(ticks, 5); // 4 + 1 postbyte
}
