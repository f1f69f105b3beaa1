mod common;

use chroma_core::registers::CcFlag;
use common::cpu_with_program;

#[test]
fn test_pshs_all_registers() {
    let mut cpu = cpu_with_program(0x1000, &[0x34, 0xFF]); // PSHS everything
    cpu.io.regs.a = 0x11;
    cpu.io.regs.b = 0x22;
    cpu.io.regs.dp = 0x33;
    cpu.io.regs.cc = CcFlag::N as u8;
    cpu.io.regs.x = 0x4455;
    cpu.io.regs.y = 0x6677;
    cpu.io.regs.u = 0x8899;
    cpu.io.regs.s = 0x8000;

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.regs.s, 0x8000 - 12);
    assert_eq!(ticks, 5 + 12);

    // Frame reads CC, A, B, DP, X, Y, U, PC upward from the new S
    let s = cpu.io.regs.s;
    assert_eq!(cpu.io.read_byte(s), CcFlag::N as u8);
    assert_eq!(cpu.io.read_byte(s.wrapping_add(1)), 0x11);
    assert_eq!(cpu.io.read_byte(s.wrapping_add(2)), 0x22);
    assert_eq!(cpu.io.read_byte(s.wrapping_add(3)), 0x33);
    assert_eq!(cpu.io.read_word(s.wrapping_add(4)), 0x4455);
    assert_eq!(cpu.io.read_word(s.wrapping_add(6)), 0x6677);
    assert_eq!(cpu.io.read_word(s.wrapping_add(8)), 0x8899);
    assert_eq!(cpu.io.read_word(s.wrapping_add(10)), 0x1002);
}

#[test]
fn test_pshs_single_register() {
    let mut cpu = cpu_with_program(0, &[0x34, 0x01]); // PSHS CC
    cpu.io.regs.cc = 0x2A;
    cpu.io.regs.s = 0x8000;

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.regs.s, 0x7FFF);
    assert_eq!(cpu.io.read_byte(0x7FFF), 0x2A);
    assert_eq!(ticks, 6);
}

#[test]
fn test_pshs_puls_round_trip() {
    let mut cpu = cpu_with_program(0x1000, &[0x34, 0x36, 0x35, 0x36]); // PSHS/PULS A,B,X,Y
    cpu.io.regs.a = 0xAB;
    cpu.io.regs.b = 0xCD;
    cpu.io.regs.x = 0x1234;
    cpu.io.regs.y = 0x5678;
    cpu.io.regs.s = 0x8000;

    cpu.step().unwrap();
    assert_eq!(cpu.io.regs.s, 0x8000 - 6);

    cpu.io.regs.a = 0;
    cpu.io.regs.b = 0;
    cpu.io.regs.x = 0;
    cpu.io.regs.y = 0;

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.regs.a, 0xAB);
    assert_eq!(cpu.io.regs.b, 0xCD);
    assert_eq!(cpu.io.regs.x, 0x1234);
    assert_eq!(cpu.io.regs.y, 0x5678);
    assert_eq!(cpu.io.regs.s, 0x8000);
    assert_eq!(ticks, 5 + 6);
}

#[test]
fn test_pshs_bit6_pushes_user_pointer() {
    let mut cpu = cpu_with_program(0, &[0x34, 0x40]); // PSHS U
    cpu.io.regs.u = 0xBEEF;
    cpu.io.regs.s = 0x8000;

    cpu.step().unwrap();

    assert_eq!(cpu.io.read_word(0x7FFE), 0xBEEF);
}

#[test]
fn test_pshu_bit6_pushes_system_pointer() {
    let mut cpu = cpu_with_program(0, &[0x36, 0x40]); // PSHU S
    cpu.io.regs.s = 0xCAFE;
    cpu.io.regs.u = 0x8000;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.u, 0x7FFE);
    assert_eq!(cpu.io.read_word(0x7FFE), 0xCAFE);
    // S itself untouched by a U-stack push
    assert_eq!(cpu.io.regs.s, 0xCAFE);
}

#[test]
fn test_pulu_bit6_restores_system_pointer() {
    let mut cpu = cpu_with_program(0, &[0x37, 0x40]); // PULU S
    cpu.io.regs.u = 0x7FFE;
    cpu.io.memory.load(0x7FFE, &[0x12, 0x34]);

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.s, 0x1234);
    assert_eq!(cpu.io.regs.u, 0x8000);
}

#[test]
fn test_puls_pc_acts_as_return() {
    let mut cpu = cpu_with_program(0x1000, &[0x35, 0x80]); // PULS PC
    cpu.io.regs.s = 0x7FFE;
    cpu.io.memory.load(0x7FFE, &[0x20, 0x00]);

    let ticks = cpu.step().unwrap();

    assert_eq!(cpu.io.regs.pc, 0x2000);
    assert_eq!(cpu.io.regs.s, 0x8000);
    assert_eq!(ticks, 7);
}

#[test]
fn test_pshu_uses_user_stack() {
    let mut cpu = cpu_with_program(0, &[0x36, 0x06]); // PSHU A,B
    cpu.io.regs.a = 0x12;
    cpu.io.regs.b = 0x34;
    cpu.io.regs.u = 0x6000;
    cpu.io.regs.s = 0x8000;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.u, 0x5FFE);
    assert_eq!(cpu.io.regs.s, 0x8000);
    assert_eq!(cpu.io.read_byte(0x5FFE), 0x12);
    assert_eq!(cpu.io.read_byte(0x5FFF), 0x34);
}

#[test]
fn test_stack_pointer_wraps_at_zero() {
    // No underflow detection: the pointer wraps into the I/O window
    let mut cpu = cpu_with_program(0, &[0x34, 0x03]); // PSHS CC,A
    cpu.io.regs.s = 0x0001;
    cpu.io.regs.a = 0x55;
    cpu.io.regs.cc = 0x2A;

    cpu.step().unwrap();

    assert_eq!(cpu.io.regs.s, 0xFFFF);
    assert_eq!(cpu.io.read_byte(0x0000), 0x55);
}
