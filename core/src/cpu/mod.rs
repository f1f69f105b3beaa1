//! The instruction execution engine: opcode dispatch across the primary
//! and 0x10/0x11 pages, the step-wise execution loop, and pending-interrupt
//! delivery. Handler families live in the sibling modules.

mod alu;
mod branch;
mod load_store;
mod stack;
mod trace;
mod transfer;

use crate::io::IoController;
use crate::registers::{CcFlag, Register};
use crate::{EmuError, Result};

pub struct Cpu {
    pub io: IoController,
    trace: bool,
    fire_irq: bool,
    fire_firq: bool,
    fire_nmi: bool,
}

impl Cpu {
    pub fn new(io: IoController) -> Self {
        Self {
            io,
            trace: false,
            fire_irq: false,
            fire_firq: false,
            fire_nmi: false,
        }
    }

    /// Re-initialises the machine: CC masks both interrupt lines, PC at
    /// 0xC000, MMU off, ROM mode 2.
    pub fn reset(&mut self) {
        self.io.reset();
    }

    /// When enabled, every `step` emits a trace line with PC, opcode,
    /// mnemonic and a register snapshot through the `log` facade.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Latches an interrupt request; delivered after the current
    /// instruction if the I mask allows.
    pub fn schedule_irq(&mut self) {
        self.fire_irq = true;
    }

    /// Latches a fast interrupt request; delivered after the current
    /// instruction if the F mask allows.
    pub fn schedule_firq(&mut self) {
        self.fire_firq = true;
    }

    /// Latches a non-maskable interrupt; always delivered after the
    /// current instruction.
    pub fn schedule_nmi(&mut self) {
        self.fire_nmi = true;
    }

    /// Executes exactly one instruction and returns its cycle count.
    pub fn step(&mut self) -> Result<u32> {
        self.execute_instruction()
    }

    fn execute_instruction(&mut self) -> Result<u32> {
        let start_pc = self.io.regs.pc;
        let opcode = self.io.read_byte(start_pc);
        self.io.regs.increment_pc();

        let (name, ticks) = match opcode {
            0x10 => {
                let extended_op = self.io.immediate_byte();
                (
                    trace::page2_name(extended_op),
                    self.execute_page2(extended_op, start_pc)?,
                )
            }
            0x11 => {
                let extended_op = self.io.immediate_byte();
                (
                    trace::page3_name(extended_op),
                    self.execute_page3(extended_op, start_pc)?,
                )
            }
            _ => (
                trace::opcode_name(opcode),
                self.execute_primary(opcode, start_pc)?,
            ),
        };

        self.io.timer_tick(ticks);
        self.service_interrupts();

        if self.trace {
            let r = &self.io.regs;
            log::trace!(
                "{:04X}  {:02X}  {:<10} a={:02X} b={:02X} dp={:02X} x={:04X} y={:04X} u={:04X} s={:04X} cc={:02X}",
                start_pc, opcode, name, r.a, r.b, r.dp, r.x, r.y, r.u, r.s, r.cc
            );
        }

        Ok(ticks)
    }

    fn execute_primary(&mut self, opcode: u8, start_pc: u16) -> Result<u32> {
        let ticks: u32 = match opcode {
            // Direct-page read-modify-write
            0x00 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::negate);
                6
            }
            0x03 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::complement);
                6
            }
            0x04 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::logical_shift_right);
                6
            }
            0x06 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::rotate_right);
                6
            }
            0x07 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::arithmetic_shift_right);
                6
            }
            0x08 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::arithmetic_shift_left);
                6
            }
            0x09 => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::rotate_left);
                6
            }
            0x0A => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::decrement);
                6
            }
            0x0C => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::increment);
                6
            }
            0x0D => {
                let m = self.io.direct();
                self.modify_byte(m.address, Self::test_byte);
                6
            }
            0x0E => {
                let m = self.io.direct();
                self.jump(m.address);
                3
            }
            0x0F => {
                let m = self.io.direct();
                self.modify_byte(m.address, |cpu, _| cpu.clear());
                6
            }

            // Inherent / immediate miscellany
            0x12 => 2, // NOP
            0x13 => 0, // SYNC: the idle state is the host's affair
            0x16 => {
                let offset = self.io.immediate_word();
                self.branch_long(offset);
                5
            }
            0x17 => {
                let offset = self.io.immediate_word();
                let pc = self.io.regs.pc;
                self.io.push_stack_word(Register::S, pc);
                self.branch_long(offset);
                9
            }
            0x19 => {
                self.decimal_addition_adjust();
                2
            }
            0x1A => {
                let value = self.io.immediate_byte();
                self.io.regs.cc |= value;
                3
            }
            0x1C => {
                let value = self.io.immediate_byte();
                self.io.regs.cc &= value;
                3
            }
            0x1D => {
                self.io.regs.a = if self.io.regs.b & 0x80 != 0 { 0xFF } else { 0x00 };
                2
            }
            0x1E => {
                let post_byte = self.io.immediate_byte();
                self.exchange_registers(post_byte);
                8
            }
            0x1F => {
                let post_byte = self.io.immediate_byte();
                self.transfer_registers(post_byte)?;
                6
            }

            // Short branches
            0x20 => {
                self.short_branch_if(true);
                3
            }
            0x21 => {
                self.short_branch_if(false);
                3
            }
            0x22 => {
                let cond = !self.io.regs.carry_set() && !self.io.regs.zero_set();
                self.short_branch_if(cond);
                3
            }
            0x23 => {
                let cond = self.io.regs.carry_set() || self.io.regs.zero_set();
                self.short_branch_if(cond);
                5
            }
            0x24 => {
                let cond = !self.io.regs.carry_set();
                self.short_branch_if(cond);
                3
            }
            0x25 => {
                let cond = self.io.regs.carry_set();
                self.short_branch_if(cond);
                3
            }
            0x26 => {
                let cond = !self.io.regs.zero_set();
                self.short_branch_if(cond);
                3
            }
            0x27 => {
                let cond = self.io.regs.zero_set();
                self.short_branch_if(cond);
                3
            }
            0x28 => {
                let cond = !self.io.regs.overflow_set();
                self.short_branch_if(cond);
                3
            }
            0x29 => {
                let cond = self.io.regs.overflow_set();
                self.short_branch_if(cond);
                3
            }
            0x2A => {
                let cond = !self.io.regs.negative_set();
                self.short_branch_if(cond);
                3
            }
            0x2B => {
                let cond = self.io.regs.negative_set();
                self.short_branch_if(cond);
                3
            }
            0x2C => {
                let cond = self.io.regs.negative_set() == self.io.regs.overflow_set();
                self.short_branch_if(cond);
                3
            }
            0x2D => {
                let cond = self.io.regs.negative_set() != self.io.regs.overflow_set();
                self.short_branch_if(cond);
                5
            }
            0x2E => {
                let cond = !self.io.regs.zero_set()
                    && self.io.regs.negative_set() == self.io.regs.overflow_set();
                self.short_branch_if(cond);
                3
            }
            0x2F => {
                let cond = self.io.regs.zero_set()
                    || self.io.regs.negative_set() != self.io.regs.overflow_set();
                self.short_branch_if(cond);
                3
            }

            // Load effective address
            0x30 => {
                let m = self.io.indexed()?;
                self.load_effective_address(Register::X, m.address);
                2 + m.bytes_consumed
            }
            0x31 => {
                let m = self.io.indexed()?;
                self.load_effective_address(Register::Y, m.address);
                2 + m.bytes_consumed
            }
            0x32 => {
                let m = self.io.indexed()?;
                self.load_effective_address(Register::S, m.address);
                2 + m.bytes_consumed
            }
            0x33 => {
                let m = self.io.indexed()?;
                self.load_effective_address(Register::U, m.address);
                2 + m.bytes_consumed
            }

            // Stack pushes and pulls
            0x34 => {
                let post_byte = self.io.immediate_byte();
                5 + self.push_registers(Register::S, post_byte)
            }
            0x35 => {
                let post_byte = self.io.immediate_byte();
                5 + self.pull_registers(Register::S, post_byte)
            }
            0x36 => {
                let post_byte = self.io.immediate_byte();
                5 + self.push_registers(Register::U, post_byte)
            }
            0x37 => {
                let post_byte = self.io.immediate_byte();
                5 + self.pull_registers(Register::U, post_byte)
            }

            // Subroutine / interrupt returns
            0x39 => {
                self.io.regs.pc = self.io.pop_stack_word(Register::S);
                5
            }
            0x3A => {
                self.io.regs.x = self.io.regs.x.wrapping_add(self.io.regs.b as u16);
                3
            }
            0x3B => {
                self.io.regs.cc = self.io.pop_stack(Register::S);
                let mut ticks = 6;
                if self.io.regs.entire_set() {
                    ticks += 9;
                    self.io.regs.a = self.io.pop_stack(Register::S);
                    self.io.regs.b = self.io.pop_stack(Register::S);
                    self.io.regs.dp = self.io.pop_stack(Register::S);
                    self.io.regs.x = self.io.pop_stack_word(Register::S);
                    self.io.regs.y = self.io.pop_stack_word(Register::S);
                    self.io.regs.u = self.io.pop_stack_word(Register::S);
                }
                self.io.regs.pc = self.io.pop_stack_word(Register::S);
                ticks
            }
            0x3C => {
                let mask = self.io.immediate_byte();
                self.io.regs.cc &= mask;
                self.io.regs.cc_set(CcFlag::E as u8);
                self.push_machine_state();
                20
            }
            0x3D => {
                self.multiply();
                11
            }
            0x3F => {
                self.software_interrupt(0xFFFA, true);
                19
            }

            // Inherent unary on A
            0x40 => {
                self.io.regs.a = self.negate(self.io.regs.a);
                2
            }
            0x43 => {
                self.io.regs.a = self.complement(self.io.regs.a);
                2
            }
            0x44 => {
                self.io.regs.a = self.logical_shift_right(self.io.regs.a);
                2
            }
            0x46 => {
                self.io.regs.a = self.rotate_right(self.io.regs.a);
                2
            }
            0x47 => {
                self.io.regs.a = self.arithmetic_shift_right(self.io.regs.a);
                2
            }
            0x48 => {
                self.io.regs.a = self.arithmetic_shift_left(self.io.regs.a);
                2
            }
            0x49 => {
                self.io.regs.a = self.rotate_left(self.io.regs.a);
                2
            }
            0x4A => {
                self.io.regs.a = self.decrement(self.io.regs.a);
                2
            }
            0x4C => {
                self.io.regs.a = self.increment(self.io.regs.a);
                2
            }
            0x4D => {
                self.io.regs.a = self.test_byte(self.io.regs.a);
                2
            }
            0x4F => {
                self.io.regs.a = self.clear();
                2
            }

            // Inherent unary on B
            0x50 => {
                self.io.regs.b = self.negate(self.io.regs.b);
                2
            }
            0x53 => {
                self.io.regs.b = self.complement(self.io.regs.b);
                2
            }
            0x54 => {
                self.io.regs.b = self.logical_shift_right(self.io.regs.b);
                2
            }
            0x56 => {
                self.io.regs.b = self.rotate_right(self.io.regs.b);
                2
            }
            0x57 => {
                self.io.regs.b = self.arithmetic_shift_right(self.io.regs.b);
                2
            }
            0x58 => {
                self.io.regs.b = self.arithmetic_shift_left(self.io.regs.b);
                2
            }
            0x59 => {
                self.io.regs.b = self.rotate_left(self.io.regs.b);
                2
            }
            0x5A => {
                self.io.regs.b = self.decrement(self.io.regs.b);
                2
            }
            0x5C => {
                self.io.regs.b = self.increment(self.io.regs.b);
                2
            }
            0x5D => {
                self.io.regs.b = self.test_byte(self.io.regs.b);
                2
            }
            0x5F => {
                self.io.regs.b = self.clear();
                2
            }

            // Indexed read-modify-write
            0x60 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::negate);
                4 + m.bytes_consumed
            }
            0x63 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::complement);
                4 + m.bytes_consumed
            }
            0x64 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::logical_shift_right);
                4 + m.bytes_consumed
            }
            0x66 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::rotate_right);
                4 + m.bytes_consumed
            }
            0x67 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::arithmetic_shift_right);
                4 + m.bytes_consumed
            }
            0x68 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::arithmetic_shift_left);
                4 + m.bytes_consumed
            }
            0x69 => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::rotate_left);
                4 + m.bytes_consumed
            }
            0x6A => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::decrement);
                4 + m.bytes_consumed
            }
            0x6C => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::increment);
                4 + m.bytes_consumed
            }
            0x6D => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, Self::test_byte);
                4 + m.bytes_consumed
            }
            0x6E => {
                let m = self.io.indexed()?;
                self.jump(m.address);
                1 + m.bytes_consumed
            }
            0x6F => {
                let m = self.io.indexed()?;
                self.modify_byte(m.address, |cpu, _| cpu.clear());
                4 + m.bytes_consumed
            }

            // Extended read-modify-write
            0x70 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::negate);
                7
            }
            0x73 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::complement);
                7
            }
            0x74 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::logical_shift_right);
                7
            }
            0x76 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::rotate_right);
                7
            }
            0x77 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::arithmetic_shift_right);
                7
            }
            0x78 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::arithmetic_shift_left);
                7
            }
            0x79 => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::rotate_left);
                7
            }
            0x7A => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::decrement);
                7
            }
            0x7C => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::increment);
                7
            }
            0x7D => {
                let m = self.io.extended();
                self.modify_byte(m.address, Self::test_byte);
                7
            }
            0x7E => {
                let m = self.io.extended();
                self.jump(m.address);
                4
            }
            0x7F => {
                let m = self.io.extended();
                self.modify_byte(m.address, |cpu, _| cpu.clear());
                7
            }

            // A-accumulator column, immediate
            0x80 => {
                let value = self.io.immediate_byte();
                self.subtract_byte(Register::A, value);
                2
            }
            0x81 => {
                let value = self.io.immediate_byte();
                self.compare_byte(self.io.regs.a, value);
                2
            }
            0x82 => {
                let value = self.io.immediate_byte();
                self.subtract_with_carry(Register::A, value);
                2
            }
            0x83 => {
                let value = self.io.immediate_word();
                self.subtract_d(value);
                4
            }
            0x84 => {
                let value = self.io.immediate_byte();
                self.logical_and(Register::A, value);
                2
            }
            0x85 => {
                let value = self.io.immediate_byte();
                self.test_byte(self.io.regs.a & value);
                2
            }
            0x86 => {
                let value = self.io.immediate_byte();
                self.load_byte_register(Register::A, value);
                4
            }
            0x88 => {
                let value = self.io.immediate_byte();
                self.exclusive_or(Register::A, value);
                2
            }
            0x89 => {
                let value = self.io.immediate_byte();
                self.add_with_carry(Register::A, value);
                2
            }
            0x8A => {
                let value = self.io.immediate_byte();
                self.logical_or(Register::A, value);
                2
            }
            0x8B => {
                let value = self.io.immediate_byte();
                self.add_byte(Register::A, value);
                2
            }
            0x8C => {
                let value = self.io.immediate_word();
                self.compare_word(self.io.regs.x, value);
                4
            }
            0x8D => {
                let offset = self.io.immediate_byte();
                let pc = self.io.regs.pc;
                self.io.push_stack_word(Register::S, pc);
                self.branch_short(offset);
                7
            }
            0x8E => {
                let value = self.io.immediate_word();
                self.load_word_register(Register::X, value);
                3
            }

            // A-accumulator column, direct
            0x90 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.subtract_byte(Register::A, value);
                4
            }
            0x91 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.compare_byte(self.io.regs.a, value);
                4
            }
            0x92 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.subtract_with_carry(Register::A, value);
                4
            }
            0x93 => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.subtract_d(value);
                6
            }
            0x94 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.logical_and(Register::A, value);
                4
            }
            0x95 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.test_byte(self.io.regs.a & value);
                4
            }
            0x96 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.load_byte_register(Register::A, value);
                2
            }
            0x97 => {
                let m = self.io.direct();
                self.store_byte_register(Register::A, m.address);
                4
            }
            0x98 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.exclusive_or(Register::A, value);
                4
            }
            0x99 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.add_with_carry(Register::A, value);
                4
            }
            0x9A => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.logical_or(Register::A, value);
                4
            }
            0x9B => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.add_byte(Register::A, value);
                4
            }
            0x9C => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.x, value);
                6
            }
            0x9D => {
                let m = self.io.direct();
                self.jump_to_subroutine(m.address);
                7
            }
            0x9E => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::X, value);
                5
            }
            0x9F => {
                let m = self.io.direct();
                self.store_word_register(Register::X, m.address);
                5
            }

            // A-accumulator column, indexed
            0xA0 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.subtract_byte(Register::A, value);
                2 + m.bytes_consumed
            }
            0xA1 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.compare_byte(self.io.regs.a, value);
                4
            }
            0xA2 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.subtract_with_carry(Register::A, value);
                2 + m.bytes_consumed
            }
            0xA3 => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.subtract_d(value);
                4 + m.bytes_consumed
            }
            0xA4 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.logical_and(Register::A, value);
                2 + m.bytes_consumed
            }
            0xA5 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.test_byte(self.io.regs.a & value);
                2 + m.bytes_consumed
            }
            0xA6 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.load_byte_register(Register::A, value);
                2 + m.bytes_consumed
            }
            0xA7 => {
                let m = self.io.indexed()?;
                self.store_byte_register(Register::A, m.address);
                2 + m.bytes_consumed
            }
            0xA8 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.exclusive_or(Register::A, value);
                2 + m.bytes_consumed
            }
            0xA9 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.add_with_carry(Register::A, value);
                2 + m.bytes_consumed
            }
            0xAA => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.logical_or(Register::A, value);
                2 + m.bytes_consumed
            }
            0xAB => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.add_byte(Register::A, value);
                2 + m.bytes_consumed
            }
            0xAC => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.x, value);
                4 + m.bytes_consumed
            }
            0xAD => {
                let m = self.io.indexed()?;
                self.jump_to_subroutine(m.address);
                5 + m.bytes_consumed
            }
            0xAE => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::X, value);
                3 + m.bytes_consumed
            }
            0xAF => {
                let m = self.io.indexed()?;
                self.store_word_register(Register::X, m.address);
                3 + m.bytes_consumed
            }

            // A-accumulator column, extended
            0xB0 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.subtract_byte(Register::A, value);
                4
            }
            0xB1 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.compare_byte(self.io.regs.a, value);
                5
            }
            0xB2 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.subtract_with_carry(Register::A, value);
                5
            }
            0xB3 => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.subtract_d(value);
                7
            }
            0xB4 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.logical_and(Register::A, value);
                5
            }
            0xB5 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.test_byte(self.io.regs.a & value);
                5
            }
            0xB6 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.load_byte_register(Register::A, value);
                5
            }
            0xB7 => {
                let m = self.io.extended();
                self.store_byte_register(Register::A, m.address);
                5
            }
            0xB8 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.exclusive_or(Register::A, value);
                5
            }
            0xB9 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.add_with_carry(Register::A, value);
                5
            }
            0xBA => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.logical_or(Register::A, value);
                5
            }
            0xBB => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.add_byte(Register::A, value);
                5
            }
            0xBC => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.x, value);
                7
            }
            0xBD => {
                let m = self.io.extended();
                self.jump_to_subroutine(m.address);
                8
            }
            0xBE => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::X, value);
                6
            }
            0xBF => {
                let m = self.io.extended();
                self.store_word_register(Register::X, m.address);
                6
            }

            // B-accumulator column, immediate
            0xC0 => {
                let value = self.io.immediate_byte();
                self.subtract_byte(Register::B, value);
                2
            }
            0xC1 => {
                let value = self.io.immediate_byte();
                self.compare_byte(self.io.regs.b, value);
                2
            }
            0xC2 => {
                let value = self.io.immediate_byte();
                self.subtract_with_carry(Register::B, value);
                2
            }
            0xC3 => {
                let value = self.io.immediate_word();
                self.add_d(value);
                4
            }
            0xC4 => {
                let value = self.io.immediate_byte();
                self.logical_and(Register::B, value);
                2
            }
            0xC5 => {
                let value = self.io.immediate_byte();
                self.test_byte(self.io.regs.b & value);
                2
            }
            0xC6 => {
                let value = self.io.immediate_byte();
                self.load_byte_register(Register::B, value);
                4
            }
            0xC8 => {
                let value = self.io.immediate_byte();
                self.exclusive_or(Register::B, value);
                2
            }
            0xC9 => {
                let value = self.io.immediate_byte();
                self.add_with_carry(Register::B, value);
                2
            }
            0xCA => {
                let value = self.io.immediate_byte();
                self.logical_or(Register::B, value);
                2
            }
            0xCB => {
                let value = self.io.immediate_byte();
                self.add_byte(Register::B, value);
                2
            }
            0xCC => {
                let value = self.io.immediate_word();
                self.load_word_register(Register::D, value);
                3
            }
            0xCE => {
                let value = self.io.immediate_word();
                self.load_word_register(Register::U, value);
                3
            }

            // B-accumulator column, direct
            0xD0 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.subtract_byte(Register::B, value);
                4
            }
            0xD1 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.compare_byte(self.io.regs.b, value);
                4
            }
            0xD2 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.subtract_with_carry(Register::B, value);
                4
            }
            0xD3 => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.add_d(value);
                6
            }
            0xD4 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.logical_and(Register::B, value);
                4
            }
            0xD5 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.test_byte(self.io.regs.b & value);
                4
            }
            0xD6 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.load_byte_register(Register::B, value);
                2
            }
            0xD7 => {
                let m = self.io.direct();
                self.store_byte_register(Register::B, m.address);
                2
            }
            0xD8 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.exclusive_or(Register::B, value);
                4
            }
            0xD9 => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.add_with_carry(Register::B, value);
                4
            }
            0xDA => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.logical_or(Register::B, value);
                4
            }
            0xDB => {
                let m = self.io.direct();
                let value = self.io.read_byte(m.address);
                self.add_byte(Register::B, value);
                4
            }
            0xDC => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::D, value);
                5
            }
            0xDD => {
                let m = self.io.direct();
                self.store_word_register(Register::D, m.address);
                5
            }
            0xDE => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::U, value);
                5
            }
            0xDF => {
                let m = self.io.direct();
                self.store_word_register(Register::U, m.address);
                5
            }

            // B-accumulator column, indexed
            0xE0 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.subtract_byte(Register::B, value);
                2 + m.bytes_consumed
            }
            0xE1 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.compare_byte(self.io.regs.b, value);
                4
            }
            0xE2 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.subtract_with_carry(Register::B, value);
                2 + m.bytes_consumed
            }
            0xE3 => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.add_d(value);
                6 + m.bytes_consumed
            }
            0xE4 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.logical_and(Register::B, value);
                2 + m.bytes_consumed
            }
            0xE5 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.test_byte(self.io.regs.b & value);
                2 + m.bytes_consumed
            }
            0xE6 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.load_byte_register(Register::B, value);
                2 + m.bytes_consumed
            }
            0xE7 => {
                let m = self.io.indexed()?;
                self.store_byte_register(Register::B, m.address);
                2 + m.bytes_consumed
            }
            0xE8 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.exclusive_or(Register::B, value);
                2 + m.bytes_consumed
            }
            0xE9 => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.add_with_carry(Register::B, value);
                2 + m.bytes_consumed
            }
            0xEA => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.logical_or(Register::B, value);
                2 + m.bytes_consumed
            }
            0xEB => {
                let m = self.io.indexed()?;
                let value = self.io.read_byte(m.address);
                self.add_byte(Register::B, value);
                2 + m.bytes_consumed
            }
            0xEC => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::D, value);
                3 + m.bytes_consumed
            }
            0xED => {
                let m = self.io.indexed()?;
                self.store_word_register(Register::D, m.address);
                3 + m.bytes_consumed
            }
            0xEE => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::U, value);
                3 + m.bytes_consumed
            }
            0xEF => {
                let m = self.io.indexed()?;
                self.store_word_register(Register::U, m.address);
                3 + m.bytes_consumed
            }

            // B-accumulator column, extended
            0xF0 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.subtract_byte(Register::B, value);
                4
            }
            0xF1 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.compare_byte(self.io.regs.b, value);
                5
            }
            0xF2 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.subtract_with_carry(Register::B, value);
                5
            }
            0xF3 => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.add_d(value);
                7
            }
            0xF4 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.logical_and(Register::B, value);
                5
            }
            0xF5 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.test_byte(self.io.regs.b & value);
                5
            }
            0xF6 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.load_byte_register(Register::B, value);
                5
            }
            0xF7 => {
                let m = self.io.extended();
                self.store_byte_register(Register::B, m.address);
                5
            }
            0xF8 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.exclusive_or(Register::B, value);
                5
            }
            0xF9 => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.add_with_carry(Register::B, value);
                5
            }
            0xFA => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.logical_or(Register::B, value);
                5
            }
            0xFB => {
                let m = self.io.extended();
                let value = self.io.read_byte(m.address);
                self.add_byte(Register::B, value);
                5
            }
            0xFC => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::D, value);
                6
            }
            0xFD => {
                let m = self.io.extended();
                self.store_word_register(Register::D, m.address);
                6
            }
            0xFE => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::U, value);
                6
            }
            0xFF => {
                let m = self.io.extended();
                self.store_word_register(Register::U, m.address);
                6
            }

            _ => {
                return Err(EmuError::UnknownOpcode {
                    opcode: opcode as u16,
                    pc: start_pc,
                })
            }
        };

        Ok(ticks)
    }

    fn execute_page2(&mut self, opcode: u8, start_pc: u16) -> Result<u32> {
        let ticks: u32 = match opcode {
            // Long branches
            0x21 => {
                self.io.immediate_word();
                5
            }
            0x22 => {
                let cond = !self.io.regs.carry_set() && !self.io.regs.zero_set();
                self.long_branch_if(cond)
            }
            0x23 => {
                let cond = self.io.regs.carry_set() || self.io.regs.zero_set();
                self.long_branch_if(cond)
            }
            0x24 => {
                let cond = !self.io.regs.carry_set();
                self.long_branch_if(cond)
            }
            0x25 => {
                let cond = self.io.regs.carry_set();
                self.long_branch_if(cond)
            }
            0x26 => {
                let cond = !self.io.regs.zero_set();
                self.long_branch_if(cond)
            }
            0x27 => {
                let cond = self.io.regs.zero_set();
                self.long_branch_if(cond)
            }
            0x28 => {
                let cond = !self.io.regs.overflow_set();
                self.long_branch_if(cond)
            }
            0x29 => {
                let cond = self.io.regs.overflow_set();
                self.long_branch_if(cond)
            }
            0x2A => {
                let cond = !self.io.regs.negative_set();
                self.long_branch_if(cond)
            }
            0x2B => {
                let cond = self.io.regs.negative_set();
                self.long_branch_if(cond)
            }
            0x2C => {
                let cond = self.io.regs.negative_set() == self.io.regs.overflow_set();
                self.long_branch_if(cond)
            }
            0x2D => {
                let cond = self.io.regs.negative_set() != self.io.regs.overflow_set();
                self.long_branch_if(cond)
            }
            0x2E => {
                let cond = !self.io.regs.zero_set()
                    && self.io.regs.negative_set() == self.io.regs.overflow_set();
                self.long_branch_if(cond)
            }
            0x2F => {
                let cond = self.io.regs.zero_set()
                    || self.io.regs.negative_set() != self.io.regs.overflow_set();
                self.long_branch_if(cond)
            }

            0x3F => {
                self.software_interrupt(0xFFF4, false);
                20
            }

            // CMPD
            0x83 => {
                let value = self.io.immediate_word();
                self.compare_word(self.io.regs.d(), value);
                5
            }
            0x93 => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.d(), value);
                7
            }
            0xA3 => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.d(), value);
                5 + m.bytes_consumed
            }
            0xB3 => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.d(), value);
                8
            }

            // CMPY
            0x8C => {
                let value = self.io.immediate_word();
                self.compare_word(self.io.regs.y, value);
                5
            }
            0x9C => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.y, value);
                7
            }
            0xAC => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.y, value);
                5 + m.bytes_consumed
            }
            0xBC => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.y, value);
                8
            }

            // LDY / STY
            0x8E => {
                let value = self.io.immediate_word();
                self.load_word_register(Register::Y, value);
                4
            }
            0x9E => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::Y, value);
                6
            }
            0x9F => {
                let m = self.io.direct();
                self.store_word_register(Register::Y, m.address);
                6
            }
            0xAE => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::Y, value);
                4 + m.bytes_consumed
            }
            0xAF => {
                let m = self.io.indexed()?;
                self.store_word_register(Register::Y, m.address);
                4 + m.bytes_consumed
            }
            0xBE => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::Y, value);
                7
            }
            0xBF => {
                let m = self.io.extended();
                self.store_word_register(Register::Y, m.address);
                7
            }

            // LDS / STS
            0xCE => {
                let value = self.io.immediate_word();
                self.load_word_register(Register::S, value);
                4
            }
            0xDE => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::S, value);
                6
            }
            0xDF => {
                let m = self.io.direct();
                self.store_word_register(Register::S, m.address);
                6
            }
            0xEE => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::S, value);
                4 + m.bytes_consumed
            }
            0xEF => {
                let m = self.io.indexed()?;
                self.store_word_register(Register::S, m.address);
                4 + m.bytes_consumed
            }
            0xFE => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.load_word_register(Register::S, value);
                7
            }
            0xFF => {
                let m = self.io.extended();
                self.store_word_register(Register::S, m.address);
                7
            }

            _ => {
                return Err(EmuError::UnknownOpcode {
                    opcode: 0x1000 | opcode as u16,
                    pc: start_pc,
                })
            }
        };

        Ok(ticks)
    }

    fn execute_page3(&mut self, opcode: u8, start_pc: u16) -> Result<u32> {
        let ticks: u32 = match opcode {
            0x3F => {
                self.software_interrupt(0xFFF2, false);
                20
            }

            // CMPU
            0x83 => {
                let value = self.io.immediate_word();
                self.compare_word(self.io.regs.u, value);
                5
            }
            0x93 => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.u, value);
                7
            }
            0xA3 => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.u, value);
                5 + m.bytes_consumed
            }
            0xB3 => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.u, value);
                8
            }

            // CMPS
            0x8C => {
                let value = self.io.immediate_word();
                self.compare_word(self.io.regs.s, value);
                5
            }
            0x9C => {
                let m = self.io.direct();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.s, value);
                7
            }
            0xAC => {
                let m = self.io.indexed()?;
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.s, value);
                5 + m.bytes_consumed
            }
            0xBC => {
                let m = self.io.extended();
                let value = self.io.read_word(m.address);
                self.compare_word(self.io.regs.s, value);
                8
            }

            _ => {
                return Err(EmuError::UnknownOpcode {
                    opcode: 0x1100 | opcode as u16,
                    pc: start_pc,
                })
            }
        };

        Ok(ticks)
    }

    /// Delivers at most one pending interrupt, highest priority first.
    /// Masked requests stay latched until the mask clears.
    fn service_interrupts(&mut self) {
        if self.fire_nmi {
            self.fire_nmi = false;
            self.non_maskable_interrupt_request();
        } else if self.fire_firq && !self.io.regs.fast_interrupt_set() {
            self.fire_firq = false;
            self.fast_interrupt_request();
        } else if self.fire_irq && !self.io.regs.interrupt_set() {
            self.fire_irq = false;
            self.interrupt_request();
        }
    }
}
