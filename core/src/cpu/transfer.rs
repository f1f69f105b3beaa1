//! TFR and EXG post-byte handling.
//!
//! Register codes: 0=D 1=X 2=Y 3=U 4=S 5=PC 8=A 9=B A=CC B=DP. Byte
//! registers travel in the low half of the 16-bit transfer value.

use super::Cpu;
use crate::registers::Register;
use crate::{EmuError, Result};

fn code_register(code: u8) -> Option<Register> {
    match code {
        0x00 => Some(Register::D),
        0x01 => Some(Register::X),
        0x02 => Some(Register::Y),
        0x03 => Some(Register::U),
        0x04 => Some(Register::S),
        0x05 => Some(Register::PC),
        0x08 => Some(Register::A),
        0x09 => Some(Register::B),
        0x0A => Some(Register::CC),
        0x0B => Some(Register::DP),
        _ => None,
    }
}

fn is_word_code(code: u8) -> bool {
    code < 0x08
}

impl Cpu {
    fn transfer_value(&self, code: u8, register: Register) -> u16 {
        if is_word_code(code) {
            self.io.get_word_register(register)
        } else {
            self.io.get_byte_register(register) as u16
        }
    }

    fn set_transfer_value(&mut self, code: u8, register: Register, value: u16) {
        if is_word_code(code) {
            self.io.set_word_register(register, value);
        } else {
            self.io.set_byte_register(register, value as u8);
        }
    }

    /// TFR: source in the high nibble, destination in the low. Width
    /// mismatches and undefined codes fault; same-to-same is a no-op.
    pub(crate) fn transfer_registers(&mut self, post_byte: u8) -> Result<()> {
        let src_code = post_byte >> 4;
        let dst_code = post_byte & 0x0F;

        let (src, dst) = match (code_register(src_code), code_register(dst_code)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Err(EmuError::IllegalTransfer { post_byte }),
        };
        if is_word_code(src_code) != is_word_code(dst_code) {
            return Err(EmuError::IllegalTransfer { post_byte });
        }
        if src == dst {
            return Ok(());
        }

        let value = self.transfer_value(src_code, src);
        self.set_transfer_value(dst_code, dst, value);
        Ok(())
    }

    /// EXG: swaps the named pair. Width mismatches and undefined codes
    /// are silently ignored, as are same-to-same pairs.
    pub(crate) fn exchange_registers(&mut self, post_byte: u8) {
        let first_code = post_byte >> 4;
        let second_code = post_byte & 0x0F;

        let (first, second) = match (code_register(first_code), code_register(second_code)) {
            (Some(first), Some(second)) => (first, second),
            _ => return,
        };
        if is_word_code(first_code) != is_word_code(second_code) || first == second {
            return;
        }

        let first_value = self.transfer_value(first_code, first);
        let second_value = self.transfer_value(second_code, second);
        self.set_transfer_value(first_code, first, second_value);
        self.set_transfer_value(second_code, second, first_value);
    }
}
