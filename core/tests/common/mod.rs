use chroma_core::io::IoController;
use chroma_core::keyboard::MatrixKeyboard;
use chroma_core::memory::Memory;
use chroma_core::registers::RegisterSet;
use chroma_core::Cpu;

/// CPU over a fresh fabric: all-RAM, MMU off, every register zero.
#[allow(dead_code)]
pub fn new_cpu() -> Cpu {
    let io = IoController::new(
        Memory::new(),
        RegisterSet::new(),
        Box::new(MatrixKeyboard::new()),
    );
    Cpu::new(io)
}

/// CPU with a byte program installed and PC pointing at it.
#[allow(dead_code)]
pub fn cpu_with_program(origin: u16, program: &[u8]) -> Cpu {
    let mut cpu = new_cpu();
    cpu.io.memory.load(origin, program);
    cpu.io.regs.pc = origin;
    cpu
}
