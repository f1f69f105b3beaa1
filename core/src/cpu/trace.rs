//! Mnemonic and addressing-mode names for the trace output.

pub(crate) fn opcode_name(opcode: u8) -> &'static str {
    match opcode {
        0x00 => "NEG DIR",
        0x03 => "COM DIR",
        0x04 => "LSR DIR",
        0x06 => "ROR DIR",
        0x07 => "ASR DIR",
        0x08 => "ASL DIR",
        0x09 => "ROL DIR",
        0x0A => "DEC DIR",
        0x0C => "INC DIR",
        0x0D => "TST DIR",
        0x0E => "JMP DIR",
        0x0F => "CLR DIR",
        0x12 => "NOP",
        0x13 => "SYNC",
        0x16 => "LBRA REL",
        0x17 => "LBSR REL",
        0x19 => "DAA",
        0x1A => "ORCC IMM",
        0x1C => "ANDCC IMM",
        0x1D => "SEX",
        0x1E => "EXG",
        0x1F => "TFR",
        0x20 => "BRA REL",
        0x21 => "BRN REL",
        0x22 => "BHI REL",
        0x23 => "BLS REL",
        0x24 => "BCC REL",
        0x25 => "BCS REL",
        0x26 => "BNE REL",
        0x27 => "BEQ REL",
        0x28 => "BVC REL",
        0x29 => "BVS REL",
        0x2A => "BPL REL",
        0x2B => "BMI REL",
        0x2C => "BGE REL",
        0x2D => "BLT REL",
        0x2E => "BGT REL",
        0x2F => "BLE REL",
        0x30 => "LEAX IND",
        0x31 => "LEAY IND",
        0x32 => "LEAS IND",
        0x33 => "LEAU IND",
        0x34 => "PSHS",
        0x35 => "PULS",
        0x36 => "PSHU",
        0x37 => "PULU",
        0x39 => "RTS",
        0x3A => "ABX",
        0x3B => "RTI",
        0x3C => "CWAI",
        0x3D => "MUL",
        0x3F => "SWI",
        0x40 => "NEGA",
        0x43 => "COMA",
        0x44 => "LSRA",
        0x46 => "RORA",
        0x47 => "ASRA",
        0x48 => "ASLA",
        0x49 => "ROLA",
        0x4A => "DECA",
        0x4C => "INCA",
        0x4D => "TSTA",
        0x4F => "CLRA",
        0x50 => "NEGB",
        0x53 => "COMB",
        0x54 => "LSRB",
        0x56 => "RORB",
        0x57 => "ASRB",
        0x58 => "ASLB",
        0x59 => "ROLB",
        0x5A => "DECB",
        0x5C => "INCB",
        0x5D => "TSTB",
        0x5F => "CLRB",
        0x60 => "NEG IND",
        0x63 => "COM IND",
        0x64 => "LSR IND",
        0x66 => "ROR IND",
        0x67 => "ASR IND",
        0x68 => "ASL IND",
        0x69 => "ROL IND",
        0x6A => "DEC IND",
        0x6C => "INC IND",
        0x6D => "TST IND",
        0x6E => "JMP IND",
        0x6F => "CLR IND",
        0x70 => "NEG EXT",
        0x73 => "COM EXT",
        0x74 => "LSR EXT",
        0x76 => "ROR EXT",
        0x77 => "ASR EXT",
        0x78 => "ASL EXT",
        0x79 => "ROL EXT",
        0x7A => "DEC EXT",
        0x7C => "INC EXT",
        0x7D => "TST EXT",
        0x7E => "JMP EXT",
        0x7F => "CLR EXT",
        0x80 => "SUBA IMM",
        0x81 => "CMPA IMM",
        0x82 => "SBCA IMM",
        0x83 => "SUBD IMM",
        0x84 => "ANDA IMM",
        0x85 => "BITA IMM",
        0x86 => "LDA IMM",
        0x88 => "EORA IMM",
        0x89 => "ADCA IMM",
        0x8A => "ORA IMM",
        0x8B => "ADDA IMM",
        0x8C => "CMPX IMM",
        0x8D => "BSR REL",
        0x8E => "LDX IMM",
        0x90 => "SUBA DIR",
        0x91 => "CMPA DIR",
        0x92 => "SBCA DIR",
        0x93 => "SUBD DIR",
        0x94 => "ANDA DIR",
        0x95 => "BITA DIR",
        0x96 => "LDA DIR",
        0x97 => "STA DIR",
        0x98 => "EORA DIR",
        0x99 => "ADCA DIR",
        0x9A => "ORA DIR",
        0x9B => "ADDA DIR",
        0x9C => "CMPX DIR",
        0x9D => "JSR DIR",
        0x9E => "LDX DIR",
        0x9F => "STX DIR",
        0xA0 => "SUBA IND",
        0xA1 => "CMPA IND",
        0xA2 => "SBCA IND",
        0xA3 => "SUBD IND",
        0xA4 => "ANDA IND",
        0xA5 => "BITA IND",
        0xA6 => "LDA IND",
        0xA7 => "STA IND",
        0xA8 => "EORA IND",
        0xA9 => "ADCA IND",
        0xAA => "ORA IND",
        0xAB => "ADDA IND",
        0xAC => "CMPX IND",
        0xAD => "JSR IND",
        0xAE => "LDX IND",
        0xAF => "STX IND",
        0xB0 => "SUBA EXT",
        0xB1 => "CMPA EXT",
        0xB2 => "SBCA EXT",
        0xB3 => "SUBD EXT",
        0xB4 => "ANDA EXT",
        0xB5 => "BITA EXT",
        0xB6 => "LDA EXT",
        0xB7 => "STA EXT",
        0xB8 => "EORA EXT",
        0xB9 => "ADCA EXT",
        0xBA => "ORA EXT",
        0xBB => "ADDA EXT",
        0xBC => "CMPX EXT",
        0xBD => "JSR EXT",
        0xBE => "LDX EXT",
        0xBF => "STX EXT",
        0xC0 => "SUBB IMM",
        0xC1 => "CMPB IMM",
        0xC2 => "SBCB IMM",
        0xC3 => "ADDD IMM",
        0xC4 => "ANDB IMM",
        0xC5 => "BITB IMM",
        0xC6 => "LDB IMM",
        0xC8 => "EORB IMM",
        0xC9 => "ADCB IMM",
        0xCA => "ORB IMM",
        0xCB => "ADDB IMM",
        0xCC => "LDD IMM",
        0xCE => "LDU IMM",
        0xD0 => "SUBB DIR",
        0xD1 => "CMPB DIR",
        0xD2 => "SBCB DIR",
        0xD3 => "ADDD DIR",
        0xD4 => "ANDB DIR",
        0xD5 => "BITB DIR",
        0xD6 => "LDB DIR",
        0xD7 => "STB DIR",
        0xD8 => "EORB DIR",
        0xD9 => "ADCB DIR",
        0xDA => "ORB DIR",
        0xDB => "ADDB DIR",
        0xDC => "LDD DIR",
        0xDD => "STD DIR",
        0xDE => "LDU DIR",
        0xDF => "STU DIR",
        0xE0 => "SUBB IND",
        0xE1 => "CMPB IND",
        0xE2 => "SBCB IND",
        0xE3 => "ADDD IND",
        0xE4 => "ANDB IND",
        0xE5 => "BITB IND",
        0xE6 => "LDB IND",
        0xE7 => "STB IND",
        0xE8 => "EORB IND",
        0xE9 => "ADCB IND",
        0xEA => "ORB IND",
        0xEB => "ADDB IND",
        0xEC => "LDD IND",
        0xED => "STD IND",
        0xEE => "LDU IND",
        0xEF => "STU IND",
        0xF0 => "SUBB EXT",
        0xF1 => "CMPB EXT",
        0xF2 => "SBCB EXT",
        0xF3 => "ADDD EXT",
        0xF4 => "ANDB EXT",
        0xF5 => "BITB EXT",
        0xF6 => "LDB EXT",
        0xF7 => "STB EXT",
        0xF8 => "EORB EXT",
        0xF9 => "ADCB EXT",
        0xFA => "ORB EXT",
        0xFB => "ADDB EXT",
        0xFC => "LDD EXT",
        0xFD => "STD EXT",
        0xFE => "LDU EXT",
        0xFF => "STU EXT",
        _ => "???",
    }
}

pub(crate) fn page2_name(opcode: u8) -> &'static str {
    match opcode {
        0x21 => "LBRN REL",
        0x22 => "LBHI REL",
        0x23 => "LBLS REL",
        0x24 => "LBCC REL",
        0x25 => "LBCS REL",
        0x26 => "LBNE REL",
        0x27 => "LBEQ REL",
        0x28 => "LBVC REL",
        0x29 => "LBVS REL",
        0x2A => "LBPL REL",
        0x2B => "LBMI REL",
        0x2C => "LBGE REL",
        0x2D => "LBLT REL",
        0x2E => "LBGT REL",
        0x2F => "LBLE REL",
        0x3F => "SWI2",
        0x83 => "CMPD IMM",
        0x8C => "CMPY IMM",
        0x8E => "LDY IMM",
        0x93 => "CMPD DIR",
        0x9C => "CMPY DIR",
        0x9E => "LDY DIR",
        0x9F => "STY DIR",
        0xA3 => "CMPD IND",
        0xAC => "CMPY IND",
        0xAE => "LDY IND",
        0xAF => "STY IND",
        0xB3 => "CMPD EXT",
        0xBC => "CMPY EXT",
        0xBE => "LDY EXT",
        0xBF => "STY EXT",
        0xCE => "LDS IMM",
        0xDE => "LDS DIR",
        0xDF => "STS DIR",
        0xEE => "LDS IND",
        0xEF => "STS IND",
        0xFE => "LDS EXT",
        0xFF => "STS EXT",
        _ => "???",
    }
}

pub(crate) fn page3_name(opcode: u8) -> &'static str {
    match opcode {
        0x3F => "SWI3",
        0x83 => "CMPU IMM",
        0x8C => "CMPS IMM",
        0x93 => "CMPU DIR",
        0x9C => "CMPS DIR",
        0xA3 => "CMPU IND",
        0xAC => "CMPS IND",
        0xB3 => "CMPU EXT",
        0xBC => "CMPS EXT",
        _ => "???",
    }
}
