use serde::Serialize;

use crate::decoder::Op;

/// Width in bytes of one serialized instruction record.
pub const RECORD_BYTES: usize = 5;
/// Number of meaningful bits in an instruction word.
pub const WORD_BITS: u32 = 40;

pub const OPCODE_BITS: u32 = 4;
pub const OPCODE_MASK: u64 = (1 << OPCODE_BITS) - 1;

/// One operand field of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub width: u32,
    pub offset: u32,
}

impl Field {
    pub const fn mask(&self) -> u64 {
        (1u64 << self.width) - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrSpec {
    pub op: Op,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub fields: &'static [Field],
}

impl InstrSpec {
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

const DEST: Field = Field {
    name: "dest",
    width: 6,
    offset: 4,
};
const SRC: Field = Field {
    name: "src",
    width: 6,
    offset: 10,
};
const CONST: Field = Field {
    name: "const",
    width: 11,
    offset: 10,
};
const OFFSET: Field = Field {
    name: "offset",
    width: 11,
    offset: 16,
};

pub const LOAD: u8 = 2;
pub const WRITE: u8 = 3;
pub const READ: u8 = 11;

pub const TABLE: &[InstrSpec] = &[
    InstrSpec {
        op: Op::Load,
        opcode: LOAD,
        mnemonic: "load",
        fields: &[DEST, CONST],
    },
    InstrSpec {
        op: Op::Read,
        opcode: READ,
        mnemonic: "read",
        fields: &[DEST, SRC, OFFSET],
    },
    InstrSpec {
        op: Op::Write,
        opcode: WRITE,
        mnemonic: "write",
        fields: &[DEST, SRC, OFFSET],
    },
];

/// Looks up a mnemonic; callers normalize case first.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrSpec> {
    TABLE.iter().find(|s| s.mnemonic == mnemonic)
}

pub fn by_opcode(opcode: u8) -> Option<&'static InstrSpec> {
    TABLE.iter().find(|s| s.opcode == opcode)
}
