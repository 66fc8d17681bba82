use serde::Serialize;

use crate::encoder::Word;
use crate::isa::{self, InstrSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Op {
    Load,
    Read,
    Write,
}

/// A word split back into its fields. Operands are the raw unsigned field
/// values in declared order.
#[derive(Debug, Clone, Serialize)]
pub struct Decoded {
    pub op: Op,
    #[serde(skip)]
    pub spec: &'static InstrSpec,
    pub operands: Vec<u64>,
}

impl Decoded {
    pub fn mnemonic(&self) -> &'static str {
        self.spec.mnemonic
    }
}

pub trait Decoder {
    fn decode(&self, word: Word) -> Option<Decoded>;
}

/// Table-driven decoder for the record format. This is the entry point a
/// future execution engine consumes.
#[derive(Debug, Default)]
pub struct IsaDecoder;

impl IsaDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for IsaDecoder {
    fn decode(&self, word: Word) -> Option<Decoded> {
        let spec = isa::by_opcode(word.opcode())?;
        let operands = spec.fields.iter().map(|f| word.field(f)).collect();
        Some(Decoded {
            op: spec.op,
            spec,
            operands,
        })
    }
}
