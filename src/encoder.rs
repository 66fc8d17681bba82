use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::isa::{self, InstrSpec, OPCODE_MASK};

/// A packed 40-bit instruction word. High 24 bits of the `u64` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Word(pub u64);

impl Word {
    pub fn opcode(self) -> u8 {
        (self.0 & OPCODE_MASK) as u8
    }

    pub fn field(self, f: &isa::Field) -> u64 {
        (self.0 >> f.offset) & f.mask()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#012x}", self.0)
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown opcode: {mnemonic}")]
    UnknownMnemonic { mnemonic: String },
    #[error("wrong operand count for {mnemonic}: expected {expected}, got {got} (usage: {usage})")]
    OperandCountMismatch {
        mnemonic: &'static str,
        expected: usize,
        got: usize,
        usage: String,
    },
    #[error("invalid operand {index} `{literal}`: not a base-10 integer")]
    InvalidOperandLiteral { index: usize, literal: String },
}

fn usage(spec: &InstrSpec) -> String {
    let mut s = spec.mnemonic.to_string();
    for f in spec.fields {
        s.push(' ');
        s.push_str(f.name);
    }
    s
}

/// Packs already-parsed operands into a word. Each operand is masked to its
/// field width; bits above the field are dropped without error.
pub fn pack(spec: &InstrSpec, operands: &[i32]) -> Word {
    debug_assert_eq!(operands.len(), spec.arity());
    let mut word = u64::from(spec.opcode) & OPCODE_MASK;
    for (f, &v) in spec.fields.iter().zip(operands) {
        // sign-extend so negative values keep their two's-complement bits
        let raw = i64::from(v) as u64;
        let masked = raw & f.mask();
        if masked != raw {
            warn!(
                mnemonic = spec.mnemonic,
                field = f.name,
                value = v,
                masked,
                "operand truncated to {} bits",
                f.width
            );
        }
        word |= masked << f.offset;
    }
    Word(word)
}

/// Encodes a token list produced by [`crate::preprocess::tokenize`].
pub fn encode(tokens: &[&str]) -> Result<Word, EncodeError> {
    let (first, args) = match tokens.split_first() {
        Some(split) => split,
        None => {
            return Err(EncodeError::UnknownMnemonic {
                mnemonic: String::new(),
            })
        }
    };
    let mnemonic = first.to_lowercase();
    let spec = isa::lookup(&mnemonic).ok_or(EncodeError::UnknownMnemonic { mnemonic })?;
    if args.len() != spec.arity() {
        return Err(EncodeError::OperandCountMismatch {
            mnemonic: spec.mnemonic,
            expected: spec.arity(),
            got: args.len(),
            usage: usage(spec),
        });
    }
    let operands = args
        .iter()
        .enumerate()
        .map(|(i, lit)| {
            lit.parse::<i32>()
                .map_err(|_| EncodeError::InvalidOperandLiteral {
                    index: i + 1,
                    literal: (*lit).to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pack(spec, &operands))
}
