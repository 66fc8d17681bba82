use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use asmvm::decoder::{Decoder, IsaDecoder};
use asmvm::disasm::{fmt_decoded, fmt_fields};
use asmvm::record::read_records;
use asmvm::{Word, RECORD_BYTES};

#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub index: usize,
    pub offset: usize,
    pub bytes: [u8; RECORD_BYTES],
    pub word: Word,
    /// `None` when the opcode nibble is not a known instruction.
    pub text: Option<String>,
    pub fields: Option<String>,
}

pub fn load_records(path: &Path) -> Result<Vec<Word>> {
    let file = std::fs::read(path)?;
    Ok(read_records(&file)?)
}

pub fn listing(words: &[Word]) -> Vec<Entry> {
    let dec = IsaDecoder::new();
    words
        .iter()
        .enumerate()
        .map(|(index, &word)| {
            let d = dec.decode(word);
            Entry {
                index,
                offset: index * RECORD_BYTES,
                bytes: asmvm::record::to_bytes(word),
                word,
                text: d.as_ref().map(fmt_decoded),
                fields: d.as_ref().map(fmt_fields),
            }
        })
        .collect()
}
