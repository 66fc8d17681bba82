//! Fixed-width little-endian record stream.
//!
//! Each instruction is stored as exactly [`RECORD_BYTES`] bytes, low byte
//! first. The stream has no header or trailer, so a reader must know the
//! record width out of band.

use std::io::{self, Write};

use crate::encoder::Word;
use crate::isa::RECORD_BYTES;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("stream length {len} is not a multiple of {}", RECORD_BYTES)]
    Truncated { len: usize },
}

pub fn to_bytes(word: Word) -> [u8; RECORD_BYTES] {
    let le = word.0.to_le_bytes();
    let mut out = [0u8; RECORD_BYTES];
    out.copy_from_slice(&le[..RECORD_BYTES]);
    out
}

pub fn from_bytes(bytes: [u8; RECORD_BYTES]) -> Word {
    let mut le = [0u8; 8];
    le[..RECORD_BYTES].copy_from_slice(&bytes);
    Word(u64::from_le_bytes(le))
}

/// Concatenates the records for `words` in order.
pub fn to_stream(words: &[Word]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * RECORD_BYTES);
    for &w in words {
        out.extend_from_slice(&to_bytes(w));
    }
    out
}

pub fn write_records<W: Write>(out: &mut W, words: &[Word]) -> io::Result<()> {
    out.write_all(&to_stream(words))?;
    out.flush()
}

pub fn read_records(bytes: &[u8]) -> Result<Vec<Word>, RecordError> {
    if bytes.len() % RECORD_BYTES != 0 {
        return Err(RecordError::Truncated { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(RECORD_BYTES)
        .map(|c| {
            let mut rec = [0u8; RECORD_BYTES];
            rec.copy_from_slice(c);
            from_bytes(rec)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_is_little_endian() {
        assert_eq!(to_bytes(Word(0x01_0203_0405)), [0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(from_bytes([0x05, 0x04, 0x03, 0x02, 0x01]), Word(0x01_0203_0405));
    }

    #[test]
    fn stream_is_bare_concatenation() {
        let s = to_stream(&[Word(0x1402), Word(0x3081B)]);
        assert_eq!(s, vec![0x02, 0x14, 0, 0, 0, 0x1B, 0x08, 0x03, 0, 0]);
        assert!(to_stream(&[]).is_empty());
    }

    #[test]
    fn rejects_partial_record() {
        assert_eq!(
            read_records(&[0, 0, 0, 0, 0, 1]),
            Err(RecordError::Truncated { len: 6 })
        );
        assert_eq!(read_records(&[]), Ok(vec![]));
    }

    #[test]
    fn write_records_to_vec() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[Word(0xB)]).unwrap();
        assert_eq!(buf, vec![0x0B, 0, 0, 0, 0]);
    }
}
