use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::encoder::{encode, EncodeError, Word};
use crate::isa::RECORD_BYTES;
use crate::preprocess::{lines, tokenize};
use crate::record;

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("line {line}: {cause}")]
    Encode { line: usize, cause: EncodeError },
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AsmError {
    /// 1-based source line for encoding failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            AsmError::Encode { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub instructions: usize,
    pub bytes: usize,
}

/// Encodes every instruction line of `src` in order. Stops at the first
/// failing line.
pub fn assemble_source(src: &str) -> Result<Vec<Word>, AsmError> {
    let mut words = Vec::new();
    for (i, raw) in lines(src).enumerate() {
        let line = i + 1;
        let Some(tokens) = tokenize(raw) else { continue };
        let word = encode(&tokens).map_err(|cause| AsmError::Encode { line, cause })?;
        debug!(line, mnemonic = tokens[0], word = %word, "encoded");
        words.push(word);
    }
    Ok(words)
}

/// Assembles `input` into `output`. The output file is created only after
/// every line has encoded, so a failing source leaves no file behind.
pub fn assemble_file(input: &Path, output: &Path) -> Result<Summary, AsmError> {
    let src = fs::read_to_string(input).map_err(|source| AsmError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let words = assemble_source(&src)?;
    let write_err = |source| AsmError::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    record::write_records(&mut BufWriter::new(file), &words).map_err(write_err)?;
    let summary = Summary {
        instructions: words.len(),
        bytes: words.len() * RECORD_BYTES,
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        instructions = summary.instructions,
        "assembled"
    );
    Ok(summary)
}
