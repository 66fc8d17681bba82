pub mod assembler;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod isa;
pub mod preprocess;
pub mod record;

pub use assembler::{assemble_file, assemble_source, AsmError, Summary};
pub use encoder::{encode, EncodeError, Word};
pub use isa::{InstrSpec, RECORD_BYTES};
