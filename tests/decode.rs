use asmvm::decoder::{Decoder, IsaDecoder, Op};
use asmvm::disasm::{fmt_decoded, fmt_fields};
use asmvm::isa::{self, TABLE};
use asmvm::record::{read_records, to_stream};
use asmvm::{assemble_source, encode, Word};

#[test]
fn fields_round_trip_through_table() {
    let dec = IsaDecoder::new();
    for spec in TABLE {
        let operands: Vec<i32> = (0..spec.arity() as i32).map(|i| 3 * i + 1).collect();
        let w = asmvm::encoder::pack(spec, &operands);
        assert_eq!(w.opcode(), spec.opcode);
        let d = dec.decode(w).unwrap();
        assert_eq!(d.mnemonic(), spec.mnemonic);
        assert_eq!(d.op, spec.op);
        let want: Vec<u64> = operands.iter().map(|&v| v as u64).collect();
        assert_eq!(d.operands, want);
    }
}

#[test]
fn decoded_field_is_masked_input() {
    let d = IsaDecoder::new()
        .decode(encode(&["load", "-2", "3000"]).unwrap())
        .unwrap();
    assert_eq!(d.op, Op::Load);
    assert_eq!(d.operands, vec![(-2i64 as u64) & 0x3F, 3000 & 0x7FF]);
}

#[test]
fn unknown_opcode_does_not_decode() {
    assert!(IsaDecoder::new().decode(Word(0x0)).is_none());
    assert!(IsaDecoder::new().decode(Word(0xF)).is_none());
}

#[test]
fn disassembly_reassembles_to_same_stream() {
    let src = "load 0 5\nREAD 1 2 3\nwrite 63 0 2047\n";
    let words = assemble_source(src).unwrap();
    let stream = to_stream(&words);

    let dec = IsaDecoder::new();
    let text: Vec<String> = read_records(&stream)
        .unwrap()
        .into_iter()
        .map(|w| fmt_decoded(&dec.decode(w).unwrap()))
        .collect();
    assert_eq!(text, vec!["load 0 5", "read 1 2 3", "write 63 0 2047"]);

    let again = assemble_source(&text.join("\n")).unwrap();
    assert_eq!(to_stream(&again), stream);
}

#[test]
fn field_listing_names_operands() {
    let d = IsaDecoder::new().decode(Word(0x3081B)).unwrap();
    assert_eq!(fmt_fields(&d), "read dest=1, src=2, offset=3");
    assert_eq!(isa::by_opcode(isa::READ).map(|s| s.arity()), Some(3));
}
