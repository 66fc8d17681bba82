use crate::decoder::Decoded;

/// Renders a decoded word as a source line that assembles back to it.
pub fn fmt_decoded(d: &Decoded) -> String {
    let mut s = d.mnemonic().to_string();
    for v in &d.operands {
        s.push(' ');
        s.push_str(&v.to_string());
    }
    s
}

/// Same as [`fmt_decoded`] with field names, e.g. `read dest=1, src=2, offset=3`.
pub fn fmt_fields(d: &Decoded) -> String {
    let parts: Vec<String> = d
        .spec
        .fields
        .iter()
        .zip(&d.operands)
        .map(|(f, v)| format!("{}={}", f.name, v))
        .collect();
    format!("{} {}", d.mnemonic(), parts.join(", "))
}
