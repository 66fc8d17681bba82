/// Whitespace as the source format defines it: ASCII only, so U+00A0 and
/// friends stay inside a token.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Iterator over source lines. `\n`, `\r\n` and a lone `\r` all end a line;
/// a terminator at end of input does not start another one.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

pub fn lines(src: &str) -> Lines<'_> {
    Lines { rest: src }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(p) => {
                let line = &self.rest[..p];
                let eol = if self.rest[p..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[p + eol..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Drops everything from the first `;` and trims what is left.
pub fn strip_comment(line: &str) -> &str {
    let s = match line.find(';') {
        Some(p) => &line[..p],
        None => line,
    };
    trim(s)
}

/// Splits a source line into `[mnemonic, operand...]`.
/// Returns `None` for blank lines and comment-only lines.
pub fn tokenize(line: &str) -> Option<Vec<&str>> {
    let s = strip_comment(line);
    if s.is_empty() {
        return None;
    }
    Some(s.split(is_separator).filter(|t| !t.is_empty()).collect())
}
