use crate::errors::ParseError;
use tracing::trace;

/// Reads a quoted string starting at the opening `"` at `offset`.
///
/// A backslash escapes the byte after it, which is then accepted without
/// ending the string. The returned slice is the raw text between the
/// quotes: escape backslashes are kept, so `"a\"b"` yields `a\"b`.
pub fn read_quoted(s: &str, offset: usize) -> Result<&str, ParseError> {
    let buf = s.as_bytes();
    match buf.get(offset) {
        Some(b'"') => (),
        Some(&b) => bail!(ParseError::ExpectedChar('"', offset), b, offset),
        None => {
            trace!(offset, "no opening quote before end");
            return Err(ParseError::ExpectedChar('"', offset));
        }
    }

    let mut escape = false;
    for (i, &b) in buf.iter().enumerate().skip(offset + 1) {
        if escape {
            escape = false;
            if b <= 0x7F {
                continue;
            }
        }
        match b {
            b'"' => return Ok(&s[offset + 1..i]),
            b'\\' => escape = true,
            b'\t' | b'\r' | b'\n' => (),
            0x00..=0x1F | 0x7F => bail!(ParseError::InvalidChar(i), b, i),
            _ => (),
        }
    }

    trace!(offset, "quoted string not terminated");
    Err(ParseError::UnterminatedQuote)
}
