use crate::errors::ParseError;
use tracing::trace;

#[macro_use]
mod macros;

mod maps;
use maps::*;

mod quoted;
pub use quoted::*;

/// Role a single byte plays in the auth header grammar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ByteClass {
    /// SP, HT, CR or LF
    Whitespace,
    Comma,
    /// `( ) < > @ ; : \ " / [ ] ? = { }`
    Separator,
    /// bytes below 0x20, DEL and anything non-ASCII
    Control,
    /// printable ASCII allowed inside a token
    Token,
}

impl ByteClass {
    #[inline]
    pub fn is_token(self) -> bool {
        self == Self::Token
    }
}

#[inline]
pub fn classify(b: u8) -> ByteClass {
    BYTE_CLASS[b as usize]
}

/// Skips whitespace from `offset` up to the next token byte.
///
/// With `comma` set a single comma may be skipped as well. Returns the
/// offset of the first token byte, or `buf.len()` when the input ends.
pub fn advance(buf: &[u8], offset: usize, comma: bool) -> Result<usize, ParseError> {
    let mut i = offset;
    let mut commas = 0;

    while i < buf.len() {
        let b = buf[i];
        match classify(b) {
            ByteClass::Whitespace => (),
            ByteClass::Comma if comma && commas == 0 => commas += 1,
            ByteClass::Comma | ByteClass::Separator => {
                bail!(ParseError::UnexpectedChar(b as char, i), b, i)
            }
            ByteClass::Control => bail!(ParseError::InvalidChar(i), b, i),
            ByteClass::Token => break,
        }
        i += 1;
    }

    Ok(i)
}

/// Reads the token starting at `offset`.
///
/// Stops at whitespace, a separator or the end of input. The token may be
/// empty, callers needing a non-empty one must check.
pub fn read_token(s: &str, offset: usize) -> Result<&str, ParseError> {
    let buf = s.as_bytes();
    let offset = offset.min(buf.len());
    let mut i = offset;

    while i < buf.len() {
        let b = buf[i];
        match classify(b) {
            ByteClass::Token => (),
            ByteClass::Control => bail!(ParseError::InvalidChar(i), b, i),
            _ => break,
        }
        i += 1;
    }

    trace!(offset, len = i - offset, "read token");
    Ok(&s[offset..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        for b in [b' ', b'\t', b'\r', b'\n'] {
            assert_eq!(classify(b), ByteClass::Whitespace);
        }
        assert_eq!(classify(b','), ByteClass::Comma);
        for b in b"()<>@;:\\\"/[]?={}" {
            assert_eq!(classify(*b), ByteClass::Separator, "{}", *b as char);
        }
        for b in b"!#$%&'*+-.^_`|~09azAZ" {
            assert!(classify(*b).is_token(), "{}", *b as char);
        }
        assert_eq!(classify(0x00), ByteClass::Control);
        assert_eq!(classify(0x0B), ByteClass::Control);
        assert_eq!(classify(0x1F), ByteClass::Control);
        assert_eq!(classify(0x7F), ByteClass::Control);
        assert_eq!(classify(0x80), ByteClass::Control);
        assert_eq!(classify(0xFF), ByteClass::Control);
    }

    #[test]
    fn test_classify_table_is_consistent() {
        let separators = b"()<>@;:\\\"/[]?={}";
        for b in 0..=255u8 {
            let expected = match b {
                b' ' | b'\t' | b'\r' | b'\n' => ByteClass::Whitespace,
                b',' => ByteClass::Comma,
                v if separators.contains(&v) => ByteClass::Separator,
                v if v < 0x20 || v >= 0x7F => ByteClass::Control,
                _ => ByteClass::Token,
            };
            assert_eq!(classify(b), expected, "byte {:#04X}", b);
        }
    }

    #[test]
    fn test_advance() {
        let good: Vec<(&str, usize, bool, usize)> = vec![
            ("abc", 0, false, 0),
            ("   abc", 0, false, 3),
            (" \t\r\nabc", 0, false, 4),
            ("", 0, false, 0),
            ("    ", 0, false, 4),
            ("abc def", 3, false, 4),
            (", abc", 0, true, 2),
            (" ,abc", 0, true, 2),
            ("a=1, b=2", 3, true, 5),
            (" , ", 0, true, 3),
        ];

        for (s, offset, comma, expected) in &good {
            assert_eq!(
                advance(s.as_bytes(), *offset, *comma).unwrap(),
                *expected,
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn test_advance_errors() {
        let bad: Vec<(&str, usize, bool, ParseError)> = vec![
            (",abc", 0, false, ParseError::UnexpectedChar(',', 0)),
            (" ,, abc", 0, true, ParseError::UnexpectedChar(',', 2)),
            ("  =abc", 0, true, ParseError::UnexpectedChar('=', 2)),
            ("\"abc\"", 0, false, ParseError::UnexpectedChar('"', 0)),
            (" ;", 0, false, ParseError::UnexpectedChar(';', 1)),
            (" \u{1}abc", 0, false, ParseError::InvalidChar(1)),
            ("\u{7f}", 0, true, ParseError::InvalidChar(0)),
            ("  \u{e9}", 0, false, ParseError::InvalidChar(2)),
        ];

        for (s, offset, comma, expected) in &bad {
            assert_eq!(
                advance(s.as_bytes(), *offset, *comma),
                Err(*expected),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn test_read_token() {
        let good: Vec<(&str, usize, &str)> = vec![
            ("Basic abc", 0, "Basic"),
            ("Digest", 0, "Digest"),
            ("realm=x", 0, "realm"),
            ("a=b,c", 2, "b"),
            ("nc=00000001\n", 3, "00000001"),
            ("x!#$%&'*+-.^_`|~y;", 0, "x!#$%&'*+-.^_`|~y"),
            ("=abc", 0, ""),
            (" abc", 0, ""),
            ("abc", 3, ""),
            ("abc", 10, ""),
        ];

        for (s, offset, expected) in &good {
            assert_eq!(read_token(s, *offset).unwrap(), *expected, "{:?}", s);
        }
    }

    #[test]
    fn test_read_token_errors() {
        let bad: Vec<(&str, usize, ParseError)> = vec![
            ("ab\u{0}c", 0, ParseError::InvalidChar(2)),
            ("abc\u{7f}", 0, ParseError::InvalidChar(3)),
            ("x=caf\u{e9}", 2, ParseError::InvalidChar(5)),
        ];

        for (s, offset, expected) in &bad {
            assert_eq!(read_token(s, *offset), Err(*expected), "{:?}", s);
        }
    }
}
