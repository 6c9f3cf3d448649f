use thiserror::Error;

/// Error returned by the strict parsing functions.
///
/// Positions are 0-based byte offsets into the string handed to the
/// failing call (the whole header for [`parse`](crate::parse), the raw
/// payload for [`parse_values`](crate::parse_values)).
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unexpected '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    #[error("invalid char at position {0}")]
    InvalidChar(usize),
    #[error("expecting '{0}' at position {1}")]
    ExpectedChar(char, usize),
    #[error("expecting '\"' but reached end")]
    UnterminatedQuote,
    #[error("missing auth scheme")]
    MissingScheme,
    #[error("unknown credential format")]
    MalformedCredentialFormat,
}
