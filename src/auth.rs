use crate::{
    basic::{parse_basic, Credentials},
    errors::ParseError,
    params::{parse_values, Params},
    scanner::{advance, read_token},
};
use std::{fmt, str::FromStr};
use tracing::{debug, instrument, trace};

/// An `Authorization` or `WWW-Authenticate` header value split into its
/// scheme and the unparsed remainder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedAuth {
    scheme: String,
    raw_value: String,
}

impl ParsedAuth {
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Everything after the scheme and the whitespace following it, byte
    /// for byte, including any line folding.
    #[inline]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Compares the scheme ASCII case-insensitively.
    #[inline]
    pub fn is_scheme(&self, scheme: &str) -> bool {
        self.scheme.eq_ignore_ascii_case(scheme)
    }

    /// Parameters of the payload, or an empty map if it does not parse.
    ///
    /// Use [`parse_values`] on [`raw_value`](Self::raw_value) to see the
    /// error.
    pub fn values(&self) -> Params {
        parse_values(&self.raw_value).unwrap_or_else(|e| {
            debug!(err = %e, scheme = %self.scheme, "dropping unparsable auth params");
            Params::default()
        })
    }

    /// Basic credentials of the payload, or empty ones if it does not
    /// decode.
    ///
    /// Use [`parse_basic`] on [`raw_value`](Self::raw_value) to see the
    /// error.
    pub fn basic(&self) -> Credentials {
        parse_basic(&self.raw_value).unwrap_or_else(|e| {
            debug!(err = %e, scheme = %self.scheme, "dropping malformed basic credentials");
            Credentials::default()
        })
    }
}

impl fmt::Display for ParsedAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw_value.is_empty() {
            f.write_str(&self.scheme)
        } else {
            write!(f, "{} {}", self.scheme, self.raw_value)
        }
    }
}

impl FromStr for ParsedAuth {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&http::HeaderValue> for ParsedAuth {
    type Error = ParseError;

    fn try_from(value: &http::HeaderValue) -> Result<Self, Self::Error> {
        let s = std::str::from_utf8(value.as_bytes()).map_err(|e| {
            trace!(idx = e.valid_up_to(), "header value is not utf-8");
            ParseError::InvalidChar(e.valid_up_to())
        })?;
        parse(s)
    }
}

/// Splits an auth header value into its scheme and raw payload.
///
/// Only the scheme is validated. The payload is checked later by
/// [`parse_values`] or [`parse_basic`], whichever fits the scheme.
///
/// Input that is empty or only whitespace has no scheme token at all and
/// fails with [`ParseError::MissingScheme`]. A scheme position holding a
/// separator or control byte fails with [`ParseError::UnexpectedChar`] or
/// [`ParseError::InvalidChar`] instead.
#[instrument(err, skip(header), fields(len = header.len()))]
pub fn parse(header: &str) -> Result<ParsedAuth, ParseError> {
    let buf = header.as_bytes();

    let i = advance(buf, 0, false)?;
    let scheme = read_token(header, i)?;
    if scheme.is_empty() {
        trace!(idx = i, "no scheme token");
        return Err(ParseError::MissingScheme);
    }

    let i = advance(buf, i + scheme.len(), true)?;
    trace!(scheme, payload_idx = i, "parsed scheme");

    Ok(ParsedAuth {
        scheme: scheme.into(),
        raw_value: header[i..].into(),
    })
}
