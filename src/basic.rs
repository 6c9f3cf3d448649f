use crate::errors::ParseError;
use base64::{
    alphabet,
    engine::{general_purpose, GeneralPurpose},
    Engine as _,
};
use tracing::{debug, instrument};

// Padded standard alphabet; non-zero trailing bits in the last symbol are
// ignored rather than rejected.
const BASIC_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_allow_trailing_bits(true),
);

/// A username and password pair decoded from a Basic payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// Decodes a Basic payload (`base64("user:password")`).
///
/// CR and LF bytes anywhere in the payload are skipped before decoding, so
/// a payload ending in CRLF or broken across lines still decodes. Other
/// whitespace is not skipped. The decoded text is split on the first `:`,
/// so the password may itself contain colons.
///
/// A payload that is not valid padded base64 decodes to empty credentials
/// with no error, which callers cannot tell apart from a payload that
/// really carries empty credentials. Check [`Credentials::is_empty`] before
/// trusting the result.
#[instrument(err, skip(s))]
pub fn parse_basic(s: &str) -> Result<Credentials, ParseError> {
    let payload: Vec<u8> = s.bytes().filter(|b| !matches!(*b, b'\r' | b'\n')).collect();
    let decoded = match BASIC_ENGINE.decode(payload) {
        Ok(d) => d,
        Err(e) => {
            debug!(err = %e, "payload is not valid base64, no credentials");
            return Ok(Credentials::default());
        }
    };

    let decoded = String::from_utf8_lossy(&decoded);
    match decoded.split_once(':') {
        Some((username, password)) => Ok(Credentials {
            username: username.into(),
            password: password.into(),
        }),
        None => Err(ParseError::MalformedCredentialFormat),
    }
}
