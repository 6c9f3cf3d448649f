use crate::{
    errors::ParseError,
    scanner::{advance, read_quoted, read_token},
};
use bytes::BytesMut;
use std::{
    collections::{hash_map, HashMap},
    ops::Index,
};
use tracing::{instrument, trace};

/// Auth parameters (`name=value` pairs) keyed by name.
///
/// Names keep the spelling found in the header. A name given twice keeps
/// its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Params(HashMap<String, String>);

impl Params {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Renders the parameters as `name1="value1", name2="value2"`.
    ///
    /// Pairs come out in map iteration order, and values are written
    /// as-is without escaping, so this is not an inverse of
    /// [`parse_values`] for values holding `"` or `\`.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(64);
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }

    /// Appends the [`encode`](Self::encode) rendering to `wbuf`.
    #[inline]
    pub fn encode_into(&self, wbuf: &mut BytesMut) {
        wbuf.extend_from_slice(self.encode().as_bytes());
    }
}

impl Index<&str> for Params {
    type Output = str;

    #[inline]
    fn index(&self, name: &str) -> &Self::Output {
        self.0.index(name).as_str()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Parses a comma separated list of `name=token` or `name="quoted"` pairs,
/// such as the payload of a Digest header.
///
/// The first error aborts the whole parse; no partial result is returned.
#[instrument(err, skip(s), fields(len = s.len()))]
pub fn parse_values(s: &str) -> Result<Params, ParseError> {
    let buf = s.as_bytes();
    let mut params = Params::new();
    let mut i = 0;
    let mut first = true;

    loop {
        // whitespace, plus one delimiter comma after the first pair
        i = advance(buf, i, !first)?;
        first = false;
        if i == buf.len() {
            break;
        }

        let name = read_token(s, i)?;
        i += name.len();

        match buf.get(i) {
            Some(b'=') => i += 1,
            _ => {
                trace!(name, idx = i, "no '=' after parameter name");
                return Err(ParseError::ExpectedChar('=', i));
            }
        }

        let value = if buf.get(i) == Some(&b'"') {
            let v = read_quoted(s, i)?;
            i += v.len() + 2;
            v
        } else {
            let v = read_token(s, i)?;
            i += v.len();
            v
        };

        trace!(name, value, "parsed parameter");
        params.insert(name, value);
    }

    Ok(params)
}
