//! Strict parsing of `Authorization` / `WWW-Authenticate` header values.
//!
//! ```
//! let auth = auth_header::parse("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==").unwrap();
//! assert!(auth.is_scheme("basic"));
//! assert_eq!(auth.basic().password, "open sesame");
//!
//! let auth = auth_header::parse(r#"Digest realm="x@y", qop=auth"#).unwrap();
//! let params = auth_header::parse_values(auth.raw_value()).unwrap();
//! assert_eq!(params.get("realm"), Some("x@y"));
//! ```

mod auth;
mod basic;
pub(crate) mod errors;
mod params;
#[cfg(not(fuzzing))]
#[allow(dead_code)]
pub(crate) mod scanner;
#[cfg(fuzzing)]
#[allow(dead_code)]
pub mod scanner;

pub use auth::*;
pub use basic::*;
pub use errors::ParseError;
pub use params::*;
