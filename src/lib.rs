//! Percent-encoding for URI components
//!
//! This crate encodes byte strings the same way as the web platform's
//! [`encodeURIComponent`](https://developer.mozilla.org/docs/Web/JavaScript/Reference/Global_Objects/encodeURIComponent):
//! every byte is escaped as `%XX` (two uppercase hex digits) except the
//! ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
//!
//! The encoder works on raw bytes. Input is expected to be UTF-8 but this
//! is not checked, and each byte of a multi-byte character is escaped on
//! its own. There is no knowledge of URI structure, so `/`, `?`, `&`
//! and friends are always escaped.
//!
//! Encoding is not idempotent: `%` is itself escaped, so encoding an
//! already-encoded component escapes it a second time.
//!
//! ## Usage
//!
//! ```
//! let mut url = String::from("https://example.com/users/");
//! uri_component::encode_into("José García".as_bytes(), &mut url);
//! url.push_str("?tag=");
//! url.push_str(&uri_component::encode_str("rock & roll"));
//!
//! assert_eq!(
//!     url,
//!     "https://example.com/users/Jos%C3%A9%20Garc%C3%ADa?tag=rock%20%26%20roll"
//! );
//!
//! // `%` is escaped too
//! assert_eq!(uri_component::encode(b"a%20b"), "a%2520b");
//! ```
//!
//! ## Features
//!
//! * `serde`: field-level serializers in [`helpers`].
//! * `tracing`: emit `trace` events when encoding into buffers or writers.

mod encode;
#[cfg(feature = "serde")]
pub mod helpers;

#[doc(inline)]
pub use encode::{
    COMPONENT, EncodeUriComponent, encode, encode_into, encode_iter, encode_str, encode_to_writer,
    encoded_len, is_safe,
};
