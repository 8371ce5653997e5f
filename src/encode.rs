use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, percent_encode};

/// The set of bytes that `encodeURIComponent` percent-encodes.
///
/// Everything is encoded except the ASCII alphanumerics and
/// U+002D (-), U+005F (_), U+002E (.), U+0021 (!), U+007E (~),
/// U+002A (*), U+0027 ('), U+0028 ((), and U+0029 ()).
///
/// Non-ASCII bytes are never part of an `AsciiSet` and are always encoded,
/// so each byte of a multi-byte UTF-8 sequence becomes its own `%XX` escape.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a byte string for use as a URI component.
///
/// The input is borrowed back when no byte needs escaping.
///
/// ```
/// use std::borrow::Cow;
///
/// assert_eq!(uri_component::encode(b"a b"), "a%20b");
/// assert!(matches!(uri_component::encode(b"hello"), Cow::Borrowed("hello")));
/// ```
#[inline]
#[must_use]
pub fn encode(input: &[u8]) -> Cow<'_, str> {
    encode_iter(input).into()
}

/// Percent-encodes a string for use as a URI component.
///
/// ```
/// assert_eq!(uri_component::encode_str("café"), "caf%C3%A9");
/// ```
#[inline]
#[must_use]
pub fn encode_str(input: &str) -> Cow<'_, str> {
    encode(input.as_bytes())
}

/// Appends the percent-encoded form of `input` to `output`.
///
/// Anything already in `output` is left untouched.
///
/// ```
/// let mut url = String::from("https://example.com/search?q=");
/// uri_component::encode_into(b"100% sure", &mut url);
/// assert_eq!(url, "https://example.com/search?q=100%25%20sure");
/// ```
pub fn encode_into(input: &[u8], output: &mut String) {
    #[cfg(feature = "tracing")]
    let start = output.len();

    output.extend(encode_iter(input));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        input_len = input.len(),
        output_len = output.len() - start,
        "encoded uri component into buffer"
    );
}

/// Writes the percent-encoded form of `input` to a generic writer.
///
/// Encoding itself cannot fail, so the only errors are the ones
/// reported by `writer`.
///
/// ```
/// let mut buffer = Vec::new();
/// uri_component::encode_to_writer(b"a/b?c", &mut buffer).unwrap();
/// assert_eq!(buffer, b"a%2Fb%3Fc");
/// ```
pub fn encode_to_writer<W: Write + ?Sized>(input: &[u8], writer: &mut W) -> std::io::Result<()> {
    #[cfg(feature = "tracing")]
    tracing::trace!(input_len = input.len(), "encoding uri component to writer");

    for chunk in encode_iter(input) {
        writer.write_all(chunk.as_bytes())?;
    }
    Ok(())
}

/// Returns a lazy encoder over `input`.
///
/// See [`EncodeUriComponent`].
#[inline]
pub fn encode_iter(input: &[u8]) -> EncodeUriComponent<'_> {
    EncodeUriComponent {
        inner: percent_encode(input, COMPONENT),
    }
}

/// Returns `true` if `byte` is emitted unchanged by the encoder.
///
/// ```
/// assert!(uri_component::is_safe(b'~'));
/// assert!(!uri_component::is_safe(b'%'));
/// assert!(!uri_component::is_safe(0xC3));
/// ```
#[inline]
#[must_use]
pub fn is_safe(byte: u8) -> bool {
    encoded_len(std::slice::from_ref(&byte)) == 1
}

/// The exact length of the encoded form of `input`.
///
/// Safe bytes count for one, every other byte for three.
#[must_use]
pub fn encoded_len(input: &[u8]) -> usize {
    encode_iter(input).map(str::len).sum()
}

/// A lazy percent-encoder for a single URI component.
///
/// Iterating yields `&str` chunks: runs of safe bytes borrowed from the
/// input, or single `%XX` escapes. The `Display` impl writes the whole
/// encoded component, so it can be passed to `format!` or `write!`
/// without building an intermediate `String`.
///
/// ```
/// let query = format!("q={}", uri_component::encode_iter(b"rust & c++"));
/// assert_eq!(query, "q=rust%20%26%20c%2B%2B");
///
/// let chunks: Vec<&str> = uri_component::encode_iter(b"a b").collect();
/// assert_eq!(chunks, ["a", "%20", "b"]);
/// ```
#[derive(Clone)]
pub struct EncodeUriComponent<'a> {
    inner: PercentEncode<'a>,
}

impl<'a> Iterator for EncodeUriComponent<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl fmt::Display for EncodeUriComponent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for EncodeUriComponent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodeUriComponent")
            .field(&self.to_string())
            .finish()
    }
}

impl<'a> From<EncodeUriComponent<'a>> for Cow<'a, str> {
    fn from(encoder: EncodeUriComponent<'a>) -> Self {
        encoder.inner.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKS: &[u8] = b"-_.!~*'()";

    #[test]
    fn safe_set() {
        let safe: Vec<u8> = (0..=255u8).filter(|b| is_safe(*b)).collect();
        assert_eq!(safe.len(), 26 + 26 + 10 + MARKS.len());

        for b in 0..=255u8 {
            let expected = b.is_ascii_alphanumeric() || MARKS.contains(&b);
            assert_eq!(is_safe(b), expected, "byte {b:#04x}");
        }
    }

    #[test]
    fn escapes_are_uppercase_and_padded() {
        assert_eq!(encode(&[0x00]), "%00");
        assert_eq!(encode(&[0x0A]), "%0A");
        assert_eq!(encode(&[0xFF]), "%FF");
        assert_eq!(encode(&[0xAB, 0xCD]), "%AB%CD");
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(encode(b"(test)*'-_.!~"), Cow::Borrowed(_)));
        assert!(matches!(encode(b""), Cow::Borrowed("")));
        assert!(matches!(encode(b"a b"), Cow::Owned(_)));
    }

    #[test]
    fn encode_into_appends() {
        let mut out = String::from("k=");
        encode_into(b"x y", &mut out);
        encode_into(b"", &mut out);
        assert_eq!(out, "k=x%20y");
    }

    #[test]
    fn writer_errors_are_propagated() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = encode_to_writer(b"abc", &mut Broken).unwrap_err();
        assert_eq!(err.to_string(), "broken pipe");

        // nothing to write, nothing to fail
        assert!(encode_to_writer(b"", &mut Broken).is_ok());
    }

    #[test]
    fn encoded_len_matches_output() {
        let inputs: [&[u8]; 5] = [b"", b"hello", b"a b", b"100% sure", "café".as_bytes()];
        for input in inputs {
            assert_eq!(encoded_len(input), encode(input).len());
        }
        assert_eq!(encoded_len("€".as_bytes()), 9);
    }
}
