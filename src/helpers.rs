//! Field-level serde adapters for percent-encoded URI components

use serde::{Serialize, Serializer};

/// Serializes the value through the encoder without allocating.
struct Encoded<'a>(&'a str);

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&crate::encode_iter(self.0.as_bytes()))
    }
}

/// Serialize a string as its percent-encoded URI component
///
/// ## Example
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Link {
///     #[serde(serialize_with = "uri_component::helpers::uri_component::serialize")]
///     path: String,
/// }
///
/// # fn main(){
/// let link = Link { path: "docs/léa & co".to_string() };
/// assert_eq!(
///     serde_json::to_string(&link).unwrap(),
///     r#"{"path":"docs%2Fl%C3%A9a%20%26%20co"}"#
/// );
/// # }
/// ```
pub mod uri_component {
    use serde::Serializer;

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<str> + ?Sized,
    {
        serde::Serialize::serialize(&super::Encoded(value.as_ref()), serializer)
    }
}

/// Serialize an optional string as its percent-encoded URI component
///
/// `None` is serialized as none.
///
/// ## Example
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Search {
///     #[serde(serialize_with = "uri_component::helpers::uri_component_opt::serialize")]
///     q: Option<String>,
/// }
///
/// # fn main(){
/// let search = Search { q: Some("a+b".to_string()) };
/// assert_eq!(serde_json::to_string(&search).unwrap(), r#"{"q":"a%2Bb"}"#);
///
/// let search = Search { q: None };
/// assert_eq!(serde_json::to_string(&search).unwrap(), r#"{"q":null}"#);
/// # }
/// ```
pub mod uri_component_opt {
    use serde::Serializer;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<str>,
    {
        match value {
            Some(v) => serializer.serialize_some(&super::Encoded(v.as_ref())),
            None => serializer.serialize_none(),
        }
    }
}
