//! URL query-string encoding shared by navigation and API endpoint helpers.
//!
//! Uses `application/x-www-form-urlencoded` rules (the same ones browsers
//! apply to `URLSearchParams`), so spaces encode as `+`.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded;

/// Serialize `params` in iteration order. Empty input yields `""`.
pub fn encode_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

/// Return the first value for `name` in `search` (leading `?` optional).
///
/// Keys match exactly and case-sensitively after decoding.
#[must_use]
pub fn query_value(search: &str, name: &str) -> Option<String> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Percent-encode a single path segment.
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    // Form encoding turns spaces into `+`; paths need `%20`. A literal `+`
    // is already escaped as `%2B`, so every `+` left here was a space.
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
