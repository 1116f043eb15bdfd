//! Transport layer: wire-format details (paths, query strings, JSON bodies).

mod coverage;
mod json;
mod numbers;
mod orders;

pub use coverage::{
    encode_browse_numbers_path, encode_country_coverage_path, encode_did_groups_path,
    encode_regions_path,
};
pub use json::{decode_error_envelope, decode_json_response, encode_json_body};
pub use numbers::{encode_delete_number_path, encode_list_numbers_path};
pub use orders::{encode_create_order_path, encode_get_order_path, encode_list_orders_path};

/// Percent-encode a single path segment so `/`, `?` and `#` stay inside it.
fn encode_path_segment(value: &str) -> String {
    // form_urlencoded escapes a literal `+` as `%2B`, so the only `+` left is a space.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Append `params` to `path` as a query string. Returns `path` unchanged when empty.
fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_owned();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
        .finish();
    format!("{path}?{query}")
}
