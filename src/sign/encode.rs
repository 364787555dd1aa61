//! Percent-encoding and canonicalization rules shared by base strings, query strings, and
//! form bodies.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
// self
use crate::_prelude::*;

// Unreserved characters are ALPHA / DIGIT / `-` / `.` / `_` / `~`; everything else is escaped.
const PARAMETER_ESCAPE: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes one parameter name or value.
pub(crate) fn parameter_encode(value: &str) -> String {
	utf8_percent_encode(value, PARAMETER_ESCAPE).to_string()
}

/// Renders the `k=v&k=v` pair string, sorted by encoded key then encoded value.
///
/// The same rendering backs the signature base string, signed query strings, and signed form
/// bodies, so what goes on the wire is byte-for-byte what was signed.
pub(crate) fn encode_pairs(params: &BTreeMap<String, String>) -> String {
	let mut encoded: Vec<(String, String)> =
		params.iter().map(|(key, value)| (parameter_encode(key), parameter_encode(value))).collect();

	encoded.sort();

	let mut buf = String::new();

	for (idx, (key, value)) in encoded.iter().enumerate() {
		if idx > 0 {
			buf.push('&');
		}

		buf.push_str(key);
		buf.push('=');
		buf.push_str(value);
	}

	buf
}

/// Normalizes the target URL for signing: lowercase scheme and host, explicit non-default
/// port, path preserved, query stripped.
pub(crate) fn normalize_endpoint(url: &Url) -> String {
	let scheme = url.scheme();
	let host = url.host_str().unwrap_or_default();

	match url.port() {
		Some(port) => format!("{scheme}://{host}:{port}{}", url.path()),
		None => format!("{scheme}://{host}{}", url.path()),
	}
}
