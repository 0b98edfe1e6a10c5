//! # Call Arguments
//!
//! Contract functions receive their arguments as strings. Each typed
//! constructor here produces the exact text the execution engine parses on
//! the other side, so two SDKs encoding the same value must agree byte for
//! byte.
//!
//! | Constructor | Example input | Encoded |
//! |-------------|---------------|---------|
//! | `bool`      | `true`        | `true`  |
//! | `int64`     | `-7`          | `-7`    |
//! | `float64`   | `1.5`         | `1.5e+00` |
//! | `json_bytes`| `b"hi"`       | `"hi"`  |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single string-encoded contract call argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argument(String);

impl Argument {
    /// `true` / `false`.
    pub fn bool(value: bool) -> Self {
        Self(value.to_string())
    }

    /// Signed base-10.
    pub fn int32(value: i32) -> Self {
        Self(value.to_string())
    }

    /// Signed base-10.
    pub fn int64(value: i64) -> Self {
        Self(value.to_string())
    }

    /// Unsigned base-10.
    pub fn uint32(value: u32) -> Self {
        Self(value.to_string())
    }

    /// Unsigned base-10.
    pub fn uint64(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Shortest round-trip scientific notation at 32-bit precision.
    pub fn float32(value: f32) -> Self {
        Self(format_scientific(
            value.is_nan(),
            value.is_infinite(),
            value.is_sign_negative(),
            format!("{:e}", value),
        ))
    }

    /// Shortest round-trip scientific notation at 64-bit precision.
    pub fn float64(value: f64) -> Self {
        Self(format_scientific(
            value.is_nan(),
            value.is_infinite(),
            value.is_sign_negative(),
            format!("{:e}", value),
        ))
    }

    /// Passed through verbatim.
    pub fn string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The bytes, read as text, verbatim.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD, so arbitrary binary
    /// data does not survive this encoding. Hex- or base64-encode it first.
    pub fn bytes(value: &[u8]) -> Self {
        Self(String::from_utf8_lossy(value).into_owned())
    }

    /// The bytes, read as text, encoded as a JSON string literal (quoted and
    /// escaped).
    ///
    /// `<`, `>`, `&`, U+2028 and U+2029 are written as `\uXXXX` escapes, the
    /// same HTML-safe output other SDKs produce for this argument type.
    pub fn json_bytes(value: &[u8]) -> Self {
        let text = String::from_utf8_lossy(value);
        let quoted = serde_json::to_string(&text).unwrap_or_default();
        Self(escape_html(&quoted))
    }

    /// The encoded text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Rewrites Rust's `{:e}` output (`1.5e0`, `1e-7`) into the wire form:
/// an explicit exponent sign and at least two exponent digits (`1.5e+00`,
/// `1e-07`). Non-finite values become `NaN`, `+Inf` and `-Inf`.
fn format_scientific(is_nan: bool, is_infinite: bool, negative: bool, raw: String) -> String {
    if is_nan {
        return "NaN".to_owned();
    }
    if is_infinite {
        return if negative { "-Inf" } else { "+Inf" }.to_owned();
    }

    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

// Input is already valid JSON, so these characters only occur literally.
fn escape_html(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
