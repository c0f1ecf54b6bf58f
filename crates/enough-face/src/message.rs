//! Decoding of inbound companion messages.

use serde_json::Value;

/// Message key carrying the "invert colors" setting.
pub const INVERT_COLORS_KEY: &str = "INVERT_COLORS";

/// Extracts the invert flag from a message.
///
/// Accepts a boolean or an integer (`1` means inverted, any other integer
/// means not). Returns `None` when the key is absent or holds anything else;
/// such messages must leave the current flag untouched.
pub fn decode_invert(message: &Value) -> Option<bool> {
    let value = message.get(INVERT_COLORS_KEY)?;
    value.as_bool().or_else(|| value.as_i64().map(|v| v == 1))
}
