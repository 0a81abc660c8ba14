//! Binary value generator.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use serde_json::Value as JsonValue;

/// Number of raw bytes behind each generated binary value.
pub const BINARY_LEN: usize = 64;

/// Generate [`BINARY_LEN`] random bytes, base64 encoded.
pub fn generate_binary<R: Rng>(rng: &mut R) -> JsonValue {
    let mut bytes = [0u8; BINARY_LEN];
    rng.fill_bytes(&mut bytes);
    JsonValue::String(STANDARD.encode(bytes))
}
