//! Pool selection for keyword-like fields.

use rand::Rng;
use serde_json::Value as JsonValue;

/// Pick one entry of `values` uniformly at random, returned verbatim.
///
/// An empty pool yields `null`; compiled specs never carry one.
pub fn generate_one_of<R: Rng>(rng: &mut R, values: &[JsonValue]) -> JsonValue {
    if values.is_empty() {
        return JsonValue::Null;
    }
    let idx = rng.gen_range(0..values.len());
    values[idx].clone()
}
