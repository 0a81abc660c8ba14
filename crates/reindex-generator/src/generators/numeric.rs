//! Numeric value generators.

use rand::Rng;
use serde_json::Value as JsonValue;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> JsonValue {
    JsonValue::from(rng.gen_range(min..=max))
}

/// Generate a random real in `[min, max)` rounded to 2 decimal places.
///
/// Rounding is half away from zero (`f64::round`). A degenerate range
/// (`min == max`) always yields `min`.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> JsonValue {
    let u = rng.gen::<f64>();
    // Interpolated so `max - min` is never formed; it overflows for wide ranges.
    let value = min * (1.0 - u) + max * u;
    JsonValue::from(round_to_cents(value))
}

fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        // Too large to carry a fractional part.
        return value;
    }
    scaled.round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 10, 20);
            let v = value.as_i64().expect("integer value");
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_generate_int_range_negative() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = generate_int_range(&mut rng, -5, -1).as_i64().unwrap();
            assert!((-5..=-1).contains(&v));
        }
    }

    #[test]
    fn test_generate_float_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = generate_float_range(&mut rng, 0.0, 100.0).as_f64().unwrap();
            // Rounding may lift a draw just below 100.0 up to 100.0.
            assert!((0.0..=100.0).contains(&v));
            // At most two decimal places, whichever way halves were rounded.
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_generate_float_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let v = generate_float_range(&mut rng, 2.5, 2.5).as_f64().unwrap();
        assert_eq!(v, 2.5);
    }

    #[test]
    fn test_generate_float_extreme_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for (min, max) in [(-1.7e308, 1.7e308), (1.0e307, 1.0e308), (f64::MIN, f64::MAX)] {
            for _ in 0..100 {
                let v = generate_float_range(&mut rng, min, max)
                    .as_f64()
                    .expect("finite number");
                assert!(v.is_finite());
                assert!((min..=max).contains(&v));
            }
        }
    }

    #[test]
    fn test_round_to_cents_large_values() {
        assert_eq!(round_to_cents(1.0e307), 1.0e307);
        assert_eq!(round_to_cents(-f64::MAX), -f64::MAX);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.234), 1.23);
        assert_eq!(round_to_cents(-1.236), -1.24);
        assert_eq!(round_to_cents(7.0), 7.0);
    }
}
