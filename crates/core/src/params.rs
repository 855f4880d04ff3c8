//! Lenient typed lookups into a JSON parameter object.
//!
//! Drawer parameter structs are built from user-supplied JSON (`--params`).
//! Every helper takes the object, a key and a default; a missing key or a
//! value of the wrong JSON type yields the default. Range and consistency
//! checks belong to each family's `validate()`, not here.

use serde_json::Value;

/// `params[name]` as `f64`; integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// `params[name]` as `u32`. Negative, fractional or too-large values fall back.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// `params[name]` as `usize`. Negative or fractional values fall back.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn f64_reads_floats_and_integers() {
        let params = json!({"rate": 0.9, "arm_length": 400});
        assert_eq!(param_f64(&params, "rate", 0.5), 0.9);
        assert_eq!(param_f64(&params, "arm_length", 1.0), 400.0);
    }

    #[test]
    fn f64_falls_back_on_missing_null_or_string() {
        let params = json!({"rate": null, "sd": "wide"});
        assert_eq!(param_f64(&params, "rate", 0.88), 0.88);
        assert_eq!(param_f64(&params, "sd", 1.0), 1.0);
        assert_eq!(param_f64(&params, "absent", 2.0), 2.0);
    }

    #[test]
    fn lookups_on_non_object_return_default() {
        let params = json!([1, 2, 3]);
        assert_eq!(param_f64(&params, "rate", 0.5), 0.5);
        assert_eq!(param_u32(&params, "count", 50), 50);
    }

    #[test]
    fn u32_rejects_negative_fractional_and_oversized() {
        let params = json!({"a": -4, "b": 2.5, "c": 5_000_000_000_u64, "d": 12});
        assert_eq!(param_u32(&params, "a", 1), 1);
        assert_eq!(param_u32(&params, "b", 1), 1);
        assert_eq!(param_u32(&params, "c", 1), 1);
        assert_eq!(param_u32(&params, "d", 1), 12);
    }

    #[test]
    fn usize_reads_counts() {
        let params = json!({"count": 75, "bad": -1});
        assert_eq!(param_usize(&params, "count", 50), 75);
        assert_eq!(param_usize(&params, "bad", 50), 50);
    }

    #[test]
    fn bool_requires_json_bool() {
        let params = json!({"label": true, "mirror": 1});
        assert!(param_bool(&params, "label", false));
        assert!(!param_bool(&params, "mirror", false));
    }
}
