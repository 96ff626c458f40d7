//! JSON / source map minifier

use serde_json::Value;
use tracing::debug;

use super::collapse_whitespace;

/// Re-serialise JSON without insignificant whitespace.
///
/// Unparseable input degrades to the generic whitespace collapse.
pub fn minify_json(source: &str) -> String {
    match compact(source) {
        Ok(out) => out,
        Err(err) => {
            debug!("JSON parse failed ({}), collapsing whitespace instead", err);
            collapse_whitespace(source)
        }
    }
}

/// Parse and re-emit in the most compact form, keeping key order
pub fn compact(source: &str) -> serde_json::Result<String> {
    let mut value: Value = serde_json::from_str(source)?;
    integral_floats_to_ints(&mut value);
    serde_json::to_string(&value)
}

/// Largest magnitude below which every integral f64 is exact (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rewrite floats with an integral value (`1.0`, `1e2`, `-0`) as integers
fn integral_floats_to_ints(value: &mut Value) {
    let integral = match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER)
            .map(|f| f as i64),
        Value::Array(items) => {
            items.iter_mut().for_each(integral_floats_to_ints);
            None
        }
        Value::Object(map) => {
            map.values_mut().for_each(integral_floats_to_ints);
            None
        }
        _ => None,
    };
    if let Some(int) = integral {
        *value = Value::from(int);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compacts_and_keeps_key_order() {
        let json = "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\",\n  \"deps\": [ 1, 2 ]\n}\n";
        assert_eq!(
            minify_json(json),
            r#"{"name":"app","version":"1.0.0","deps":[1,2]}"#
        );
    }

    #[test]
    fn test_round_trip_and_idempotence() {
        let json = r#"{ "z": { "a": [true, null, 1.5, "x y"] }, "b": "line\nbreak" }"#;
        let once = minify_json(json);
        let original: Value = serde_json::from_str(json).unwrap();
        let reparsed: Value = serde_json::from_str(&once).unwrap();
        assert_eq!(original, reparsed);
        assert_eq!(minify_json(&once), once);
        assert!(!once.contains(": "));
    }

    #[test]
    fn test_integral_floats_are_written_as_integers() {
        assert_eq!(minify_json(r#"{"o":1.0,"e":1e2}"#), r#"{"o":1,"e":100}"#);
        assert_eq!(minify_json(r#"{"n": -0, "m": [-2.0E0]}"#), r#"{"n":0,"m":[-2]}"#);
    }

    #[test]
    fn test_fractional_and_huge_floats_are_kept() {
        assert_eq!(minify_json("[1.5, -0.25]"), "[1.5,-0.25]");
        assert_eq!(minify_json(r#"{"big": 1e300}"#), r#"{"big":1e300}"#);
    }

    #[test]
    fn test_whitespace_inside_strings_survives() {
        assert_eq!(minify_json(r#"[ "a   b" ]"#), r#"["a   b"]"#);
    }

    #[test]
    fn test_malformed_falls_back_to_collapse() {
        let out = minify_json("{\n  \"a\": 1,\n  \"b\": ");
        assert_eq!(out, r#"{ "a": 1, "b":"#);
    }

    #[test]
    fn test_compact_reports_errors() {
        assert!(compact("{").is_err());
        assert!(compact("").is_err());
    }

    #[test]
    fn test_source_map() {
        let map = "{\"version\": 3, \"sources\": [\"a.js\"], \"mappings\": \"AAAA\"}";
        assert_eq!(
            minify_json(map),
            r#"{"version":3,"sources":["a.js"],"mappings":"AAAA"}"#
        );
    }
}
