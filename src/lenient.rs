//! Field deserializers for host data.
//!
//! The host is a script runtime backed by a database, so the same field may arrive as
//! `true`, `1` or `"1"`, ids may come back as `1.0`, and timestamps may be numbers. Every
//! function here buffers the field as a [`Value`] and coerces it, falling back to the
//! type's default instead of failing the whole envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Script truthiness: `null`, `false`, `0` and `""` are false, everything else is true.
pub(crate) fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn text_of(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn float_of(v: &Value) -> Option<f64> {
    let f = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    f.is_finite().then_some(f)
}

/// Integers, integral floats (`1.0`) and numeric strings.
pub(crate) fn int_of(v: &Value) -> Option<i64> {
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    let f = float_of(v)?;
    (f.fract() == 0.0).then_some(f as i64)
}

pub(crate) fn bool_field<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(truthy(&Value::deserialize(d)?))
}

pub(crate) fn string_field<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text_of(&Value::deserialize(d)?).unwrap_or_default())
}

pub(crate) fn opt_string_field<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<String>, D::Error> {
    Ok(text_of(&Value::deserialize(d)?))
}

pub(crate) fn float_field<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(float_of(&Value::deserialize(d)?).unwrap_or_default())
}

pub(crate) fn id_field<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(int_of(&Value::deserialize(d)?).unwrap_or_default())
}

pub(crate) fn opt_id_field<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(int_of(&Value::deserialize(d)?))
}

/// Any other field type: decode it normally, or take its default when that fails
/// (including explicit `null`).
pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let v = Value::deserialize(d)?;
    Ok(serde_json::from_value(v).unwrap_or_default())
}

/// A list whose items decode independently. Items that cannot be decoded are skipped;
/// anything that is not an array is an empty list.
pub(crate) fn list_field<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::debug!(error = %e, "skipping undecodable list item");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_script_rules() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!truthy(&v), "{v} should be false");
        }
        for v in [json!(true), json!(1), json!(-2), json!("0"), json!([]), json!({})] {
            assert!(truthy(&v), "{v} should be true");
        }
    }

    #[test]
    fn ids_accept_integral_floats_and_strings() {
        assert_eq!(int_of(&json!(7)), Some(7));
        assert_eq!(int_of(&json!(7.0)), Some(7));
        assert_eq!(int_of(&json!(" 12 ")), Some(12));
        assert_eq!(int_of(&json!(7.5)), None);
        assert_eq!(int_of(&json!("abc")), None);
        assert_eq!(int_of(&json!(true)), None);
    }

    #[test]
    fn text_accepts_numbers_and_bools() {
        assert_eq!(text_of(&json!(1732060800000_i64)).as_deref(), Some("1732060800000"));
        assert_eq!(text_of(&json!(false)).as_deref(), Some("false"));
        assert_eq!(text_of(&json!({"a": 1})), None);
    }

    #[test]
    fn floats_accept_numeric_strings() {
        assert_eq!(float_of(&json!("150000.50")), Some(150000.5));
        assert_eq!(float_of(&json!(3)), Some(3.0));
        assert_eq!(float_of(&json!("n/a")), None);
    }
}
