//! Lenient field deserializers for the upstream feed document.
//!
//! The upstream shape is never validated. Each field is projected on its own:
//! a missing or unusable value becomes `None` instead of failing the document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Value::deserialize(deserializer).ok().and_then(|v| as_string(&v)))
}

pub fn int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Value::deserialize(deserializer).ok().and_then(|v| as_int(&v)))
}

pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Value::deserialize(deserializer).ok().and_then(|v| as_bool(&v)))
}

pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	Ok(Value::deserialize(deserializer).ok().and_then(as_object))
}

/// Lists keep their length; entries that are not objects become `None`.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	Ok(match Value::deserialize(deserializer) {
		Ok(Value::Array(entries)) => Some(entries.into_iter().map(as_object).collect()),
		_ => None,
	})
}

pub fn as_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

pub fn as_int(value: &Value) -> Option<i32> {
	match value {
		Value::Number(n) => n
			.as_i64()
			.or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
			.and_then(|i| i32::try_from(i).ok()),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

pub fn as_bool(value: &Value) -> Option<bool> {
	match value {
		Value::Bool(b) => Some(*b),
		Value::String(s) if s == "true" => Some(true),
		Value::String(s) if s == "false" => Some(false),
		_ => None,
	}
}

fn as_object<T: DeserializeOwned>(value: Value) -> Option<T> {
	match value {
		Value::Object(_) => serde_json::from_value(value).ok(),
		_ => None,
	}
}
