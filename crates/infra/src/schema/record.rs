//! Typed field access over a decoded JSON object
//!
//! A [`Record`] remembers which entity it is decoding so every failure names
//! both the entity and the offending wire field.

use std::str::FromStr;

use kcdb_domain::{KcdbError, Result};
use serde_json::{Map, Value};

/// Decoding of one entity kind from a JSON object.
pub trait FromRecord: Sized {
    /// Entity name reported in parse errors.
    const ENTITY: &'static str;

    fn from_record(record: &Record<'_>) -> Result<Self>;
}

/// Borrowed view of one JSON object being mapped into `entity`.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    entity: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// Wrap `value`, which must be a JSON object.
    pub fn new(entity: &'static str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { entity, fields }),
            other => Err(KcdbError::Parse {
                entity: entity.to_string(),
                field: None,
                message: format!("expected a JSON object, found {}", json_type(other)),
            }),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// The raw value of `field`, treating `null` as absent.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    fn invalid(&self, field: &str, expected: &str) -> KcdbError {
        KcdbError::invalid_field(self.entity, field, expected)
    }

    fn missing(&self, field: &str) -> KcdbError {
        KcdbError::missing_field(self.entity, field)
    }

    pub fn required_i64(&self, field: &str) -> Result<i64> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        value.as_i64().ok_or_else(|| self.invalid(field, "integer"))
    }

    pub fn required_u64(&self, field: &str) -> Result<u64> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        value.as_u64().ok_or_else(|| self.invalid(field, "non-negative integer"))
    }

    pub fn required_str(&self, field: &str) -> Result<&'a str> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        value.as_str().ok_or_else(|| self.invalid(field, "string"))
    }

    /// A string that may be `null`; absent keys are still an error.
    pub fn nullable_str(&self, field: &str) -> Result<Option<&'a str>> {
        match self.fields.get(field) {
            None => Err(self.missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(_) => Err(self.invalid(field, "string")),
        }
    }

    /// Optional text; absent or `null` becomes an empty string.
    pub fn text(&self, field: &str) -> Result<String> {
        match self.get(field) {
            None => Ok(String::new()),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(_) => Err(self.invalid(field, "string")),
        }
    }

    /// Optional number.
    pub fn number(&self, field: &str) -> Result<Option<f64>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| self.invalid(field, "number")),
        }
    }

    /// Optional enum carried as its wire name; an empty string counts as absent.
    pub fn wire_enum<T: FromStr>(&self, field: &str) -> Result<Option<T>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(text)) if text.is_empty() => Ok(None),
            Some(Value::String(text)) => text
                .parse()
                .map(Some)
                .map_err(|_| self.invalid(field, "known enum value")),
            Some(_) => Err(self.invalid(field, "string")),
        }
    }

    /// Optional nested object; absent, `null` or `{}` all map to `None`.
    pub fn nested<T: FromRecord>(&self, field: &str) -> Result<Option<T>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Object(inner)) if inner.is_empty() => Ok(None),
            Some(value @ Value::Object(_)) => {
                T::from_record(&Record::new(T::ENTITY, value)?).map(Some)
            }
            Some(_) => Err(self.invalid(field, "object")),
        }
    }

    /// The raw elements of an optional array; absent or `null` is empty.
    pub fn array(&self, field: &str) -> Result<&'a [Value]> {
        match self.get(field) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(self.invalid(field, "array")),
        }
    }

    /// Optional array of nested objects.
    pub fn list<T: FromRecord>(&self, field: &str) -> Result<Vec<T>> {
        self.array(field)?
            .iter()
            .map(|item| T::from_record(&Record::new(T::ENTITY, item)?))
            .collect()
    }

    /// Optional array of strings.
    pub fn strings(&self, field: &str) -> Result<Vec<String>> {
        self.array(field)?
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| self.invalid(field, "string array"))
            })
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Copy a static table of `wire name => attribute` pairs out of a record.
///
/// The getter (`text`, `number`, `nested`, ...) decides how each wire value
/// is decoded.
macro_rules! map_fields {
    ($record:ident => $target:ident, $getter:ident { $($wire:literal => $field:ident),+ $(,)? }) => {
        $( $target.$field = $record.$getter($wire)?; )+
    };
}

pub(crate) use map_fields;
