//! Schema mapping from KCDB JSON responses to domain types
//!
//! Every entity kind carries a static table of wire names; decoding goes
//! through [`Record`] so failures name the entity and field involved.

mod record;
pub mod reference;
pub mod results;

use kcdb_domain::{KcdbError, Result};
use serde_json::Value;

pub use record::{FromRecord, Record};
pub use reference::{QuantityFields, ReferenceFields};

/// Decode raw response bytes as JSON.
///
/// # Errors
/// `KcdbError::Parse` naming `entity` and carrying the decoder message.
pub fn decode(bytes: &[u8], entity: &str) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| KcdbError::Parse {
        entity: entity.to_string(),
        field: None,
        message: e.to_string(),
    })
}

/// Parse a single top-level object.
pub fn parse<T: FromRecord>(bytes: &[u8]) -> Result<T> {
    let value = decode(bytes, T::ENTITY)?;
    T::from_record(&Record::new(T::ENTITY, &value)?)
}

/// Parse the array held under `key` in a response envelope.
///
/// # Errors
/// `KcdbError::Parse` naming `key` if the envelope lacks it, or naming the
/// offending field of any element that does not map.
pub fn parse_list<T: FromRecord>(bytes: &[u8], key: &str) -> Result<Vec<T>> {
    let value = decode(bytes, T::ENTITY)?;
    let envelope = Record::new(T::ENTITY, &value)?;
    match value.get(key) {
        Some(Value::Array(_)) => envelope.list(key),
        Some(_) => Err(KcdbError::invalid_field(T::ENTITY, key, "array")),
        None => Err(KcdbError::missing_field(T::ENTITY, key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_names_the_entity() {
        let err = parse_list::<ReferenceFields>(b"{not json", "referenceData").unwrap_err();
        match err {
            KcdbError::Parse { entity, field, .. } => {
                assert_eq!(entity, "ReferenceData");
                assert_eq!(field, None);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_envelope_key_is_named() {
        let err = parse_list::<ReferenceFields>(br#"{"domains": []}"#, "referenceData").unwrap_err();
        assert_eq!(err.field(), Some("referenceData"));
    }

    #[test]
    fn envelope_must_hold_an_array() {
        let err =
            parse_list::<ReferenceFields>(br#"{"referenceData": {}}"#, "referenceData").unwrap_err();
        assert_eq!(err.field(), Some("referenceData"));
    }
}
