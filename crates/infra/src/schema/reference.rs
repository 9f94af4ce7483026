//! Reference data records
//!
//! The server returns the bare `id`/`label`/`value` triple for every kind;
//! parent links are attached by the facade that knows the scope.

use kcdb_domain::{Domain, Result};

use super::record::{FromRecord, Record};

/// The identity triple shared by all reference kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFields {
    pub id: i64,
    pub label: String,
    pub value: String,
}

impl FromRecord for ReferenceFields {
    const ENTITY: &'static str = "ReferenceData";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            id: record.required_i64("id")?,
            label: record.required_str("label")?.to_owned(),
            value: record.required_str("value")?.to_owned(),
        })
    }
}

/// A quantity record, whose label is `null` for non-ionizing quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityFields {
    pub id: i64,
    pub label: Option<String>,
    pub value: String,
}

impl FromRecord for QuantityFields {
    const ENTITY: &'static str = "Quantity";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            id: record.required_i64("id")?,
            label: record.nullable_str("label")?.map(str::to_owned),
            value: record.required_str("value")?.to_owned(),
        })
    }
}

impl FromRecord for Domain {
    const ENTITY: &'static str = "Domain";

    fn from_record(record: &Record<'_>) -> Result<Self> {
        Ok(Domain::new(record.required_str("code")?, record.required_str("name")?))
    }
}
