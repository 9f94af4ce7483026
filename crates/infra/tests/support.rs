//! Shared fixtures for the infra integration tests.

use std::time::Duration;

use kcdb_domain::{Branch, ClientConfig, Domain, MetrologyArea};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Configuration pointing at a mock server, with a short timeout and no proxy.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Some(Duration::from_secs(5)))
        .with_system_proxy(false)
}

/// `{"referenceData": [...]}` from `(id, label, value)` triples.
pub fn reference_body(rows: &[(i64, &str, &str)]) -> Value {
    let data: Vec<Value> = rows
        .iter()
        .map(|(id, label, value)| json!({ "id": id, "label": label, "value": value }))
        .collect();
    json!({ "referenceData": data })
}

/// Page metadata for a page holding `rows` of `total` elements.
pub fn page_body(page: u64, page_size: u64, rows: Vec<Value>, total: u64) -> Value {
    json!({
        "numberOfElements": rows.len(),
        "pageNumber": page,
        "pageSize": page_size,
        "totalElements": total,
        "totalPages": total.div_ceil(page_size.max(1)),
        "versionApiKcdb": "1.0.9",
        "data": rows,
    })
}

pub fn area(id: i64, label: &str, domain: Domain) -> MetrologyArea {
    MetrologyArea { id, label: label.into(), value: format!("{label} area"), domain }
}

pub fn branch(id: i64, label: &str, area: MetrologyArea) -> Branch {
    Branch { id, label: label.into(), value: format!("{label} branch"), metrology_area: area }
}

/// Install a test subscriber so `RUST_LOG` shows facade logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
