//! Integration tests for the Ionizing Radiation facade.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use kcdb_domain::{Domain, IonizingRadiationSearch, Nuclide};
use kcdb_infra::IonizingRadiation;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{area, branch, config_for, page_body, reference_body};

fn radiation_for(server: &MockServer) -> IonizingRadiation {
    IonizingRadiation::from_config(&config_for(server)).unwrap()
}

/// `count` records with ids `1..=count`.
fn numbered(count: i64) -> Value {
    let data: Vec<Value> = (1..=count)
        .map(|id| json!({ "id": id, "label": id.to_string(), "value": format!("item {id}") }))
        .collect();
    json!({ "referenceData": data })
}

async fn mount_numbered(server: &MockServer, endpoint: &str, count: i64) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(numbered(count)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn branches_of_the_radiation_area() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referenceData/branch"))
        .and(query_param("areaId", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reference_body(&[
            (32, "DOS", "Dosimetry"),
            (33, "RAD", "Radioactivity"),
            (34, "NEU", "Neutron Measurements"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let radiation = radiation_for(&server);
    let ri = area(9, "RI", Domain::ionizing_radiation());
    let branches = radiation.branches(&ri).await.unwrap();
    assert_eq!(branches.len(), 3);

    let physics_area = area(3, "EM", Domain::general_physics());
    assert!(radiation.branches(&physics_area).await.unwrap().is_empty());
}

#[tokio::test]
async fn quantities_are_split_by_branch() {
    let server = MockServer::start().await;
    mount_numbered(&server, "/referenceData/quantity", 100).await;

    let radiation = radiation_for(&server);
    let ri = area(9, "RI", Domain::ionizing_radiation());

    let ids = |items: Vec<kcdb_domain::Quantity>| items.iter().map(|q| q.id).collect::<Vec<_>>();

    let dos = ids(radiation.quantities(&branch(32, "DOS", ri.clone())).await.unwrap());
    let rad = ids(radiation.quantities(&branch(33, "RAD", ri.clone())).await.unwrap());
    let neu = ids(radiation.quantities(&branch(34, "NEU", ri.clone())).await.unwrap());

    assert_eq!(dos, (1..32).collect::<Vec<_>>());
    assert_eq!(rad, (32..47).collect::<Vec<_>>());
    assert_eq!(neu, (47..78).collect::<Vec<_>>());
}

#[tokio::test]
async fn unknown_branches_yield_nothing_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let radiation = radiation_for(&server);
    let other = branch(27, "TF/F", area(7, "TF", Domain::general_physics()));

    assert!(radiation.quantities(&other).await.unwrap().is_empty());
    assert!(radiation.mediums(&other).await.unwrap().is_empty());
    assert!(radiation.sources(&other).await.unwrap().is_empty());
}

#[tokio::test]
async fn mediums_and_sources_are_split_by_branch() {
    let server = MockServer::start().await;
    mount_numbered(&server, "/referenceData/radiationMedium", 30).await;
    mount_numbered(&server, "/referenceData/radiationSource", 40).await;

    let radiation = radiation_for(&server);
    let ri = area(9, "RI", Domain::ionizing_radiation());
    let dos = branch(32, "DOS", ri.clone());
    let rad = branch(33, "RAD", ri.clone());
    let neu = branch(34, "NEU", ri);

    let medium_ids = |b: kcdb_domain::Branch| {
        let radiation = radiation.clone();
        async move {
            radiation.mediums(&b).await.unwrap().into_iter().map(|m| m.id).collect::<Vec<_>>()
        }
    };
    assert_eq!(medium_ids(rad.clone()).await, (1..17).collect::<Vec<_>>());
    assert_eq!(medium_ids(dos.clone()).await, (17..24).collect::<Vec<_>>());
    assert_eq!(medium_ids(neu.clone()).await, (24..=30).collect::<Vec<_>>());

    let sources = radiation.sources(&rad).await.unwrap();
    assert_eq!(sources.iter().map(|s| s.id).collect::<Vec<_>>(), [32, 33, 34]);
    assert!(sources.iter().all(|s| s.branch == rad));
    assert_eq!(radiation.sources(&dos).await.unwrap().len(), 31);
    assert_eq!(radiation.sources(&neu).await.unwrap().len(), 6);
}

#[tokio::test]
async fn search_posts_every_label() {
    let server = MockServer::start().await;
    let row = json!({
        "id": 300,
        "nuclideValue": "Co-60",
        "radiationCode": "1.1.1",
        "mediumValue": "Water"
    });
    Mock::given(method("POST"))
        .and(path("/cmc/searchData/radiation"))
        .and(body_json(json!({
            "metrologyAreaLabel": "RI",
            "branchLabel": "RAD",
            "quantityLabel": "1",
            "mediumLabel": "2",
            "sourceLabel": "3",
            "nuclideLabel": "Co-60",
            "page": 0,
            "pageSize": 100,
            "showTable": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 100, vec![row], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let co60 = Nuclide { id: 7, label: "Co-60".into(), value: "Cobalt 60".into() };
    let criteria = IonizingRadiationSearch::new()
        .branch("RAD")
        .quantity("1")
        .medium("2")
        .source("3")
        .nuclide(&co60);

    let results = radiation_for(&server).search(&criteria).await.unwrap();
    assert_eq!(results.data[0].nuclide_value, "Co-60");
    assert_eq!(results.data[0].radiation_code, "1.1.1");
    assert_eq!(results.data[0].instrument, "");
}

#[tokio::test]
async fn nuclides_are_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referenceData/nuclide"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reference_body(&[(7, "Co-60", "Cobalt 60")])),
        )
        .mount(&server)
        .await;

    let nuclides = radiation_for(&server).nuclides().await.unwrap();
    assert_eq!(nuclides[0].label, "Co-60");
}
