//! Integration tests for the General Physics facade.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use kcdb_domain::{Domain, GeneralPhysicsSearch, KcdbError, Service, SubService};
use kcdb_infra::GeneralPhysics;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{area, branch, config_for, page_body, reference_body};

fn physics_for(server: &MockServer) -> GeneralPhysics {
    GeneralPhysics::from_config(&config_for(server)).unwrap()
}

#[tokio::test]
async fn branches_of_a_physics_area() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referenceData/branch"))
        .and(query_param("areaId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reference_body(&[
            (26, "TF/TI", "Time"),
            (27, "TF/F", "Frequency"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tf = area(7, "TF", Domain::general_physics());
    let branches = physics_for(&server).branches(&tf).await.unwrap();

    assert_eq!(branches.len(), 2);
    assert_eq!(branches[1].label, "TF/F");
    assert_eq!(branches[1].metrology_area, tf);
}

#[tokio::test]
async fn branches_of_foreign_areas_are_empty_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let physics = physics_for(&server);
    let qm = area(8, "QM", Domain::chemistry_biology());
    let ri = area(9, "RI", Domain::ionizing_radiation());

    assert!(physics.branches(&qm).await.unwrap().is_empty());
    assert!(physics.branches(&ri).await.unwrap().is_empty());
}

#[tokio::test]
async fn radiation_branches_have_no_services() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    let physics = physics_for(&server);
    let ri = area(9, "RI", Domain::ionizing_radiation());
    for (id, label) in [(32, "DOS"), (33, "RAD"), (34, "NEU")] {
        let services = physics.services(&branch(id, label, ri.clone())).await.unwrap();
        assert!(services.is_empty(), "branch {label}");
    }
}

#[tokio::test]
async fn physics_codes_chain_down_to_individual_services() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referenceData/service"))
        .and(query_param("branchId", "27"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reference_body(&[(55, "2", "Frequency")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/referenceData/subService"))
        .and(query_param("serviceId", "55"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reference_body(&[(218, "3", "Frequency meter")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/referenceData/individualService"))
        .and(query_param("subServiceId", "218"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reference_body(&[(546, "1", "Frequency counter")])),
        )
        .mount(&server)
        .await;

    let physics = physics_for(&server);
    let frequency = branch(27, "TF/F", area(7, "TF", Domain::general_physics()));

    let services = physics.services(&frequency).await.unwrap();
    let subs = physics.sub_services(&services[0]).await.unwrap();
    let individual = physics.individual_services(&subs[0]).await.unwrap();

    assert_eq!(services[0].physics_code, "2");
    assert_eq!(subs[0].physics_code, "2.3");
    assert_eq!(individual[0].physics_code, "2.3.1");
    assert_eq!(individual[0].sub_service.service.branch, frequency);
}

#[tokio::test]
async fn missing_individual_services_are_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referenceData/individualService"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let frequency = branch(27, "TF/F", area(7, "TF", Domain::general_physics()));
    let service = Service::new(frequency, 55, "2".into(), "Frequency".into());
    let sub = SubService::new(service, 104, "9".into(), "Not attributed 1".into());

    let individual = physics_for(&server).individual_services(&sub).await.unwrap();
    assert!(individual.is_empty());
}

#[tokio::test]
async fn other_individual_service_failures_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referenceData/individualService"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let frequency = branch(27, "TF/F", area(7, "TF", Domain::general_physics()));
    let service = Service::new(frequency, 55, "2".into(), "Frequency".into());
    let sub = SubService::new(service, 218, "3".into(), "Frequency meter".into());

    let err = physics_for(&server).individual_services(&sub).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn search_posts_labels_and_physics_code() {
    let server = MockServer::start().await;
    let row = json!({
        "id": 4411,
        "kcdbCode": "APMP-EM-NZ-0001",
        "nmiCode": "MSL",
        "branchValue": "Fibre optics",
        "uncertaintyMode": "Relative",
        "parameters": [{ "parameterName": "Wavelength", "parameterValue": "1550 nm" }]
    });
    Mock::given(method("POST"))
        .and(path("/cmc/searchData/physics"))
        .and(body_json(json!({
            "metrologyAreaLabel": "PR",
            "branchLabel": "PR/FO",
            "physicsCode": "2.3",
            "countries": ["NZ"],
            "keywords": "fibre",
            "page": 0,
            "pageSize": 100,
            "showTable": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 100, vec![row], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let criteria = GeneralPhysicsSearch::new("PR")
        .branch("PR/FO")
        .physics_code("2.3")
        .countries(["NZ"])
        .keywords("fibre");
    let results = physics_for(&server).search(&criteria).await.unwrap();

    assert_eq!(results.page.total_elements, 1);
    assert_eq!(results.data[0].common.nmi_code, "MSL");
    assert_eq!(results.data[0].branch_value, "Fibre optics");
    assert_eq!(results.data[0].parameters[0].parameter_name, "Wavelength");
}

#[tokio::test]
async fn invalid_page_size_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let physics = physics_for(&server);
    for size in [0, 10_001] {
        let criteria = GeneralPhysicsSearch::new("EM").page_size(size);
        let err = physics.search(&criteria).await.unwrap_err();
        assert!(matches!(err, KcdbError::Usage(_)), "page size {size}");
        assert!(err.to_string().contains("[1, 10000]"));
    }
}

#[tokio::test]
async fn malformed_search_response_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cmc/searchData/physics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = physics_for(&server).search(&GeneralPhysicsSearch::new("EM")).await.unwrap_err();
    match err {
        KcdbError::Parse { entity, .. } => assert_eq!(entity, "GeneralPhysicsResults"),
        other => panic!("expected parse error, got {other:?}"),
    }
}
