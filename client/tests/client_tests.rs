use beacon_client::{BeaconAlleleRequest, BeaconClient, Endpoint, TransportError, ROUTES};
use beacon_client::endpoints::info::BeaconProbe;
use beacon_client::endpoints::query::AlleleQueryProbe;
use mockito::{Matcher, Server};
use reqwest::{Method, StatusCode};
use serde_json::json;

const BEACON_JSON: &str = r#"{
    "id": "org.example.beacon",
    "name": "Example Beacon",
    "apiVersion": "0.3.0",
    "organization": {"id": "example", "name": "Example Org"},
    "datasets": [{"id": "d1", "assemblyId": "GRCh37"}]
}"#;

const ALLELE_RESPONSE_JSON: &str = r#"{
    "beaconId": "org.example.beacon",
    "exists": true,
    "datasetAlleleResponses": [{"datasetId": "d1", "exists": true}]
}"#;

fn sample_request() -> BeaconAlleleRequest {
    BeaconAlleleRequest::builder()
        .reference_name("1")
        .start(100)
        .reference_bases("A")
        .alternate_bases("T")
        .assembly_id("GRCh37")
        .build()
}

#[tokio::test]
async fn test_get_beacon_decodes_descriptor() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BEACON_JSON)
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();
    let beacon = client.get_beacon().await.unwrap();

    mock.assert_async().await;
    assert_eq!(beacon.id.as_deref(), Some("org.example.beacon"));
    assert_eq!(beacon.datasets.len(), 1);
}

#[tokio::test]
async fn test_base_url_path_is_kept() {
    let mut server = Server::new_async().await;
    let info = server
        .mock("GET", "/beacon/")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let query = server
        .mock("PUT", "/beacon/query")
        .match_header("content-type", Matcher::Missing)
        .match_body(Matcher::Exact(String::new()))
        .with_status(405)
        .create_async()
        .await;

    let client = BeaconClient::new(&format!("{}/beacon", server.url())).unwrap();
    client.get_beacon().await.unwrap();
    let err = client.query_allele_put().await.unwrap_err();

    info.assert_async().await;
    query.assert_async().await;
    assert_eq!(err.status(), Some(StatusCode::METHOD_NOT_ALLOWED));
}

#[tokio::test]
async fn test_query_get_sends_exact_query_string() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/query")
        .match_query(Matcher::Exact(
            "referenceName=1&start=100&referenceBases=A&alternateBases=T&assemblyId=GRCh37"
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ALLELE_RESPONSE_JSON)
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();
    let response = client.query_allele_get(&sample_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.exists, Some(true));
    assert!(response.dataset("d1").is_some());
}

#[tokio::test]
async fn test_query_get_repeats_dataset_ids() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/query")
        .match_query(Matcher::Exact(
            "referenceName=1&start=100&referenceBases=A&alternateBases=T&assemblyId=GRCh37\
             &datasetIds=d1&datasetIds=d2&includeDatasetResponses=true"
                .to_string(),
        ))
        .with_status(200)
        .with_body(ALLELE_RESPONSE_JSON)
        .create_async()
        .await;

    let request = BeaconAlleleRequest::builder()
        .reference_name("1")
        .start(100)
        .reference_bases("A")
        .alternate_bases("T")
        .assembly_id("GRCh37")
        .dataset_ids(["d1", "d2"])
        .include_dataset_responses(true)
        .build();

    let client = BeaconClient::new(&server.url()).unwrap();
    client.query_allele_get(&request).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "referenceName": "1",
            "start": 100,
            "referenceBases": "A",
            "alternateBases": "T",
            "assemblyId": "GRCh37"
        })))
        .with_status(200)
        .with_body(ALLELE_RESPONSE_JSON)
        .expect(2)
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();
    let first = client.query_allele_post(&sample_request()).await.unwrap();
    let second = client.query_allele_post(&sample_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_rejected_verbs_surface_status_and_body() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", "/query")
        .match_header("content-type", Matcher::Missing)
        .match_body(Matcher::Exact(String::new()))
        .with_status(405)
        .with_body("Request method 'DELETE' not supported")
        .create_async()
        .await;
    let post_info = server
        .mock("POST", "/")
        .match_header("content-type", Matcher::Missing)
        .match_body(Matcher::Exact(String::new()))
        .with_status(415)
        .with_body("unsupported")
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();

    let err = client.query_allele_delete().await.unwrap_err();
    match &err {
        TransportError::Status { status, body } => {
            assert_eq!(*status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body, "Request method 'DELETE' not supported");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
    assert!(err.is_rejection());

    let err = client.post_beacon().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

    delete.assert_async().await;
    post_info.assert_async().await;
}

#[tokio::test]
async fn test_accepted_verb_returns_raw_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/")
        .match_header("content-type", Matcher::Missing)
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();
    let body = client.put_beacon().await.unwrap();

    mock.assert_async().await;
    assert_eq!(body.text(), "not json at all");
}

#[tokio::test]
async fn test_raw_send_keeps_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/")
        .match_header("content-type", Matcher::Missing)
        .match_body(Matcher::Exact(String::new()))
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();
    let response = client
        .request(&BeaconProbe::new(Method::DELETE))
        .unwrap()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.text().await.unwrap(), "forbidden");
}

#[tokio::test]
async fn test_malformed_body_is_a_serde_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html>hello</html>")
        .create_async()
        .await;

    let client = BeaconClient::new(&server.url()).unwrap();
    let err = client.get_beacon().await.unwrap_err();

    assert!(matches!(err, TransportError::Serde(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_network_failure_is_a_request_error() {
    // nothing listens on port 9 of localhost in the test environment
    let client = BeaconClient::new("http://127.0.0.1:9").unwrap();
    let err = client.get_beacon().await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
}

#[test]
fn test_routes_table_covers_every_verb_on_both_paths() {
    assert_eq!(ROUTES.len(), 8);
    for path in [".", "query"] {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            assert!(
                ROUTES
                    .iter()
                    .any(|route| route.path == path && route.method == method),
                "missing {method} {path}"
            );
        }
    }

    let put = AlleleQueryProbe::new(Method::PUT);
    assert_eq!(put.path(), "query");
}
