//! End-to-end client tests through the public API

use mlb_player_eval::{ApiClient, EvalError, PlayerFilter, Season};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players"))
        .and(query_param("year", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "players": [] })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/players"))
        .and(query_param("year", "2024"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "players": [] })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(format!("{}/api", mock_server.uri()));
    let filter = PlayerFilter::default();

    let (ok, failed, filtered) = tokio::join!(
        client.get_players(Season::new(2023)),
        client.get_players(Season::new(2024)),
        client.filter_players(&filter),
    );

    assert!(ok.unwrap().is_empty());
    assert!(matches!(failed.unwrap_err(), EvalError::Status { .. }));
    assert_eq!(filtered.unwrap().count, 0);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_failed_call_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/trades/analyze"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(format!("{}/api", mock_server.uri()));
    let result = client
        .analyze_trade(&["A".to_string()], &["B".to_string()])
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_cloned_client_shares_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "players": [] })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(format!("{}/api", mock_server.uri()));
    let cloned = client.clone();
    assert_eq!(client.base_url(), cloned.base_url());

    client.get_players(Season::default()).await.unwrap();
    cloned.get_players(Season::default()).await.unwrap();
}
