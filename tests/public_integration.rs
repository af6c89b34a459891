mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use p2pb2b_api_client::error::P2bError;
use p2pb2b_api_client::rest::P2bClient;

use common::{API_KEY, assert_round_trip, build_client, header, single_request};

#[tokio::test]
async fn test_get_products() {
    let server = MockServer::start().await;
    let body = r#"{
        "success": true,
        "message": "",
        "result": [
            { "id": "ETH_BTC", "fromSymbol": "ETH", "toSymbol": "BTC" },
            { "id": "BTC_USD", "fromSymbol": "BTC", "toSymbol": "USD" }
        ],
        "cache_time": 1574197000.65497,
        "current_time": 1574197000.655773
    }"#;

    Mock::given(method("GET"))
        .and(path("/public/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response = client.get_products().await.unwrap();

    assert!(response.success);
    assert_eq!(response.cache_time, Some(1574197000.65497));
    assert_eq!(response.current_time, Some(1574197000.655773));
    assert_eq!(response.result.len(), 2);
    assert_eq!(response.result[0].id, "ETH_BTC");
    assert_eq!(response.result[0].from_symbol, "ETH");
    assert_eq!(response.result[0].to_symbol, "BTC");
    assert_eq!(response.result[1].id, "BTC_USD");
    assert_eq!(response.result[1].from_symbol, "BTC");
    assert_eq!(response.result[1].to_symbol, "USD");
    assert_round_trip(body, &response);

    let request = single_request(&server).await;
    assert_eq!(header(&request, "Content-Type").as_deref(), Some("application/json"));
    assert_eq!(header(&request, "X-TXC-APIKEY").as_deref(), Some(API_KEY));
    assert!(header(&request, "X-TXC-PAYLOAD").is_none());
    assert!(header(&request, "X-TXC-SIGNATURE").is_none());
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_get_symbols_anonymous() {
    let server = MockServer::start().await;
    let body = r#"{
        "success": true,
        "message": "",
        "result": ["ETH_BTC", "BTC_USD"],
        "cache_time": 1574197000.65497,
        "current_time": 1574197000.655773
    }"#;

    Mock::given(method("GET"))
        .and(path("/public/symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = P2bClient::public_with_url(server.uri());
    let response = client.get_symbols().await.unwrap();

    assert_eq!(response.result, vec!["ETH_BTC".to_string(), "BTC_USD".to_string()]);
    assert_round_trip(body, &response);

    let request = single_request(&server).await;
    assert!(header(&request, "X-TXC-APIKEY").is_none());
    assert!(header(&request, "X-TXC-PAYLOAD").is_none());
    assert!(header(&request, "X-TXC-SIGNATURE").is_none());
}

#[tokio::test]
async fn test_get_symbols_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/symbols"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = P2bClient::public_with_url(server.uri());
    let err = client.get_symbols().await.unwrap_err();

    match err {
        P2bError::UnexpectedStatus { actual, body, .. } => {
            assert_eq!(actual, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop a listener so the port is free but closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = P2bClient::public_with_url(format!("http://127.0.0.1:{port}"));
    let err = client.get_products().await.unwrap_err();
    assert!(matches!(err, P2bError::HttpMiddleware(_)));
}
