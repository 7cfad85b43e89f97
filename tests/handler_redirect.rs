mod common;

#[tokio::test]
async fn test_redirect_success() {
    let (server, state) = common::create_test_server();

    let code = state
        .shortener
        .shorten("https://example.com/target")
        .await
        .unwrap();

    let response = server.get(&format!("/redirect/{code}")).await;

    assert_eq!(response.status_code(), 301);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_returns_normalized_url() {
    let (server, state) = common::create_test_server();

    let code = state.shortener.shorten("example.com/page").await.unwrap();

    let response = server.get(&format!("/redirect/{code}")).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "http://example.com/page");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _state) = common::create_test_server();

    let response = server.get("/redirect/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_missing_code() {
    let (server, _state) = common::create_test_server();

    let response = server.get("/redirect").await;

    response.assert_status_bad_request();
}
