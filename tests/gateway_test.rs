//! Integration tests of the production gateway against a real HTTP
//! server (wiremock): endpoint URLs, JSON decoding, and the failure
//! contract.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use postboard::adapters::ReqwestHttpClient;
use postboard::api::ApiClient;
use postboard::traits::DataGateway;

fn client(server: &MockServer) -> ApiClient<ReqwestHttpClient> {
    ApiClient::with_base_url(ReqwestHttpClient::new(), server.uri())
}

fn sample_user() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

#[tokio::test]
async fn fetch_users_decodes_full_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_user()])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).fetch_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[0].address.city, "Gwenborough");
    assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");
}

#[tokio::test]
async fn fetch_posts_sends_user_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 3, "id": 21, "title": "t1", "body": "b1" },
            { "userId": 3, "id": 22, "title": "t2", "body": "b2" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client(&server).fetch_posts_by_user(3).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.user_id == 3));
}

#[tokio::test]
async fn fetch_comments_sends_post_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("postId", "21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "postId": 21, "id": 201, "name": "n", "email": "e@x.y", "body": "b" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let comments = client(&server).fetch_comments_by_post(21).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].post_id, 21);
}

#[tokio::test]
async fn non_2xx_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).fetch_users().await.unwrap_err();
    assert_eq!(err.status, 500);
    assert!(err.has_response());
}

#[tokio::test]
async fn undecodable_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_users().await.unwrap_err();
    assert_eq!(err.status, 0);
}

#[tokio::test]
async fn unreachable_server_is_a_status_zero_error() {
    // No server on this port.
    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), "http://127.0.0.1:59999");
    let err = api.fetch_users().await.unwrap_err();
    assert_eq!(err.status, 0);
    assert!(!err.has_response());
}
