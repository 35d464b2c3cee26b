use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, UPLOAD_ROOT};

/// First portfolio image at the default tile width
fn first_tile_path() -> String {
    format!(
        "{}f_auto,q_auto,dpr_auto,w_640/v1755647936/PIX08085_1_qqqwtm.jpg",
        UPLOAD_ROOT
    )
}

#[tokio::test]
async fn image_is_fetched_once_then_served_from_cache() {
    let app = TestApp::spawn().await;
    let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3];

    Mock::given(path(first_tile_path()))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(bytes.clone(), "image/jpeg"))
        .expect(1)
        .mount(&app.cdn_server)
        .await;

    for _ in 0..2 {
        let res = app
            .page("images/1?w=640")
            .await
            .expect("Failed to execute request");

        assert_eq!(StatusCode::OK, res.status());
        assert_eq!("image/jpeg", res.headers()[CONTENT_TYPE]);
        assert_eq!(bytes, res.bytes().await.unwrap().to_vec());
    }
}

#[tokio::test]
async fn width_defaults_to_tile_width() {
    let app = TestApp::spawn().await;

    Mock::given(path(first_tile_path()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1, 2, 3], "image/webp"))
        .expect(1)
        .mount(&app.cdn_server)
        .await;

    let res = app.page("images/1").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert_eq!("image/webp", res.headers()[CONTENT_TYPE]);
}

#[tokio::test]
async fn unknown_image_is_not_found() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.cdn_server)
        .await;

    let res = app.page("images/999").await.expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
}

#[tokio::test]
async fn unsupported_width_is_rejected() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.cdn_server)
        .await;

    let res = app
        .page("images/1?w=123")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
}

#[tokio::test]
async fn cdn_failure_is_a_bad_gateway_and_not_cached() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&app.cdn_server)
        .await;

    for _ in 0..2 {
        let res = app
            .page("images/2?w=320")
            .await
            .expect("Failed to execute request");

        assert_eq!(StatusCode::BAD_GATEWAY, res.status());
    }
}
