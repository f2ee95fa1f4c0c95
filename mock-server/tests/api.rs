use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, MODES};
use serde_json::{Map, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- success ---

#[tokio::test]
async fn llh_echoes_requested_datums() {
    let resp = app()
        .oneshot(get(
            "/llh?lat=40&lon=-80&orthoHt=99&inDatum=nad83(1986)&outDatum=nad83(2011)",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Map<String, Value> = body_json(resp).await;
    assert_eq!(body["srcLat"], "40.0000000000");
    assert_eq!(body["srcDatum"], "NAD83(1986)");
    assert_eq!(body["destDatum"], "NAD83(2011)");
}

#[tokio::test]
async fn usng_returns_documented_payload() {
    let resp = app()
        .oneshot(get("/usng?usng=15SWB4788338641&inDatum=nad83(2011)&outDatum=nad83(NSRS2007)"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Map<String, Value> = body_json(resp).await;
    assert_eq!(body["utmZone"], "UTM Zone 17");
    assert_eq!(body["destDatum"], "NAD83(NSRS2007)");
}

#[tokio::test]
async fn utm_without_spc_zone_is_accepted() {
    let resp = app()
        .oneshot(get(
            "/utm?northing=4138641.144&easting=547883.655&utmZone=15&inDatum=NAD83(2011)&outDatum=NAD83(NSRS2007)",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Map<String, Value> = body_json(resp).await;
    assert_eq!(body["x"], "-217,687.297");
}

// --- errors ---

#[tokio::test]
async fn missing_service_field_returns_400() {
    let resp = app()
        .oneshot(get("/xyz?x=1&y=2&inDatum=a&outDatum=b"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "z is required");
}

#[tokio::test]
async fn simulated_timeout_returns_408_for_every_mode() {
    for mode in MODES {
        let resp = app()
            .oneshot(get(&format!("/{mode}?simulate=timeout")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT, "{mode}");
    }
}

#[tokio::test]
async fn simulated_error_returns_500() {
    let resp = app()
        .oneshot(get("/spc?simulate=error"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(resp).await;
    assert!(!body.is_empty());
}

#[tokio::test]
async fn unknown_mode_returns_404() {
    let resp = app().oneshot(get("/geo?lat=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
