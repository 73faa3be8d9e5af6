//! End-to-end tests against the JSON API.

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use maidforheaven_web::calendar::FixedCalendar;
use maidforheaven_web::{app, AppState};

fn test_app() -> Router {
    // Sample schedule has one appointment: 2025-08-01, 4-8 PM
    app(AppState {
        calendar: Arc::new(FixedCalendar::sample_schedule()),
    })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn decimal_field(value: &Value, field: &str) -> Decimal {
    Decimal::from_str(value[field].as_str().expect("string decimal field")).unwrap()
}

#[tokio::test]
async fn flat_rate_quote_deep_weekly() {
    let (status, body) = post_json(
        test_app(),
        "/api/quote",
        json!({
            "service": "deep",
            "bedrooms": "2br",
            "bathrooms": "2",
            "frequency": "weekly"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&body, "hours"), dec!(8));
    assert_eq!(decimal_field(&body, "base_price"), dec!(415));
    assert_eq!(decimal_field(&body, "final_price"), dec!(290.50));
    assert_eq!(body["rate"], "Flat Rate");
    assert_eq!(body["cleaners"], 2);
}

#[tokio::test]
async fn flat_rate_quote_unknown_frequency_means_no_discount() {
    let (status, body) = post_json(
        test_app(),
        "/api/quote",
        json!({
            "service": "deep",
            "bedrooms": "studio",
            "bathrooms": "1",
            "frequency": "fortnightly"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&body, "final_price"), dec!(230));
    // A studio gets a single cleaner
    assert_eq!(body["cleaners"], 1);
}

#[tokio::test]
async fn flat_rate_quote_rejects_unknown_service() {
    let (status, body) = post_json(
        test_app(),
        "/api/quote",
        json!({
            "service": "window-washing",
            "bedrooms": "2br",
            "bathrooms": "1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "service");
}

#[tokio::test]
async fn hourly_quote_incomplete_form_is_null() {
    let (status, body) = post_json(
        test_app(),
        "/api/quote/hourly",
        json!({ "service": "standard" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["quote"].is_null());
}

#[tokio::test]
async fn hourly_quote_standard_three_bedroom() {
    let (status, body) = post_json(
        test_app(),
        "/api/quote/hourly",
        json!({
            "service": "standard",
            "home_size": "3br",
            "frequency": "monthly",
            "distance_miles": "20"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let quote = &body["quote"];
    assert_eq!(decimal_field(quote, "base_price"), dec!(140));
    assert_eq!(decimal_field(quote, "distance_surcharge"), dec!(15));
    assert_eq!(decimal_field(quote, "discount_amount"), dec!(7));
    assert_eq!(decimal_field(quote, "subtotal"), dec!(148));
    assert_eq!(quote["worth_it"], true);
}

#[tokio::test]
async fn conflict_check_flags_busy_evening() {
    // The 4-8 PM appointment overlaps the evening window [17, 20)
    let (status, body) = post_json(
        test_app(),
        "/api/calendar/check-conflicts",
        json!({ "date": "2025-08-01", "time_slot": "evening" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_conflict"], true);
    assert_eq!(body["conflicts"].as_array().unwrap().len(), 1);

    // 4-8 PM also touches the afternoon window, so only morning is open
    let alternatives: Vec<&str> = body["alternatives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["time_slot"].as_str().unwrap())
        .collect();
    assert_eq!(alternatives, vec!["morning"]);
}

#[tokio::test]
async fn conflict_check_open_day() {
    let (status, body) = post_json(
        test_app(),
        "/api/calendar/check-conflicts",
        json!({ "date": "2025-08-02", "time_slot": "morning" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_conflict"], false);
    assert_eq!(body["alternatives"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn conflict_check_invalid_slot_is_recoverable() {
    let (status, body) = post_json(
        test_app(),
        "/api/calendar/check-conflicts",
        json!({ "date": "2025-08-01", "time_slot": "midnight" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_conflict"], false);
    assert!(body["error"].as_str().unwrap().contains("midnight"));
}

#[tokio::test]
async fn alternatives_endpoint_lists_open_slots() {
    let (status, body) = get_json(test_app(), "/api/calendar/alternatives?date=2025-08-01").await;

    assert_eq!(status, StatusCode::OK);
    let alternatives: Vec<&str> = body["alternatives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["time_slot"].as_str().unwrap())
        .collect();
    assert_eq!(alternatives, vec!["morning"]);
}

fn complete_booking() -> Value {
    json!({
        "service": "deep",
        "bedrooms": "2br",
        "bathrooms": "2",
        "frequency": "weekly",
        "address": "123 Main St, Manhattan",
        "preferred_date": "2025-08-02",
        "preferred_time": "morning",
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "(555) 123-4567",
        "special_requests": "Please avoid strong scents"
    })
}

#[tokio::test]
async fn booking_submission_returns_confirmation() {
    let (status, body) = post_json(test_app(), "/api/book", complete_booking()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["confirmation_number"]
        .as_str()
        .unwrap()
        .starts_with("CLN-"));
    assert_eq!(body["service_name"], "Deep Cleaning");
    assert_eq!(decimal_field(&body["quote"], "final_price"), dec!(290.50));
    assert_eq!(body["scheduling"]["has_conflict"], false);
}

#[tokio::test]
async fn booking_submission_reports_conflicts_without_blocking() {
    let mut booking = complete_booking();
    booking["preferred_date"] = json!("2025-08-01");
    booking["preferred_time"] = json!("evening");

    let (status, body) = post_json(test_app(), "/api/book", booking).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scheduling"]["has_conflict"], true);
}

#[tokio::test]
async fn booking_submission_rejects_incomplete_form() {
    let mut booking = complete_booking();
    booking["email"] = json!("");
    booking.as_object_mut().unwrap().remove("address");

    let (status, body) = post_json(test_app(), "/api/book", booking).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let missing: Vec<&str> = body["missing"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap())
        .collect();
    assert_eq!(missing, vec!["Address", "Email"]);
}

#[tokio::test]
async fn booking_submission_rejects_bad_email() {
    let mut booking = complete_booking();
    booking["email"] = json!("not-an-email");

    let (status, body) = post_json(test_app(), "/api/book", booking).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn health_check() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
