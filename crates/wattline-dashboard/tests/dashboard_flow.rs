use approx::assert_relative_eq;
use chrono::{Local, TimeZone};
use httpmock::prelude::*;
use wattline_client::{
    ClientConfig, FAILED_CALL_GUIDANCE, PredictClient, UNREACHABLE_GUIDANCE,
};
use wattline_dashboard::{Dashboard, FixedClock, View};
use wattline_types::Machine;

fn fixed_clock() -> FixedClock {
    FixedClock::new(Local.with_ymd_and_hms(2025, 3, 9, 14, 0, 0).unwrap())
}

fn dashboard_for(base_url: &str) -> Dashboard<FixedClock> {
    let config = ClientConfig::default().with_base_url(base_url);
    let client = PredictClient::new(config).expect("client should build");
    Dashboard::with_clock(client, fixed_clock())
}

#[tokio::test]
async fn high_forecast_shows_prediction_and_recommendation() {
    let server = MockServer::start_async().await;

    // The body is pinned by the fixed clock: 14:00 on the 9th.
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/predict")
                .json_body(serde_json::json!({
                    "machine": "Machine_B",
                    "hour": 14,
                    "day": 9
                }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "predicted_energy": 500.0 }));
        })
        .await;

    let mut dashboard = dashboard_for(&server.base_url());
    let state = dashboard.predict(Machine::B).await;

    mock.assert_async().await;
    assert!(!state.in_flight());
    assert_relative_eq!(state.prediction().unwrap(), 500.0);
    let rec = state.recommendation().expect("500 kWh exceeds threshold");
    assert!(rec.to_string().contains("Machine_B"));
    assert!(rec.to_string().contains("High energy usage"));
}

#[tokio::test]
async fn low_forecast_shows_prediction_without_recommendation() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/predict");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "predicted_energy": 200.0 }));
        })
        .await;

    let mut dashboard = dashboard_for(&server.base_url());
    let state = dashboard.predict(Machine::A).await;

    assert!(!state.in_flight());
    assert_relative_eq!(state.prediction().unwrap(), 200.0);
    assert!(state.recommendation().is_none());
}

#[tokio::test]
async fn unreachable_backend_shows_transport_guidance() {
    // Nothing listens on this port.
    let mut dashboard = dashboard_for("http://127.0.0.1:9");
    let state = dashboard.predict(Machine::C).await;

    assert!(!state.in_flight());
    assert_eq!(state.prediction(), None);
    assert_eq!(
        state.view(),
        &View::Failed {
            message: UNREACHABLE_GUIDANCE.to_string()
        }
    );
}

#[tokio::test]
async fn server_error_shows_generic_guidance() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/predict");
            then.status(500).body("boom");
        })
        .await;

    let mut dashboard = dashboard_for(&server.base_url());
    let state = dashboard.predict(Machine::A).await;

    assert!(!state.in_flight());
    assert_eq!(
        state.view(),
        &View::Failed {
            message: FAILED_CALL_GUIDANCE.to_string()
        }
    );
}

#[tokio::test]
async fn consecutive_predictions_replace_state() {
    let server = MockServer::start_async().await;

    let high = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/predict")
                .json_body_partial(r#"{"machine": "Machine_C"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "predicted_energy": 612.5 }));
        })
        .await;
    let low = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/predict")
                .json_body_partial(r#"{"machine": "Machine_A"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "predicted_energy": 88.0 }));
        })
        .await;

    let mut dashboard = dashboard_for(&server.base_url());

    let state = dashboard.predict(Machine::C).await;
    assert!(state.recommendation().is_some());

    let state = dashboard.predict(Machine::A).await;
    assert_relative_eq!(state.prediction().unwrap(), 88.0);
    assert!(state.recommendation().is_none());

    high.assert_async().await;
    low.assert_async().await;
}
