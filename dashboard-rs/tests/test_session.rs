use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use activity_rs::adapters::ActivityMock;
use activity_rs::{ActivityBands, ActivityService, PredictionSource};
use chart_rs::Size;
use dash_common::Sample;
use dashboard_rs::session::INITIAL_STATUS;
use dashboard_rs::source::{MockSensorSource, MockSourceConfig};
use dashboard_rs::{
    connect_session, fetch_history, DashboardConfig, DashboardError, DashboardSession,
    SensorKind, SensorReading,
};

#[tokio::test]
async fn test_session_against_live_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "activity": "Walking",
            "confidence": 0.9
        })))
        .mount(&mock_server)
        .await;

    let config = DashboardConfig {
        base_url: mock_server.uri(),
        poll_period_millis: 50,
        ..DashboardConfig::default()
    };
    let mut session = connect_session(config).unwrap();
    session.on_reading(&SensorReading::new(
        SensorKind::Accelerometer,
        Sample::from_axes(1.0, 2.0, 12.0),
    ));
    assert_eq!(session.status(), INITIAL_STATUS);

    session.start();
    tokio::time::sleep(Duration::from_millis(300)).await;
    session.stop().await;

    assert_eq!(session.status(), "Walking");
    let prediction = session.prediction().unwrap();
    assert_eq!(prediction.source, PredictionSource::Remote);
    assert_eq!(prediction.confidence, Some(0.9));

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.len() >= 2);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"acc_x": 1.0, "acc_y": 2.0, "acc_z": 12.0}));
}

#[tokio::test]
async fn test_session_offline_uses_fallbacks() {
    let config = DashboardConfig {
        // Nothing listens on the discard port.
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_secs: 1,
        bands: ActivityBands::sitting(),
        ..DashboardConfig::default()
    };
    let mut session = connect_session(config).unwrap();
    session.on_reading(&SensorReading::new(
        SensorKind::Accelerometer,
        Sample::from_axes(0.0, 0.0, 9.81),
    ));

    session.start();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    session.stop().await;

    let view = session.view(Size::new(320.0, 160.0));
    assert_eq!(view.status, "Sitting");
    assert!(view.is_fallback());

    let history = fetch_history(session.service()).await;
    assert_eq!(history.len(), 5);
}

#[tokio::test]
async fn test_mock_source_feeds_session() {
    let source = Arc::new(
        MockSensorSource::new(MockSourceConfig {
            period_millis: 10,
            ..MockSourceConfig::default()
        })
        .unwrap(),
    );
    let service = Arc::new(ActivityService::new(
        ActivityMock::scripted("Demo", &["Running"], vec![]),
        ActivityBands::default(),
    ));
    let mut config = DashboardConfig::default();
    config.gyro.history = 5;
    let mut session = DashboardSession::new(config, service);
    session.attach(source.publisher());

    let emitter = source.start();
    tokio::time::sleep(Duration::from_millis(200)).await;
    emitter.shutdown().await;
    session.detach(source.publisher());

    assert!(session.snapshot(SensorKind::Accelerometer).len() > 5);
    assert_eq!(session.snapshot(SensorKind::Gyroscope).len(), 5);

    let view = session.view(Size::new(100.0, 100.0));
    let z = view.accel.chart.series("Z").unwrap();
    assert!(z.points.len() > 5);
    assert_eq!(z.segments.len(), z.points.len() - 1);
    assert_eq!(view.gyro.chart.series("X").unwrap().points.len(), 5);
    assert!(view.accel.gauge.progress > 0.0);
}

#[test]
fn test_connect_session_rejects_invalid_config() {
    let config = DashboardConfig {
        poll_period_millis: 0,
        ..DashboardConfig::default()
    };
    assert!(matches!(
        connect_session(config),
        Err(DashboardError::InvalidConfig(_))
    ));
}
