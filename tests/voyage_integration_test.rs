use anyhow::Result;
use httpmock::prelude::*;
use maritime_assistant::config::{AppConfig, OpenWeatherConfig};
use maritime_assistant::{
    MaritimeAssistant, MaritimeError, OpenWeatherClient, PortRole, StaticPortLocator,
    Unconfigured, VoyageEstimator,
};
use std::time::Duration;

fn geocoding_mock<'a>(server: &'a MockServer, name: &str, lat: f64, lon: f64) -> httpmock::Mock<'a> {
    let name = name.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/geo/1.0/direct")
            .query_param("q", name.as_str());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"name": name, "lat": lat, "lon": lon}]));
    })
}

fn client_for(server: &MockServer) -> Result<OpenWeatherClient> {
    Ok(OpenWeatherClient::new(OpenWeatherConfig {
        api_key: Some("ow_test_key".to_string()),
        base_url: server.base_url(),
        ..OpenWeatherConfig::default()
    })?)
}

#[tokio::test]
async fn test_voyage_through_geocoding_service() -> Result<()> {
    let server = MockServer::start();
    let southampton = geocoding_mock(&server, "Southampton", 50.9097, -1.4044);
    let new_york = geocoding_mock(&server, "New York", 40.7128, -74.0060);

    let estimator = VoyageEstimator::new(client_for(&server)?);
    let result = estimator
        .estimate_voyage("Southampton", "New York", 15.0)
        .await?;

    southampton.assert();
    new_york.assert();
    assert!((result.distance_nm - 2973.25).abs() < 0.5);
    assert!((result.duration_hours - 198.2).abs() < 0.1);
    assert!((result.duration_days - 8.26).abs() < 0.01);
    Ok(())
}

#[tokio::test]
async fn test_unresolved_destination_is_named() -> Result<()> {
    let server = MockServer::start();
    geocoding_mock(&server, "Rotterdam", 51.9244, 4.4777);
    server.mock(|when, then| {
        when.method(GET)
            .path("/geo/1.0/direct")
            .query_param("q", "Atlantis");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let estimator = VoyageEstimator::new(client_for(&server)?);
    match estimator.estimate_voyage("Rotterdam", "Atlantis", 14.0).await {
        Err(MaritimeError::PortNotFound { which, name }) => {
            assert_eq!(which, PortRole::Destination);
            assert_eq!(name, "Atlantis");
        }
        other => panic!("expected PortNotFound, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_lookup_timeout_from_config() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geo/1.0/direct");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(serde_json::json!([]));
    });

    let config = AppConfig::from_toml_str("[voyage]\nlookup_timeout_seconds = 1\n")?;
    let estimator = VoyageEstimator::with_timeout(client_for(&server)?, config.voyage.lookup_timeout());

    let err = estimator
        .estimate_voyage("Southampton", "New York", 15.0)
        .await
        .unwrap_err();
    assert!(matches!(err, MaritimeError::Timeout { seconds: 1, .. }));
    Ok(())
}

#[tokio::test]
async fn test_offline_assistant_voyage() -> Result<()> {
    let assistant = MaritimeAssistant::new(
        Unconfigured::new("huggingface.api_key"),
        Unconfigured::new("openweather.api_key"),
        VoyageEstimator::new(StaticPortLocator::with_default_ports()),
    );

    let result = assistant.voyage("singapore", "Rotterdam", 20.0).await?;
    assert!((result.distance_nm - 5688.5).abs() < 0.5);
    assert_eq!(result.duration_hours, result.distance_nm / 20.0);

    let same = assistant.voyage("Hamburg", "hamburg", 12.0).await?;
    assert_eq!(same.distance_nm, 0.0);
    assert_eq!(same.duration_hours, 0.0);

    assert!(matches!(
        assistant.voyage("Hamburg", "Oslo", -5.0).await,
        Err(MaritimeError::InvalidSpeed { .. })
    ));

    assert!(matches!(
        assistant.ask("What is a knot?").await,
        Err(MaritimeError::MissingConfigError { .. })
    ));
    Ok(())
}
