use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marine_forecast::fetch::HttpClient;
use marine_forecast::infra::locations::JsonLocationStore;
use marine_forecast::services::{Location, NormalizedPoint, PointSource, Position};
use marine_forecast::{Forecast, ForecastError, StormGlass, StormGlassConfig};

const FIXTURE: &str = include_str!("fixtures/stormglass_weather_3_hours.json");

/// What the fake transport saw for one request.
#[derive(Debug, Clone)]
struct Seen {
    url: String,
    authorization: Option<String>,
}

/// Answers every request with a canned status and body.
#[derive(Clone)]
struct CannedClient {
    status: u16,
    body: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl CannedClient {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for CannedClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.seen.lock().unwrap().push(Seen {
            url: req.url().to_string(),
            authorization: req
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });

        let response = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body.clone())
            .unwrap();
        Ok(reqwest::Response::from(response))
    }
}

/// Fails every request at the transport level.
struct UnreachableClient(reqwest::Client);

#[async_trait]
impl HttpClient for UnreachableClient {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        *req.url_mut() = "http://127.0.0.1:1/weather/point".parse().unwrap();
        self.0.execute(req).await
    }
}

fn config() -> StormGlassConfig {
    StormGlassConfig::new("https://api.stormglass.io/v2", "fake-token")
}

fn manly() -> Location {
    Location {
        lat: -33.792726,
        lng: 151.289824,
        name: "Manly".to_string(),
        position: Position::E,
    }
}

fn constant_rating(_: &Location) -> fn(&NormalizedPoint) -> f64 {
    |_| 1.0
}

#[tokio::test]
async fn test_fetch_points_normalizes_fixture() {
    let transport = CannedClient::new(200, FIXTURE);
    let client = StormGlass::with_client(config(), transport.clone()).unwrap();

    let points = client.fetch_points(-33.792726, 151.289824).await.unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(
        points[0],
        NormalizedPoint {
            time: "2020-04-26T00:00:00+00:00".to_string(),
            wave_height: 0.47,
            wave_direction: 231.38,
            swell_direction: 64.26,
            swell_height: 0.15,
            swell_period: 3.89,
            wind_direction: 299.45,
            wind_speed: 100.0,
        }
    );

    let seen = transport.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].authorization.as_deref(), Some("fake-token"));
    assert!(
        seen[0]
            .url
            .starts_with("https://api.stormglass.io/v2/weather/point?lat=-33.792726&lng=151.289824")
    );
    assert!(seen[0].url.contains("source=noaa"));
}

#[tokio::test]
async fn test_fetch_points_drops_incomplete_hours() {
    let body = r#"{
        "hours": [
            {
                "time": "2020-04-26T00:00:00+00:00",
                "windDirection": { "noaa": 299.45 },
                "windSpeed": { "noaa": 100 }
            }
        ]
    }"#;
    let client = StormGlass::with_client(config(), CannedClient::new(200, body)).unwrap();

    let points = client.fetch_points(-33.792726, 151.289824).await.unwrap();

    assert!(points.is_empty());
}

#[tokio::test]
async fn test_error_status_is_response_error() {
    let body = r#"{"errors":["Rate Limit reached"]}"#;
    let client = StormGlass::with_client(config(), CannedClient::new(429, body)).unwrap();

    let err = client.fetch_points(-33.792726, 151.289824).await.unwrap_err();

    match err {
        ForecastError::ProviderResponse { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, r#"{"errors":["Rate Limit reached"]}"#);
        }
        other => panic!("expected ProviderResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_with_empty_body() {
    let client = StormGlass::with_client(config(), CannedClient::new(503, "")).unwrap();

    let err = client.fetch_points(0.0, 0.0).await.unwrap_err();

    match err {
        ForecastError::ProviderResponse { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, r#""""#);
        }
        other => panic!("expected ProviderResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_garbage_from_unused_source_keeps_hours() {
    let mut body: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    body["hours"][0]["waveHeight"]["sg"] = serde_json::json!("n/a");
    body["hours"][1]["windSpeed"]["icon"] = serde_json::json!({ "unexpected": true });
    let client =
        StormGlass::with_client(config(), CannedClient::new(200, &body.to_string())).unwrap();

    let points = client.fetch_points(-33.792726, 151.289824).await.unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].wave_height, 0.47);
    assert_eq!(points[1].wind_speed, 100.0);
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
    let client =
        StormGlass::with_client(config(), CannedClient::new(200, r#"{"data": []}"#)).unwrap();

    let err = client.fetch_points(0.0, 0.0).await.unwrap_err();

    assert!(matches!(err, ForecastError::ProviderRequest(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_request_error() {
    let client =
        StormGlass::with_client(config(), UnreachableClient(reqwest::Client::new())).unwrap();

    let err = client.fetch_points(0.0, 0.0).await.unwrap_err();

    assert!(matches!(err, ForecastError::ProviderRequest(_)));
    assert!(
        err.to_string()
            .starts_with("Unexpected error when trying to communicate to StormGlass")
    );
}

#[tokio::test]
async fn test_full_pipeline_for_owner() {
    let store = JsonLocationStore::from_json(
        r#"{ "owner-1": [
            { "lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E" }
        ] }"#,
    )
    .unwrap();
    let provider = StormGlass::with_client(config(), CannedClient::new(200, FIXTURE)).unwrap();
    let forecast = Forecast::new(provider, constant_rating);

    let buckets = forecast
        .process_forecast_for_owner(&store, "owner-1")
        .await
        .unwrap();

    let expected = serde_json::json!([
        {
            "time": "2020-04-26T00:00:00+00:00",
            "forecast": [{
                "lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E", "rating": 1.0,
                "swellDirection": 64.26, "swellHeight": 0.15, "swellPeriod": 3.89,
                "time": "2020-04-26T00:00:00+00:00",
                "waveDirection": 231.38, "waveHeight": 0.47,
                "windDirection": 299.45, "windSpeed": 100.0
            }]
        },
        {
            "time": "2020-04-26T01:00:00+00:00",
            "forecast": [{
                "lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E", "rating": 1.0,
                "swellDirection": 123.41, "swellHeight": 0.21, "swellPeriod": 3.67,
                "time": "2020-04-26T01:00:00+00:00",
                "waveDirection": 232.12, "waveHeight": 0.46,
                "windDirection": 310.48, "windSpeed": 100.0
            }]
        },
        {
            "time": "2020-04-26T02:00:00+00:00",
            "forecast": [{
                "lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E", "rating": 1.0,
                "swellDirection": 182.56, "swellHeight": 0.28, "swellPeriod": 3.44,
                "time": "2020-04-26T02:00:00+00:00",
                "waveDirection": 232.86, "waveHeight": 0.46,
                "windDirection": 321.5, "windSpeed": 100.0
            }]
        }
    ]);
    assert_eq!(serde_json::to_value(&buckets).unwrap(), expected);
}

#[tokio::test]
async fn test_provider_failure_fails_whole_run() {
    let provider = StormGlass::with_client(
        config(),
        CannedClient::new(500, r#"{"errors":["Internal"]}"#),
    )
    .unwrap();
    let forecast = Forecast::new(provider, constant_rating);

    let err = forecast
        .process_forecast_for_locations(&[manly(), manly()])
        .await
        .unwrap_err();

    assert!(matches!(err, ForecastError::ForecastProcessing(_)));
    assert!(err.to_string().contains("Code: 500"));
}

#[tokio::test]
async fn test_two_locations_rank_within_each_hour() {
    let provider = StormGlass::with_client(config(), CannedClient::new(200, FIXTURE)).unwrap();
    let by_facing = |location: &Location| {
        let score = if location.position == Position::E { 5.0 } else { 2.0 };
        move |_: &NormalizedPoint| score
    };
    let forecast = Forecast::new(provider, by_facing);
    let west = Location {
        name: "West".to_string(),
        position: Position::W,
        ..manly()
    };

    let buckets = forecast
        .process_forecast_for_locations(&[west, manly()])
        .await
        .unwrap();

    assert_eq!(buckets.len(), 3);
    for bucket in &buckets {
        let names: Vec<&str> = bucket.forecast.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Manly", "West"]);
    }
}
