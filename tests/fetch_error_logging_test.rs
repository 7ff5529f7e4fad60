//! Fetch failures keep only a summary in the returned error; the cause goes
//! to the `log` backend. Kept in its own binary because it installs the
//! process-wide logger.

mod support;

use log::{Level, LevelFilter, Log, Metadata, Record};
use showtrack_lib::modules::catalog::{CatalogClient, TvMazeClient};
use showtrack_lib::shared::CatalogConfig;
use showtrack_lib::AppError;
use std::sync::Mutex;
use std::time::Duration;
use support::http_stub::{HttpStub, StubResponse};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

#[tokio::test]
async fn test_fetch_failure_cause_reaches_log_backend() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let stub = HttpStub::start(vec![(
        "/shows?page=0",
        StubResponse::Json(503, "{}".to_string()),
    )])
    .await;
    let config = CatalogConfig::default()
        .with_base_url(stub.base_url.clone())
        .with_timeout(Duration::from_secs(1));
    let client = TvMazeClient::with_config(&config).unwrap();

    let err = client.get_shows(0).await.unwrap_err();
    assert_eq!(err, AppError::FetchError("Failed to fetch shows".to_string()));

    let records = RECORDS.lock().unwrap();
    let cause = records.iter().find(|(level, message)| {
        *level == Level::Error && message.starts_with("Failed to fetch shows: ")
    });

    let (_, message) = cause.unwrap_or_else(|| panic!("no error record in {:?}", *records));
    assert!(message.contains("TVmaze service unavailable"));
}
