#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use straycare_common::testing::MockClock;
use straycare_domain::Config;
use straycare_lib::{router, AppContext};
use tempfile::TempDir;
use tower::ServiceExt;

/// Saturday 2024-06-15 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Context over a temporary database; keeps the directory alive.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new(seed: bool) -> Self {
        Self::with_config(seed, |_| {})
    }

    pub fn with_config(seed: bool, adjust: impl FnOnce(&mut Config)) -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");

        let mut config = Config::default();
        config.database.path = temp_dir.path().join("api.db").display().to_string();
        config.database.pool_size = 2;
        config.dashboard.seed_sample_data = seed;
        adjust(&mut config);

        let ctx = AppContext::with_clock(config, Arc::new(MockClock::new(fixed_now())))
            .expect("context should initialise");

        Self { ctx: Arc::new(ctx), _temp_dir: temp_dir }
    }

    pub fn router(&self) -> Router {
        router(Arc::clone(&self.ctx))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("router should respond");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should read");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
