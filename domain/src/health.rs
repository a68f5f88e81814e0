//! Dependency health probes backing the dashboard status endpoint.

use crate::gateway::gemini::GeminiClient;
use log::*;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use service::config::Config;

/// Key value shipped in example env files; treated as unconfigured.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

/// Per-dependency health, reported independently. `backend` is the process
/// answering the request and is healthy by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub backend: ComponentStatus,
    pub database: ComponentStatus,
    pub llm: ComponentStatus,
}

/// Probes the database and the generation service. Each dependency starts
/// unhealthy and must prove itself; probe failures are logged, never
/// propagated, and have no effect on any other endpoint.
pub async fn check(db: &DatabaseConnection, config: &Config) -> HealthStatus {
    let mut status = HealthStatus {
        backend: ComponentStatus::Healthy,
        database: ComponentStatus::Unhealthy,
        llm: ComponentStatus::Unhealthy,
    };

    match db.ping().await {
        Ok(()) => status.database = ComponentStatus::Healthy,
        Err(e) => warn!("Database health check failed: {e:?}"),
    }

    let api_key = config.gemini_api_key();
    if api_key.as_deref().is_some_and(|key| key != PLACEHOLDER_API_KEY) {
        match llm_ping(config).await {
            Ok(()) => status.llm = ComponentStatus::Healthy,
            Err(e) => warn!("LLM health check failed: {e:?}"),
        }
    }

    status
}

async fn llm_ping(config: &Config) -> Result<(), crate::error::Error> {
    GeminiClient::new(config)?.ping().await
}


#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod mock_tests {
    use super::*;
    use mockito::Server;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serial_test::serial;
    use std::env;

    #[tokio::test]
    #[serial]
    async fn llm_reports_healthy_when_the_generation_service_answers() {
        let mut server = Server::new_async().await;
        env::set_var("GEMINI_API_KEY", "test_api_key_123");
        env::set_var("GEMINI_BASE_URL", server.url());
        let config = Config::default();

        let _mock = server
            .mock("POST", "/models/gemini-2.0-flash:generateContent")
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "candidates": [{ "content": { "parts": [{ "text": "pong" }] } }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let status = check(&db, &config).await;

        assert_eq!(status.backend, ComponentStatus::Healthy);
        assert_eq!(status.llm, ComponentStatus::Healthy);
    }

    #[tokio::test]
    #[serial]
    async fn llm_stays_unhealthy_with_a_placeholder_api_key() {
        env::set_var("GEMINI_API_KEY", PLACEHOLDER_API_KEY);
        let config = Config::default();

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let status = check(&db, &config).await;

        assert_eq!(status.llm, ComponentStatus::Unhealthy);
    }
}
