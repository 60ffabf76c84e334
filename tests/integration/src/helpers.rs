//! Test helpers for integration tests
//!
//! Builds the real router over in-memory stores and sends requests with
//! `tower::ServiceExt::oneshot`, so no sockets or external services are involved.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use live_api::{create_app, AppState};
use live_cache::MemoryCacheStore;
use live_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, JwtService,
    RedisConfig, ServerConfig,
};
use live_db::MemoryPrimaryStore;
use live_service::ServiceContextBuilder;
use serde_json::Value;
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret";

/// Application under test with handles on both stores
pub struct TestApp {
    router: Router,
    pub primary: Arc<MemoryPrimaryStore>,
    pub cache: Arc<MemoryCacheStore>,
    jwt: Arc<JwtService>,
}

/// Status and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Build the app over empty stores
    pub fn new() -> Result<Self> {
        let primary = Arc::new(MemoryPrimaryStore::new());
        let cache = Arc::new(MemoryCacheStore::new());
        let jwt = Arc::new(JwtService::new(TEST_SECRET, 3600));

        let context = ServiceContextBuilder::new()
            .primary(primary.clone())
            .cache_store(cache.clone())
            .jwt_service(jwt.clone())
            .build()?;
        let router = create_app(AppState::new(context, test_config()));

        Ok(Self {
            router,
            primary,
            cache,
            jwt,
        })
    }

    /// Access token for a user, as the external auth service would issue it
    pub fn token_for(&self, user_id: i64) -> Result<String> {
        Ok(self.jwt.issue_access_token(user_id)?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<TestResponse> {
        self.send(Method::GET, path, token, None).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post(&self, path: &str, token: Option<&str>, body: Option<Value>) -> Result<TestResponse> {
        self.send(Method::POST, path, token, body).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse { status, body })
    }

    /// Run the initialize entrypoint and assert it succeeded
    pub async fn initialize(&self) -> Result<()> {
        let response = self.post("/api/initialize", None, None).await?;
        response.expect_status(StatusCode::OK)?;
        Ok(())
    }
}

impl TestResponse {
    /// Fail with the body attached when the status differs
    pub fn expect_status(&self, expected: StatusCode) -> Result<&Value> {
        if self.status != expected {
            anyhow::bail!(
                "Expected status {}, got {}. Body: {}",
                expected,
                self.status,
                self.body
            );
        }
        Ok(&self.body)
    }

    /// Error code from an `{"error":{"code",...}}` body
    pub fn error_code(&self) -> Option<&str> {
        self.body["error"]["code"].as_str()
    }
}

/// Configuration for an in-process app; store URLs are never dialed
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "isupipe-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        redis: RedisConfig {
            url: "redis://unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry: 3600,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        bootstrap_on_startup: false,
    }
}
