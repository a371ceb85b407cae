use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" or "degraded"
    pub status: String,
    pub database: bool,
    /// Current server timestamp
    pub timestamp: String,
    pub version: String,
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}

/// Liveness and database reachability for load balancers and probes.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public. Answers 503 when the database cannot be reached.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let database = match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Health check could not reach the database: {}", e);
                false
            }
        };

        let body = Json(HealthCheckResponse {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        });

        if database {
            HealthResponse::Ok(body)
        } else {
            HealthResponse::Unavailable(body)
        }
    }
}
