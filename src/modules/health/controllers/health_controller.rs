use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::core::response;

/// Health report returned under the `data` key
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    /// "up", "down" or "not_configured" when no MySQL pool is registered
    pub database: String,
}

/// GET /health
///
/// Pings the database when a pool is registered. Returns 503 if the ping
/// fails so load balancers stop routing to this instance.
pub async fn health_check(pool: Option<web::Data<MySqlPool>>) -> HttpResponse {
    let database = match pool {
        Some(pool) => match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
            Ok(_) => "up",
            Err(e) => {
                tracing::error!("Database health check failed: {}", e);
                "down"
            }
        },
        None => "not_configured",
    };

    let healthy = database != "down";
    let body = HealthStatus {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database: database.to_string(),
    };

    if healthy {
        response::ok("service healthy", body)
    } else {
        HttpResponse::build(StatusCode::SERVICE_UNAVAILABLE)
            .json(response::Envelope::new("service unhealthy", body))
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
