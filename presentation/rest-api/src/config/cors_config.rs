use poem::middleware::Cors;

use super::{env_vars, lookup};

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// CORS for the storefront and kitchen screens.
///
/// CORS_ALLOWED_ORIGINS: comma-separated origins (default: local dev servers)
pub fn init_cors() -> Cors {
    let origins = allowed_origins(env_vars);

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true)
}

fn allowed_origins(vars: impl Fn(&str) -> Option<String>) -> Vec<String> {
    lookup(&vars, "CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
