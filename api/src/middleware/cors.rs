//! CORS configuration for the verification endpoints.
//!
//! The registration form that drives this service is a browser page,
//! so the API must answer cross-origin requests. Development is
//! permissive; production restricts origins to the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current
/// environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: "production" enables the restrictive settings
/// - `ALLOWED_ORIGINS`: comma-separated origin list (production only)
/// - `CORS_MAX_AGE`: preflight cache lifetime (default 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age);

    for origin in allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
    {
        cors = cors.allowed_origin(origin);
    }

    cors
}
