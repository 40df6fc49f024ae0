//! # Email Verify API
//!
//! HTTP layer for the email verification service: request/response
//! DTOs, error translation, CORS, and the actix-web route handlers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
