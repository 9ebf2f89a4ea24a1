/// Middleware modules for the API server
///
/// This module contains custom middleware for:
/// - Security headers
/// - Optional bearer-token authentication

pub mod auth;
pub mod security;
