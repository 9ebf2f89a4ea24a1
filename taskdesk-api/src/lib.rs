//! # Taskdesk API Server Library
//!
//! HTTP layer for Taskdesk: authentication, projects and tasks over JSON.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: JSON/path/query extractors with uniform rejections
//! - `middleware`: Security headers and bearer-token authentication
//! - `routes`: API route handlers
//! - `telemetry`: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod telemetry;
