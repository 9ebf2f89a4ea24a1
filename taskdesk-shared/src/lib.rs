//! # Taskdesk Shared Library
//!
//! Types, persistence and authentication primitives used by the Taskdesk
//! API server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing and JWT issuance/validation
//! - `db`: Connection pool lifecycle and migrations
//! - `models`: Users, projects and tasks with their SQL

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Taskdesk shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
