//! API integration tests
//!
//! `auth` and `validation` run against the full router with a lazily
//! connected pool and never reach the database. `workflow` needs a real
//! PostgreSQL at `TEST_DATABASE_URL` and is `#[ignore]`d by default:
//!
//! ```text
//! TEST_DATABASE_URL=postgres://... cargo test -p lifttrack-integration-tests -- --ignored
//! ```

#![allow(dead_code)]

mod auth;
mod common;
mod validation;
mod workflow;
