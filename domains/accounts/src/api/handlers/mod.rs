//! HTTP handlers for the Accounts domain

pub mod accounts;
pub mod auth;
