//! Accounts domain: sign-up, login, account management

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Account;

// Re-export repository types
pub use repository::{AccountRepository, AccountsRepositories};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
