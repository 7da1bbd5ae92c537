//! GuardVault Core - Domain entities and money-movement rules.
//!
//! This crate holds the in-memory model behind the GuardVault console:
//! users with a balance, an emergency fund and savings goals, and the
//! directory that tracks who is logged in. It performs no I/O.

pub mod accounts;
pub mod directory;
pub mod errors;
pub mod goals;
pub mod users;

pub use accounts::Account;
pub use directory::Directory;
pub use users::User;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
