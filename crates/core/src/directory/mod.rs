//! Directory module - the in-memory user registry and the logged-in user.

mod directory_service;

pub use directory_service::Directory;
