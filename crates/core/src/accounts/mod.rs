//! Accounts module - the account capability, credentials and password policy.

mod accounts_constants;
mod accounts_model;
mod accounts_traits;


// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_model::{check_password_strength, AccountDetails, Credential, PasswordRule};
pub use accounts_traits::Account;
