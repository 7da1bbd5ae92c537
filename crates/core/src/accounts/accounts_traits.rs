//! Account capability trait.
//!
//! Only one account kind exists today ([`crate::users::User`]), but the
//! directory and the console talk to it through this contract.

use super::accounts_model::AccountDetails;

/// Trait defining what every account holder exposes.
pub trait Account {
    /// The login name. Assigned once at creation and never changed.
    fn username(&self) -> &str;

    /// Checks a candidate secret against the stored credential.
    fn verify_credential(&self, candidate: &str) -> bool;

    /// Builds the presentation view shown by "View Account Details".
    fn details(&self) -> AccountDetails;
}
