//! Core error types for GuardVault.
//!
//! Every operation on the domain model reports failure through [`Error`].
//! Rejections leave the affected user, goal and directory state unchanged.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::accounts::PasswordRule;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the domain model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Goal '{goal}' has only {available} saved, cannot move {requested}")]
    InsufficientGoalFunds {
        goal: String,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Goal '{0}' not found")]
    GoalNotFound(String),

    #[error("Invalid username or password")]
    Authentication,

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Invalid security code. Withdrawal failed.")]
    VerificationFailed,
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Password too weak! Must have {}", describe_rules(.0))]
    WeakPassword(Vec<PasswordRule>),

    #[error("{field} must be greater than zero, got {amount}")]
    NonPositiveAmount { field: &'static str, amount: Decimal },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

fn describe_rules(rules: &[PasswordRule]) -> String {
    rules
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejects zero and negative amounts.
pub(crate) fn ensure_positive(field: &'static str, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { field, amount }.into());
    }
    Ok(())
}

/// Rejection for sums that would exceed the largest representable amount.
pub(crate) fn amount_too_large() -> Error {
    ValidationError::InvalidInput("Amount is too large".to_string()).into()
}
