//! Account domain models.

use std::fmt;

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_constants::PASSWORD_MIN_LENGTH_EXCLUSIVE;
use crate::errors::ValidationError;

lazy_static! {
    static ref UPPERCASE_REGEX: Regex = Regex::new(r"[A-Z]").expect("Invalid regex pattern");
    static ref DIGIT_REGEX: Regex = Regex::new(r"[0-9]").expect("Invalid regex pattern");
    static ref SYMBOL_REGEX: Regex = Regex::new(r"[!@#$%^&*]").expect("Invalid regex pattern");
}

/// A single requirement of the sign-up password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PasswordRule {
    /// More than [`PASSWORD_MIN_LENGTH_EXCLUSIVE`] characters
    Length,
    /// At least one ASCII uppercase letter
    Uppercase,
    /// At least one ASCII digit
    Digit,
    /// At least one of [`super::PASSWORD_SYMBOLS`]
    Symbol,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 4] = [
        PasswordRule::Length,
        PasswordRule::Uppercase,
        PasswordRule::Digit,
        PasswordRule::Symbol,
    ];

    /// Returns true when `password` satisfies this rule.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::Length => password.chars().count() > PASSWORD_MIN_LENGTH_EXCLUSIVE,
            PasswordRule::Uppercase => UPPERCASE_REGEX.is_match(password),
            PasswordRule::Digit => DIGIT_REGEX.is_match(password),
            PasswordRule::Symbol => SYMBOL_REGEX.is_match(password),
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRule::Length => write!(
                f,
                "more than {} characters",
                PASSWORD_MIN_LENGTH_EXCLUSIVE
            ),
            PasswordRule::Uppercase => f.write_str("an uppercase letter"),
            PasswordRule::Digit => f.write_str("a number"),
            PasswordRule::Symbol => write!(f, "a special symbol ({})", super::PASSWORD_SYMBOLS),
        }
    }
}

/// Checks a candidate password against every [`PasswordRule`].
///
/// All unmet rules are reported together so the user can fix them in one go.
pub fn check_password_strength(password: &str) -> Result<(), ValidationError> {
    let failed: Vec<PasswordRule> = PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword(failed))
    }
}

/// A stored login secret.
///
/// Compared by exact match only. There is no hashing: GuardVault keeps
/// everything in memory for a single local session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// Presentation view of an account, produced by [`super::Account::details`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub username: String,
    pub balance: Decimal,
    pub emergency_fund: Decimal,
    pub goal_count: usize,
    pub saved_in_goals: Decimal,
    pub member_since: NaiveDateTime,
}

impl AccountDetails {
    /// Balance, emergency fund and goal savings combined.
    pub fn net_worth(&self) -> Decimal {
        self.balance
            .saturating_add(self.emergency_fund)
            .saturating_add(self.saved_in_goals)
    }
}

impl fmt::Display for AccountDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Username: {}", self.username)?;
        writeln!(f, "Balance: {}", self.balance)?;
        writeln!(f, "Emergency Fund: {}", self.emergency_fund)?;
        writeln!(
            f,
            "Goals: {} ({} saved)",
            self.goal_count, self.saved_in_goals
        )?;
        writeln!(f, "Net Worth: {}", self.net_worth())?;
        write!(
            f,
            "Member since: {}",
            self.member_since.format("%Y-%m-%d %H:%M")
        )
    }
}
