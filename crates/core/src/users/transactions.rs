//! Append-only, per-user transaction log.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// A single mutating operation recorded against a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transaction {
    BalanceAdded {
        amount: Decimal,
    },
    BalanceWithdrawn {
        amount: Decimal,
    },
    EmergencyFundAdded {
        amount: Decimal,
    },
    GoalCreated {
        goal: String,
        target: Decimal,
    },
    GoalDeposit {
        goal: String,
        amount: Decimal,
    },
    GoalTransfer {
        from: String,
        to: String,
        amount: Decimal,
    },
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::BalanceAdded { amount } => write!(f, "Added {} to balance.", amount),
            Transaction::BalanceWithdrawn { amount } => {
                write!(f, "Withdrew {} from balance.", amount)
            }
            Transaction::EmergencyFundAdded { amount } => {
                write!(f, "Added {} to Emergency Fund.", amount)
            }
            Transaction::GoalCreated { goal, target } => {
                write!(f, "Goal '{}' created with target {}", goal, target)
            }
            Transaction::GoalDeposit { goal, amount } => {
                write!(f, "Deposited {} to goal: {}", amount, goal)
            }
            Transaction::GoalTransfer { from, to, amount } => {
                write!(f, "Transferred {} from {} to {}", amount, from, to)
            }
        }
    }
}

/// Ordered history of [`Transaction`]s. Entries can only be appended.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TransactionLog(Vec<Transaction>);

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, transaction: Transaction) {
        log::debug!("Recording transaction: {}", transaction);
        self.0.push(transaction);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
