//! Users module - the account holder, its transaction log and withdrawal checks.

mod transactions;
mod users_model;
mod verification;

#[cfg(test)]
mod users_model_tests;

pub use transactions::{Transaction, TransactionLog};
pub use users_model::{GoalDeposit, GoalTransfer, User, Withdrawal};
pub use verification::{
    is_well_formed_security_code, pick_sender_name, SECURITY_CODE_LENGTH, SENDER_NAMES,
};
