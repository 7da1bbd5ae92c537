//! User domain model and every money-movement operation.

use chrono::{NaiveDateTime, Utc};
use log::{debug, warn};
use rand::Rng;
use rust_decimal::Decimal;

use super::transactions::{Transaction, TransactionLog};
use super::verification::{is_well_formed_security_code, pick_sender_name};
use crate::accounts::{Account, AccountDetails, Credential};
use crate::errors::{amount_too_large, ensure_positive, Error, ValidationError};
use crate::goals::{Goal, NewGoal, SaveOutcome};
use crate::Result;

/// Result of a successful withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub amount: Decimal,
    /// Cosmetic "sent by" name shown to the user
    pub sender: &'static str,
}

/// Result of a successful goal deposit.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDeposit {
    pub goal: String,
    /// Amount deducted from the balance
    pub amount: Decimal,
    /// What the goal actually absorbed
    pub outcome: SaveOutcome,
}

/// Result of a successful transfer between two goals.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalTransfer {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
    pub withdrawn: SaveOutcome,
    pub deposited: SaveOutcome,
}

/// An account holder with a balance, an emergency fund and savings goals.
///
/// Balance and emergency fund never become negative: every operation that
/// takes money out checks the available amount first and leaves the user
/// untouched when it rejects.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    credential: Credential,
    balance: Decimal,
    emergency_fund: Decimal,
    goals: Vec<Goal>,
    transactions: TransactionLog,
    created_at: NaiveDateTime,
}

impl User {
    /// Creates a user with zero balances, no goals and an empty history.
    pub fn new(username: impl Into<String>, credential: Credential) -> Self {
        Self {
            username: username.into(),
            credential,
            balance: Decimal::ZERO,
            emergency_fund: Decimal::ZERO,
            goals: Vec::new(),
            transactions: TransactionLog::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn emergency_fund(&self) -> Decimal {
        self.emergency_fund
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Goals in the order they were created.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// First goal whose name matches, ignoring case.
    pub fn find_goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.matches_name(name))
    }

    pub fn total_saved_in_goals(&self) -> Decimal {
        self.goals
            .iter()
            .map(Goal::saved_amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn transaction_history(&self) -> &TransactionLog {
        &self.transactions
    }

    fn goal_index(&self, name: &str) -> Result<usize> {
        self.goals
            .iter()
            .position(|goal| goal.matches_name(name))
            .ok_or_else(|| Error::GoalNotFound(name.trim().to_string()))
    }

    fn ensure_sufficient_balance(&self, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            return Err(Error::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Balance operations
    // ------------------------------------------------------------------

    pub fn add_balance(&mut self, amount: Decimal) -> Result<()> {
        ensure_positive("Amount", amount)?;
        self.balance = self.balance.checked_add(amount).ok_or_else(amount_too_large)?;
        debug!("User '{}' balance is now {}", self.username, self.balance);
        self.transactions.record(Transaction::BalanceAdded { amount });
        Ok(())
    }

    /// Checks that `amount` could be withdrawn right now, without changing anything.
    pub fn ensure_can_withdraw(&self, amount: Decimal) -> Result<()> {
        ensure_positive("Amount", amount)?;
        self.ensure_sufficient_balance(amount)
    }

    /// Withdraws `amount` once the security code has the right shape.
    ///
    /// The code check is cosmetic and the returned sender name is random.
    pub fn withdraw_balance<R: Rng + ?Sized>(
        &mut self,
        amount: Decimal,
        security_code: &str,
        rng: &mut R,
    ) -> Result<Withdrawal> {
        self.ensure_can_withdraw(amount)?;
        if !is_well_formed_security_code(security_code) {
            warn!("Rejected withdrawal for '{}': malformed security code", self.username);
            return Err(Error::VerificationFailed);
        }

        self.balance -= amount;
        debug!("User '{}' balance is now {}", self.username, self.balance);
        self.transactions.record(Transaction::BalanceWithdrawn { amount });

        Ok(Withdrawal {
            amount,
            sender: pick_sender_name(rng),
        })
    }

    /// Moves `amount` from the balance into the emergency fund.
    pub fn add_emergency_fund(&mut self, amount: Decimal) -> Result<()> {
        ensure_positive("Amount", amount)?;
        self.ensure_sufficient_balance(amount)?;

        let emergency_fund = self
            .emergency_fund
            .checked_add(amount)
            .ok_or_else(amount_too_large)?;

        self.balance -= amount;
        self.emergency_fund = emergency_fund;
        debug!(
            "User '{}' moved {} to the emergency fund (balance {}, fund {})",
            self.username, amount, self.balance, self.emergency_fund
        );
        self.transactions.record(Transaction::EmergencyFundAdded { amount });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Goal operations
    // ------------------------------------------------------------------

    /// Appends a new goal. Duplicate names are allowed; lookups find the first.
    pub fn add_goal(&mut self, new_goal: NewGoal) -> Result<&Goal> {
        let goal = Goal::new(new_goal)?;
        self.transactions.record(Transaction::GoalCreated {
            goal: goal.name().to_string(),
            target: goal.target_amount(),
        });

        let index = self.goals.len();
        self.goals.push(goal);
        Ok(&self.goals[index])
    }

    /// Saves `amount` into the named goal and deducts it from the balance.
    ///
    /// The full `amount` leaves the balance even when the goal clamps at its
    /// target; the clamped part is reported in [`GoalDeposit::outcome`].
    pub fn deposit_to_goal(&mut self, name: &str, amount: Decimal) -> Result<GoalDeposit> {
        ensure_positive("Amount", amount)?;
        let index = self.goal_index(name)?;
        self.ensure_sufficient_balance(amount)?;

        let goal = &mut self.goals[index];
        let outcome = goal.save(amount);
        if outcome.is_clamped() {
            warn!(
                "Goal '{}' capped at its target; {} of the deposit was not saved",
                goal.name(),
                outcome.dropped()
            );
        }
        let goal_name = goal.name().to_string();

        self.balance -= amount;
        self.transactions.record(Transaction::GoalDeposit {
            goal: goal_name.clone(),
            amount,
        });

        Ok(GoalDeposit {
            goal: goal_name,
            amount,
            outcome,
        })
    }

    /// Removes the named goal and refunds everything saved in it.
    ///
    /// The goal is kept when the refund would not fit in the balance.
    pub fn delete_goal(&mut self, name: &str) -> Result<Goal> {
        let index = self.goal_index(name)?;
        let refunded = self
            .balance
            .checked_add(self.goals[index].saved_amount())
            .ok_or_else(amount_too_large)?;

        let goal = self.goals.remove(index);
        self.balance = refunded;
        debug!(
            "User '{}' deleted goal '{}', refunded {}",
            self.username,
            goal.name(),
            goal.saved_amount()
        );
        Ok(goal)
    }

    /// Moves `amount` of savings from one goal to another.
    ///
    /// The target goal clamps at its own target; any excess is not returned.
    pub fn transfer_between_goals(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<GoalTransfer> {
        ensure_positive("Amount", amount)?;
        let source_index = self.goal_index(from)?;
        let target_index = self.goal_index(to)?;
        if source_index == target_index {
            return Err(ValidationError::InvalidInput(
                "Source and target goals must be different".to_string(),
            )
            .into());
        }

        let available = self.goals[source_index].saved_amount();
        if available < amount {
            return Err(Error::InsufficientGoalFunds {
                goal: self.goals[source_index].name().to_string(),
                requested: amount,
                available,
            });
        }

        let withdrawn = self.goals[source_index].save(-amount);
        let deposited = self.goals[target_index].save(amount);
        let from_name = self.goals[source_index].name().to_string();
        let to_name = self.goals[target_index].name().to_string();
        if deposited.is_clamped() {
            warn!(
                "Goal '{}' capped at its target; {} of the transfer from '{}' was not saved",
                to_name,
                deposited.dropped(),
                from_name
            );
        }

        self.transactions.record(Transaction::GoalTransfer {
            from: from_name.clone(),
            to: to_name.clone(),
            amount,
        });

        Ok(GoalTransfer {
            from: from_name,
            to: to_name,
            amount,
            withdrawn,
            deposited,
        })
    }
}

impl Account for User {
    fn username(&self) -> &str {
        &self.username
    }

    fn verify_credential(&self, candidate: &str) -> bool {
        self.credential.matches(candidate)
    }

    fn details(&self) -> AccountDetails {
        AccountDetails {
            username: self.username.clone(),
            balance: self.balance,
            emergency_fund: self.emergency_fund,
            goal_count: self.goals.len(),
            saved_in_goals: self.total_saved_in_goals(),
            member_since: self.created_at,
        }
    }
}
