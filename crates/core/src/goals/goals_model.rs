//! Goals domain models.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_positive, ValidationError};
use crate::Result;

/// Domain model representing a savings goal.
///
/// `saved_amount` always stays within `[0, target_amount]`; the only way to
/// change it is [`Goal::save`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: String,
    name: String,
    target_amount: Decimal,
    saved_amount: Decimal,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
}

impl NewGoal {
    pub fn new(name: impl Into<String>, target_amount: Decimal) -> Self {
        Self {
            name: name.into(),
            target_amount,
        }
    }

    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )
            .into());
        }
        ensure_positive("Target amount", self.target_amount)
    }
}

/// What actually happened when a delta was applied to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    /// The delta the caller asked for
    pub requested: Decimal,
    /// The change in `saved_amount` after clamping
    pub applied: Decimal,
}

impl SaveOutcome {
    pub fn is_clamped(&self) -> bool {
        self.requested != self.applied
    }

    /// Portion of the requested delta that was dropped by the clamp.
    pub fn dropped(&self) -> Decimal {
        (self.requested - self.applied).abs()
    }
}

impl Goal {
    /// Creates a goal with nothing saved yet.
    pub fn new(new_goal: NewGoal) -> Result<Self> {
        new_goal.validate()?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name.trim().to_string(),
            target_amount: new_goal.target_amount,
            saved_amount: Decimal::ZERO,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_amount(&self) -> Decimal {
        self.target_amount
    }

    pub fn saved_amount(&self) -> Decimal {
        self.saved_amount
    }

    /// Case-insensitive name comparison used by every lookup.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Applies `delta` (negative to take money out), clamping the result to
    /// `[0, target_amount]` instead of rejecting it.
    pub fn save(&mut self, delta: Decimal) -> SaveOutcome {
        let before = self.saved_amount;

        self.saved_amount = match before.checked_add(delta) {
            // Out of range for Decimal, so certainly past one of the bounds
            None if delta.is_sign_negative() => Decimal::ZERO,
            None => self.target_amount,
            Some(proposed) => self.clamp(proposed),
        };

        SaveOutcome {
            requested: delta,
            applied: self.saved_amount - before,
        }
    }

    fn clamp(&self, proposed: Decimal) -> Decimal {
        if proposed > self.target_amount {
            self.target_amount
        } else if proposed < Decimal::ZERO {
            Decimal::ZERO
        } else {
            proposed
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.saved_amount >= self.target_amount
    }

    pub fn remaining(&self) -> Decimal {
        self.target_amount - self.saved_amount
    }

    /// Saved share of the target, in percent, rounded to two decimals.
    pub fn progress_percent(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.saved_amount / self.target_amount * dec!(100))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Goal: {} | Target: {} | Saved: {} ({}%)",
            self.name,
            self.target_amount,
            self.saved_amount,
            self.progress_percent()
        )
    }
}
