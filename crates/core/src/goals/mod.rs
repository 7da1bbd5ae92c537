//! Goals module - savings goal model and its clamp-on-save rule.

mod goals_model;


pub use goals_model::{Goal, NewGoal, SaveOutcome};
