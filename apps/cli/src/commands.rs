//! One handler per menu entry.
//!
//! Handlers prompt for their inputs, call into the core model and print the
//! outcome. Domain rejections are printed and swallowed; only console
//! failures propagate.

use std::io::{BufRead, Write};

use guardvault_core::accounts::Account;
use guardvault_core::goals::NewGoal;
use guardvault_core::{Directory, User};
use rand::Rng;
use tracing::debug;

use crate::console::Console;
use crate::error::CliResult;
use crate::style::Tone;

pub fn sign_up<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    directory: &mut Directory,
) -> CliResult<()> {
    let username = console.prompt_line("Enter a username: ")?;
    let password = console.prompt_line("Enter a password: ")?;

    match directory.sign_up(&username, &password) {
        Ok(()) => console.success("Account created successfully!"),
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn log_in<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    directory: &mut Directory,
) -> CliResult<()> {
    let username = console.prompt_line("Enter your username: ")?;
    let password = console.prompt_line("Enter your password: ")?;

    match directory.log_in(&username, &password) {
        Ok(_) => console.success("Logged in successfully!"),
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn add_balance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &mut User,
) -> CliResult<()> {
    let amount = console.prompt_decimal("Enter amount to add: ")?;
    match user.add_balance(amount) {
        Ok(()) => console.success(&format!("Added {} to balance.", amount)),
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn withdraw_balance<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    user: &mut User,
    rng: &mut G,
) -> CliResult<()> {
    let amount = console.prompt_decimal("Enter amount to withdraw: ")?;
    if let Err(err) = user.ensure_can_withdraw(amount) {
        return console.failure(&err.to_string());
    }

    let code = console.prompt_line("Enter a phone number for security verification: ")?;
    match user.withdraw_balance(amount, &code, rng) {
        Ok(withdrawal) => console.success(&format!(
            "You have withdrawn {}. Sent by: {}",
            withdrawal.amount, withdrawal.sender
        )),
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn view_account_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> CliResult<()> {
    let details = user.details().to_string();
    for line in details.lines() {
        console.say(Tone::Frame, line)?;
    }
    Ok(())
}

pub fn view_transaction_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> CliResult<()> {
    let history = user.transaction_history();
    if history.is_empty() {
        return console.failure("No transactions yet.");
    }

    console.success("Transaction History:")?;
    for transaction in history {
        console.plain(&transaction.to_string())?;
    }
    Ok(())
}

pub fn create_goal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &mut User,
) -> CliResult<()> {
    let name = console.prompt_line("Enter goal name: ")?;
    let target = console.prompt_decimal("Enter target amount: ")?;

    match user.add_goal(NewGoal::new(name, target)) {
        Ok(goal) => {
            let message = format!("Goal added: {}", goal.name());
            console.success(&message)
        }
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn view_goals<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &User) -> CliResult<()> {
    if user.goals().is_empty() {
        return console.failure("No goals set.");
    }

    console.success("Your Goals:")?;
    for goal in user.goals() {
        console.plain(&goal.to_string())?;
    }
    Ok(())
}

pub fn deposit_to_goal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &mut User,
) -> CliResult<()> {
    let name = console.prompt_line("Enter goal name: ")?;
    let amount = console.prompt_decimal("Enter amount to deposit: ")?;

    match user.deposit_to_goal(&name, amount) {
        Ok(deposit) => {
            if deposit.outcome.is_clamped() {
                console.failure("Exceeds target amount. Adjusting saved amount to the target.")?;
            }
            console.success(&format!(
                "Deposited {} to goal: {}",
                deposit.amount, deposit.goal
            ))
        }
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn delete_goal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &mut User,
) -> CliResult<()> {
    let name = console.prompt_line("Enter goal name to delete: ")?;

    match user.delete_goal(&name) {
        Ok(goal) => console.success(&format!(
            "Goal '{}' has been deleted, and {} has been returned to your balance.",
            goal.name(),
            goal.saved_amount()
        )),
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn transfer_between_goals<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &mut User,
) -> CliResult<()> {
    let from = console.prompt_line("Enter source goal name: ")?;
    let to = console.prompt_line("Enter target goal name: ")?;
    let amount = console.prompt_decimal("Enter amount to transfer: ")?;

    match user.transfer_between_goals(&from, &to, amount) {
        Ok(transfer) => {
            if transfer.deposited.is_clamped() {
                console.failure("Exceeds target amount. Adjusting saved amount to the target.")?;
            }
            console.success(&format!(
                "Transferred {} from {} to {}",
                transfer.amount, transfer.from, transfer.to
            ))
        }
        Err(err) => {
            debug!("Transfer rejected: {}", err);
            console.failure(&format!("Transfer failed. {}", err))
        }
    }
}

pub fn add_emergency_fund<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &mut User,
) -> CliResult<()> {
    let amount = console.prompt_decimal("Enter amount to add to Emergency Fund: ")?;
    match user.add_emergency_fund(amount) {
        Ok(()) => console.success(&format!("Added {} to Emergency Fund.", amount)),
        Err(err) => console.failure(&err.to_string()),
    }
}

pub fn view_emergency_fund<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> CliResult<()> {
    console.success(&format!("Emergency Fund: {}", user.emergency_fund()))
}
