//! Menu choices and their on-screen rendering.

use crate::style::{Palette, Tone};

const INNER_WIDTH: usize = 38;

/// Options shown while nobody is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    SignUp,
    LogIn,
    Exit,
}

impl MainMenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::SignUp),
            2 => Some(Self::LogIn),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Options shown to a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuChoice {
    AddBalance,
    WithdrawBalance,
    ViewAccountDetails,
    ViewTransactionHistory,
    LogOut,
    CreateGoal,
    ViewGoals,
    DepositToGoal,
    DeleteGoal,
    TransferBetweenGoals,
    AddEmergencyFund,
    ViewEmergencyFund,
}

impl UserMenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u8>().ok()? {
            1 => Self::AddBalance,
            2 => Self::WithdrawBalance,
            3 => Self::ViewAccountDetails,
            4 => Self::ViewTransactionHistory,
            5 => Self::LogOut,
            6 => Self::CreateGoal,
            7 => Self::ViewGoals,
            8 => Self::DepositToGoal,
            9 => Self::DeleteGoal,
            10 => Self::TransferBetweenGoals,
            11 => Self::AddEmergencyFund,
            12 => Self::ViewEmergencyFund,
            _ => return None,
        };
        Some(choice)
    }
}

fn render_section(palette: Palette, title: &str, items: &[&str], out: &mut String) {
    let rule = "═".repeat(INNER_WIDTH);
    let mut line = |tone: Tone, text: String| {
        out.push_str(&palette.paint(tone, &text));
        out.push('\n');
    };

    line(Tone::Frame, format!("╔{}╗", rule));
    line(Tone::Title, format!("║{:^width$}║", title, width = INNER_WIDTH));
    line(Tone::Frame, format!("╠{}╣", rule));
    for item in items {
        line(
            Tone::Frame,
            format!("║ {:<width$}║", item, width = INNER_WIDTH - 1),
        );
    }
    line(Tone::Frame, format!("╚{}╝", rule));
}

pub fn render_main_menu(palette: Palette) -> String {
    let mut out = String::new();
    render_section(
        palette,
        "WELCOME TO GUARDVAULT",
        &["1. Sign Up", "2. Log In", "3. Exit"],
        &mut out,
    );
    out
}

pub fn render_user_menu(palette: Palette) -> String {
    let mut out = String::new();
    render_section(
        palette,
        "ACCOUNT MANAGEMENT",
        &[
            "1. Add Balance",
            "2. Withdraw Balance",
            "3. View Account Details",
            "4. View Transaction History",
            "5. Log Out",
        ],
        &mut out,
    );
    render_section(
        palette,
        "GOAL MANAGEMENT",
        &[
            "6. Set a New Goal",
            "7. View All Goals",
            "8. Deposit to Goal",
            "9. Delete Goal",
            "10. Transfer Between Goals",
        ],
        &mut out,
    );
    render_section(
        palette,
        "EMERGENCY FUND",
        &["11. Add to Emergency Fund", "12. View Emergency Fund"],
        &mut out,
    );
    out
}
