//! The interactive menu loop.

use std::io::{BufRead, Write};

use guardvault_core::Directory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::commands;
use crate::config::Config;
use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::menu::{render_main_menu, render_user_menu, MainMenuChoice, UserMenuChoice};
use crate::style::Palette;

const CHOICE_PROMPT: &str = "Choose an option: ";
const INVALID_OPTION: &str = "Invalid option. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One console session: the user directory plus the terminal it talks to.
pub struct Session<R, W> {
    console: Console<R, W>,
    directory: Directory,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self::with_rng(config, input, output, StdRng::from_entropy())
    }

    /// Same as [`Session::new`] with a caller-supplied random source.
    pub fn with_rng(config: &Config, input: R, output: W, rng: StdRng) -> Self {
        Self {
            console: Console::new(input, output, Palette::new(config.color)),
            directory: Directory::new(),
            rng,
        }
    }

    pub fn into_parts(self) -> (Directory, W) {
        (self.directory, self.console.into_output())
    }

    /// Runs menus until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        info!("GuardVault session started");
        loop {
            let step = if self.directory.is_logged_in() {
                self.user_menu_step()
            } else {
                self.main_menu_step()
            };

            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Session ended by user");
                    return Ok(());
                }
                Err(CliError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn main_menu_step(&mut self) -> CliResult<Flow> {
        let menu = render_main_menu(self.console.palette());
        self.console.write_block(&menu)?;
        let input = self.console.prompt_line(CHOICE_PROMPT)?;

        let Some(choice) = MainMenuChoice::parse(&input) else {
            self.console.failure(INVALID_OPTION)?;
            return Ok(Flow::Continue);
        };
        debug!(?choice, "Main menu selection");

        match choice {
            MainMenuChoice::SignUp => commands::sign_up(&mut self.console, &mut self.directory)?,
            MainMenuChoice::LogIn => commands::log_in(&mut self.console, &mut self.directory)?,
            MainMenuChoice::Exit => {
                self.console.failure("Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn user_menu_step(&mut self) -> CliResult<Flow> {
        let menu = render_user_menu(self.console.palette());
        self.console.write_block(&menu)?;
        let input = self.console.prompt_line(CHOICE_PROMPT)?;

        let Some(choice) = UserMenuChoice::parse(&input) else {
            self.console.failure(INVALID_OPTION)?;
            return Ok(Flow::Continue);
        };
        debug!(?choice, "User menu selection");

        if choice == UserMenuChoice::LogOut {
            self.directory.log_out();
            self.console.success("Logged out successfully.")?;
            return Ok(Flow::Continue);
        }

        let console = &mut self.console;
        let user = self.directory.require_current_user_mut()?;
        match choice {
            UserMenuChoice::AddBalance => commands::add_balance(console, user)?,
            UserMenuChoice::WithdrawBalance => {
                commands::withdraw_balance(console, user, &mut self.rng)?
            }
            UserMenuChoice::ViewAccountDetails => commands::view_account_details(console, user)?,
            UserMenuChoice::ViewTransactionHistory => {
                commands::view_transaction_history(console, user)?
            }
            UserMenuChoice::CreateGoal => commands::create_goal(console, user)?,
            UserMenuChoice::ViewGoals => commands::view_goals(console, user)?,
            UserMenuChoice::DepositToGoal => commands::deposit_to_goal(console, user)?,
            UserMenuChoice::DeleteGoal => commands::delete_goal(console, user)?,
            UserMenuChoice::TransferBetweenGoals => {
                commands::transfer_between_goals(console, user)?
            }
            UserMenuChoice::AddEmergencyFund => commands::add_emergency_fund(console, user)?,
            UserMenuChoice::ViewEmergencyFund => commands::view_emergency_fund(console, user)?,
            UserMenuChoice::LogOut => {}
        }
        Ok(Flow::Continue)
    }
}
