use log::{debug, info, warn};

use crate::accounts::{check_password_strength, Account, Credential};
use crate::errors::{Error, ValidationError};
use crate::users::User;
use crate::Result;

/// Registry of every user signed up in this process, plus the current login.
///
/// Users are never removed, so the current user is tracked by index.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    current: Option<usize>,
}

impl Directory {
    /// Creates an empty directory with nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user after checking the password policy.
    ///
    /// Usernames are not required to be unique; [`Directory::log_in`] picks
    /// the first matching entry.
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(ValidationError::MissingField("username".to_string()).into());
        }
        check_password_strength(password)?;

        if self.users.iter().any(|user| user.username() == username) {
            debug!("Username '{}' is already taken; adding another entry", username);
        }
        self.users.push(User::new(username, Credential::new(password)));
        info!("Signed up user '{}'", username);
        Ok(())
    }

    /// Logs in the first user whose username and credential both match exactly.
    pub fn log_in(&mut self, username: &str, password: &str) -> Result<&User> {
        let index = self
            .users
            .iter()
            .position(|user| user.username() == username && user.verify_credential(password))
            .ok_or_else(|| {
                warn!("Failed login attempt for '{}'", username);
                Error::Authentication
            })?;

        self.current = Some(index);
        info!("User '{}' logged in", username);
        Ok(&self.users[index])
    }

    /// Clears the current user. Does nothing when nobody is logged in.
    pub fn log_out(&mut self) {
        if let Some(user) = self.current.take().and_then(|index| self.users.get(index)) {
            info!("User '{}' logged out", user.username());
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.and_then(|index| self.users.get(index))
    }

    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        match self.current {
            Some(index) => self.users.get_mut(index),
            None => None,
        }
    }

    pub fn require_current_user(&self) -> Result<&User> {
        self.current_user().ok_or(Error::NotLoggedIn)
    }

    pub fn require_current_user_mut(&mut self) -> Result<&mut User> {
        self.current_user_mut().ok_or(Error::NotLoggedIn)
    }

    /// All registered users in sign-up order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
