//! Withdrawal "security verification".
//!
//! This is a flavor step, not a security control: the code is only checked
//! for shape (eleven ASCII digits) and the sender name is picked at random.

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

/// Number of digits a security code must have.
pub const SECURITY_CODE_LENGTH: usize = 11;

/// Names a withdrawal may be reported as "sent by".
pub const SENDER_NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

lazy_static! {
    /// Format: exactly eleven ASCII digits, e.g. a phone number
    static ref SECURITY_CODE_REGEX: Regex =
        Regex::new(&format!(r"^[0-9]{{{}}}$", SECURITY_CODE_LENGTH))
            .expect("Invalid regex pattern");
}

/// Returns true when `code` has the expected shape.
pub fn is_well_formed_security_code(code: &str) -> bool {
    SECURITY_CODE_REGEX.is_match(code.trim())
}

/// Picks the display name a withdrawal is "sent by".
pub fn pick_sender_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SENDER_NAMES.choose(rng).copied().unwrap_or(SENDER_NAMES[0])
}
