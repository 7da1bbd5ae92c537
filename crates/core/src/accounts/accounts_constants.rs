/// A password must be strictly longer than this many characters.
pub const PASSWORD_MIN_LENGTH_EXCLUSIVE: usize = 8;

/// Symbols of which a password must contain at least one.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

