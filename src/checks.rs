use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_MIN_LENGTH: usize = 8;

// Exactly these characters count as symbols; `-`, `_`, `+`, `=`, `[`,
// `]`, `;`, `'`, `/`, `\`, `~` and backtick are not in the set.
pub(crate) const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm && !password.is_empty()
}

pub fn secret_passwords_match(password: &SecretString, confirm: &SecretString) -> bool {
    passwords_match(password.expose_secret(), confirm.expose_secret())
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn has_default_min_length(value: &str) -> bool {
    has_min_length(value, DEFAULT_MIN_LENGTH)
}

pub fn has_number(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit())
}

pub fn has_symbol(value: &str) -> bool {
    value.chars().any(|ch| SYMBOLS.contains(ch))
}

pub fn has_upper_case(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_uppercase())
}
