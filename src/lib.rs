//! Stateless predicates for validating user-entered credentials: email format,
//! password confirmation, strength classification, and character-class checks.

pub mod checks;
pub mod email;
pub mod errors;
pub mod strength;

pub use checks::{
    has_default_min_length, has_min_length, has_number, has_symbol, has_upper_case,
    passwords_match, secret_passwords_match, DEFAULT_MIN_LENGTH,
};
pub use email::is_valid_email;
pub use errors::{CredcheckError, CredcheckResult};
pub use strength::{password_strength, PasswordStrength};
