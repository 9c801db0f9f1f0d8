use std::sync::LazyLock;

use regex::Regex;

// Permissive syntactic check only: local part, `@`, then a domain containing
// at least one `.`, with no whitespace or extra `@` restrictions beyond the
// character classes. Deliverability is out of scope.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
