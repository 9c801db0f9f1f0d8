use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checks::{has_default_min_length, has_number, has_symbol, has_upper_case};
use crate::errors::CredcheckError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordStrength {
    type Err = CredcheckError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "weak" => Ok(Self::Weak),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            other => Err(CredcheckError::UnknownStrengthLabel(other.to_owned())),
        }
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    // Length gates everything; class checks only run on passwords of 8+ chars.
    if !has_default_min_length(password) {
        return PasswordStrength::Weak;
    }

    let class_count = [
        has_upper_case(password),
        has_number(password),
        has_symbol(password),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    match class_count {
        0 => PasswordStrength::Weak,
        1 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::{password_strength, PasswordStrength};

    #[test]
    fn short_passwords_are_weak() {
        assert_eq!(password_strength("pass"), PasswordStrength::Weak);
        assert_eq!(password_strength("1234567"), PasswordStrength::Weak);
        assert_eq!(password_strength(""), PasswordStrength::Weak);
    }

    #[test]
    fn long_but_simple_passwords_are_weak() {
        assert_eq!(password_strength("password"), PasswordStrength::Weak);
    }

    #[test]
    fn one_character_class_is_medium() {
        assert_eq!(password_strength("Password"), PasswordStrength::Medium);
        assert_eq!(password_strength("password123"), PasswordStrength::Medium);
    }

    #[test]
    fn two_or_more_classes_are_strong() {
        assert_eq!(password_strength("Password123"), PasswordStrength::Strong);
        assert_eq!(password_strength("Pass@123"), PasswordStrength::Strong);
    }

    #[test]
    fn length_gate_counts_chars_not_bytes() {
        // 8 chars, zero qualifying classes: weak by score, not by length.
        assert_eq!(password_strength("éééééééé"), PasswordStrength::Weak);
    }

    #[test]
    fn labels_parse_and_render() {
        assert_eq!("medium".parse::<PasswordStrength>().ok(), Some(PasswordStrength::Medium));
        assert_eq!(PasswordStrength::Strong.to_string(), "strong");
        assert!("Strong".parse::<PasswordStrength>().is_err());
        assert!("".parse::<PasswordStrength>().is_err());
    }

    #[test]
    fn labels_serialize_lowercase() {
        let encoded = serde_json::to_string(&PasswordStrength::Weak).unwrap();
        assert_eq!(encoded, "\"weak\"");
        let decoded: PasswordStrength = serde_json::from_str("\"strong\"").unwrap();
        assert_eq!(decoded, PasswordStrength::Strong);
        assert!(serde_json::from_str::<PasswordStrength>("\"mighty\"").is_err());
    }
}
