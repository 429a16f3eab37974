//! Password strength meter shown under the signup password field.

use serde::Serialize;

/// Highest score `password_strength` can return.
pub const MAX_SCORE: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub score: u8,
    /// `None` for an empty password.
    pub level: Option<StrengthLevel>,
}

/// Score a password: one point each for length >= 8, length >= 12, a
/// lowercase letter, an uppercase letter, a digit and a symbol.
#[must_use]
pub fn password_strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength { score: 0, level: None };
    }

    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().fold(0u8, |acc, hit| acc + u8::from(*hit));

    let level = match score {
        0..=2 => StrengthLevel::Weak,
        3..=4 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };
    Strength { score, level: Some(level) }
}

#[cfg(test)]
#[path = "strength_test.rs"]
mod tests;
