//! Combatant name normalisation and validation

use crate::error::CombatantError;

/// Minimum name length in characters
pub const NAME_MIN_LENGTH: usize = 1;

/// Maximum name length in characters
pub const NAME_MAX_LENGTH: usize = 30;

/// Normalise a raw name to title case and check its length
///
/// Surrounding whitespace is dropped and runs of inner whitespace collapse
/// to a single space. Each word keeps an uppercase first letter and
/// lowercase remainder: `"  aRIA   the bold "` becomes `"Aria The Bold"`.
pub fn normalize_name(raw: &str) -> Result<String, CombatantError> {
    let name = raw
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    let length = name.chars().count();
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
        return Err(CombatantError::InvalidName { length });
    }

    Ok(name)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
