//! Main-menu choices.

use crate::error::InvalidSelectionError;
use crate::payload::PayloadKind;

/// Main-menu number of the exit option.
pub const EXIT_CHOICE: u8 = 9;

/// A parsed main-menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate(PayloadKind),
    Exit,
}

impl MenuChoice {
    /// Parse `1`-`8` as a payload kind and `9` as exit.
    pub fn parse(input: &str) -> Result<Self, InvalidSelectionError> {
        let invalid = || InvalidSelectionError::new(input, EXIT_CHOICE as usize);
        let trimmed = input.trim();
        let number = (1..=EXIT_CHOICE)
            .find(|n| n.to_string() == trimmed)
            .ok_or_else(invalid)?;
        if number == EXIT_CHOICE {
            return Ok(MenuChoice::Exit);
        }
        PayloadKind::from_menu_number(number)
            .map(MenuChoice::Generate)
            .ok_or_else(invalid)
    }
}

/// Whether a repeat answer means "yes".
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}
