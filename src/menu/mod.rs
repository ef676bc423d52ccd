//! Interactive menu: prompts, screens and the session state machine.

mod choice;
mod controller;
mod prompt;
pub mod screens;

pub use choice::{is_affirmative, MenuChoice, EXIT_CHOICE};
pub use controller::Controller;
pub use prompt::Prompter;
