//! Prompter - line-oriented questions over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Asks one question at a time and reads one trimmed answer.
///
/// Generic over its streams so the menu can be driven by stdin/stdout in
/// production and by in-memory buffers in tests.
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Print `question`, then read one line.
    ///
    /// # Returns
    /// - `Ok(Some(answer))` with surrounding whitespace removed
    /// - `Ok(None)` at end of input
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for an optional field; blank answers become `None`.
    pub fn ask_optional(&mut self, question: &str) -> io::Result<Option<Option<String>>> {
        Ok(self
            .ask(question)?
            .map(|answer| Some(answer).filter(|a| !a.is_empty())))
    }

    /// Writer for screens and messages.
    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer_and_prints_question() {
        let mut prompter = Prompter::new(Cursor::new("  hello \n"), Vec::new());
        let answer = prompter.ask("Name: ").unwrap();
        assert_eq!(answer, Some("hello".to_string()));
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "Name: ");
    }

    #[test]
    fn test_ask_returns_none_at_eof() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("Name: ").unwrap(), None);
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut prompter = Prompter::new(Cursor::new("a\nb"), Vec::new());
        assert_eq!(prompter.ask("").unwrap(), Some("a".to_string()));
        assert_eq!(prompter.ask("").unwrap(), Some("b".to_string()));
        assert_eq!(prompter.ask("").unwrap(), None);
    }

    #[test]
    fn test_ask_optional_blank_is_none() {
        let mut prompter = Prompter::new(Cursor::new("\n  \nx\n"), Vec::new());
        assert_eq!(prompter.ask_optional("").unwrap(), Some(None));
        assert_eq!(prompter.ask_optional("").unwrap(), Some(None));
        assert_eq!(
            prompter.ask_optional("").unwrap(),
            Some(Some("x".to_string()))
        );
        assert_eq!(prompter.ask_optional("").unwrap(), None);
    }
}
