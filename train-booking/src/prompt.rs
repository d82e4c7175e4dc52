//! Line-based passenger prompts.
//!
//! [`Prompter`] wraps any line source and any output sink, so booking can
//! run against stdin/stdout or against in-memory buffers in tests. Bad
//! input never escapes a prompt: the passenger is told what was wrong and
//! asked again until a usable answer arrives or the input ends.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::{Gender, PhoneNumber};
use crate::menu::Menu;

/// Shown when an answer is not a number.
pub const NOT_UNDERSTOOD: &str = "Sorry, I did not understand your input. Please try again: ";

/// Shown when a number is outside the allowed range.
pub const OUT_OF_RANGE: &str = "Sorry, your input is outside the allowed range. Please try again: ";

/// Shown when a phone number matches none of the accepted layouts.
pub const PHONE_RETRY: &str = "Please try again. Your phone number must be typed in one of the following formats:\n(XXX) XXX-XXXX, XXX-XXX-XXXX, or XXXXXXXXXX\n> ";

/// Shown when a gender is neither male nor female.
pub const GENDER_RETRY: &str = "Sorry, I could not understand your input. Please try again: ";

/// Errors that end a prompt without an answer.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input source ran out of lines
    #[error("input closed before an answer was given")]
    Closed,

    /// Reading or writing failed
    #[error("prompt I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reads answers from `R` and writes prompts to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is and flush, so prompts without a newline show up.
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with its line ending removed.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line is
    /// rejected by whichever parser reads it instead of ending the session.
    pub fn read_line(&mut self) -> Result<String, PromptError> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(PromptError::Closed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Show `prompt` and return the next line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Show `prompt`, then keep reading lines until `parse` accepts one.
    ///
    /// Each rejected line is answered with `retry`.
    pub fn ask_until<T, E: Display>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, PromptError> {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %line, error = %e, "Rejected answer");
                    self.say(retry)?;
                }
            }
        }
    }

    /// Show a menu and return the option the passenger numbers.
    ///
    /// The menu must not be empty, or no answer could ever be accepted.
    pub fn choose<'m, T: Display>(&mut self, menu: &'m Menu<T>) -> Result<&'m T, PromptError> {
        debug_assert!(!menu.is_empty());
        self.say(menu)?;
        self.read_int_checked(|n| menu.select(n).ok())
    }

    /// Read integers until `check` maps one to a value.
    fn read_int_checked<T>(&mut self, check: impl Fn(i64) -> Option<T>) -> Result<T, PromptError> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(n) => match check(n) {
                    Some(value) => return Ok(value),
                    None => {
                        debug!(input = n, "Answer out of range");
                        self.say(OUT_OF_RANGE)?;
                    }
                },
                Err(_) => {
                    debug!(input = %line, "Answer is not an integer");
                    self.say(NOT_UNDERSTOOD)?;
                }
            }
        }
    }

    /// Ask for a phone number until one of the accepted layouts is typed.
    pub fn ask_phone(&mut self, prompt: &str) -> Result<PhoneNumber, PromptError> {
        self.ask_until(prompt, PHONE_RETRY, PhoneNumber::parse)
    }

    /// Ask for a gender until "male" or "female" is typed.
    pub fn ask_gender(&mut self, prompt: &str) -> Result<Gender, PromptError> {
        self.ask_until(prompt, GENDER_RETRY, Gender::parse)
    }

    /// Ask for an age. Any non-negative integer is accepted.
    pub fn ask_age(&mut self, prompt: &str) -> Result<u32, PromptError> {
        self.ask_until(prompt, NOT_UNDERSTOOD, |s| s.trim().parse::<u32>())
    }

    /// Give back the wrapped input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn read_line_strips_line_endings() {
        let mut p = prompter("first\r\nsecond\nthird");
        assert_eq!(p.read_line().unwrap(), "first");
        assert_eq!(p.read_line().unwrap(), "second");
        assert_eq!(p.read_line().unwrap(), "third");
        assert!(matches!(p.read_line(), Err(PromptError::Closed)));
    }

    #[test]
    fn ask_writes_prompt() {
        let mut p = prompter("Ada\n");
        assert_eq!(p.ask("Please enter your Name: ").unwrap(), "Ada");
        assert_eq!(output(p), "Please enter your Name: ");
    }

    #[test]
    fn read_line_replaces_invalid_utf8() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\nok\n".to_vec()), Vec::new());
        assert_eq!(p.read_line().unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(p.read_line().unwrap(), "ok");
    }

    #[test]
    fn choose_reasks_on_bad_answers() {
        let menu = Menu::new("Pick:", vec!["a", "b", "c"]);
        let mut p = prompter("abc\n0\n4\n 2 \n");
        assert_eq!(p.choose(&menu).unwrap(), &"b");
        let out = output(p);
        assert_eq!(out.matches(NOT_UNDERSTOOD).count(), 1);
        assert_eq!(out.matches(OUT_OF_RANGE).count(), 2);
    }

    #[test]
    fn choose_reasks_on_invalid_utf8() {
        let menu = Menu::new("Pick:", vec!["a", "b"]);
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\n1\n".to_vec()), Vec::new());
        assert_eq!(p.choose(&menu).unwrap(), &"a");
        assert_eq!(output(p).matches(NOT_UNDERSTOOD).count(), 1);
    }

    #[test]
    fn phone_reasks_on_invalid_utf8() {
        let mut p = Prompter::new(
            Cursor::new(b"616\xff932\xfe1023\n6169321023\n".to_vec()),
            Vec::new(),
        );
        assert_eq!(p.ask_phone("Phone: ").unwrap().as_str(), "(616) 932-1023");
        assert_eq!(output(p).matches(PHONE_RETRY).count(), 1);
    }

    #[test]
    fn choose_returns_numbered_option() {
        let menu = Menu::new("Please select a destination:", vec!["Chicago", "Detroit"]);
        let mut p = prompter("3\n2\n");
        assert_eq!(p.choose(&menu).unwrap(), &"Detroit");
        let out = output(p);
        assert!(out.starts_with("Please select a destination:\n\t1: Chicago\n\t2: Detroit\n"));
        assert_eq!(out.matches(OUT_OF_RANGE).count(), 1);
    }

    #[test]
    fn choose_fails_when_input_ends() {
        let menu = Menu::new("Pick:", vec!["a"]);
        let mut p = prompter("9\n");
        assert!(matches!(p.choose(&menu), Err(PromptError::Closed)));
    }

    #[test]
    fn phone_reasks_until_valid() {
        let mut p = prompter("abc\n616 932 1023\n616-932-1023\n");
        let phone = p.ask_phone("Phone: ").unwrap();
        assert_eq!(phone.as_str(), "(616) 932-1023");
        assert_eq!(output(p).matches(PHONE_RETRY).count(), 2);
    }

    #[test]
    fn gender_reasks_until_valid() {
        let mut p = prompter("xyz\nFEMALE\n");
        assert_eq!(p.ask_gender("Gender: ").unwrap(), Gender::Female);
        assert_eq!(output(p).matches(GENDER_RETRY).count(), 1);
    }

    #[test]
    fn age_rejects_negative_and_text() {
        let mut p = prompter("-3\nold\n130\n");
        assert_eq!(p.ask_age("Age: ").unwrap(), 130);
        assert_eq!(output(p).matches(NOT_UNDERSTOOD).count(), 2);
    }
}
