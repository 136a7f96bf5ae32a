//! Line-oriented prompting for the interactive menu
//!
//! Every `ask_*` helper re-prompts until the answer validates. Closing the
//! input stream surfaces as `TrackerError::EndOfInput`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Amount;
use crate::validation::{capitalize, parse_amount, parse_category, parse_date, parse_goal_name};

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output
    pub fn say(&mut self, message: impl Display) -> TrackerResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// A line that is not valid UTF-8 is rejected and asked for again.
    pub fn read_line(&mut self, prompt: &str) -> TrackerResult<String> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut bytes = Vec::new();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                return Err(TrackerError::EndOfInput);
            }

            match String::from_utf8(bytes) {
                Ok(line) => return Ok(line.trim().to_string()),
                Err(_) => self.say("Input is not valid text. Please try again.")?,
            }
        }
    }

    fn ask_until_valid<T>(
        &mut self,
        prompt: &str,
        retry_hint: &str,
        parse: impl Fn(&str) -> TrackerResult<T>,
    ) -> TrackerResult<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(format!("{}. {}", err, retry_hint))?,
            }
        }
    }

    pub fn ask_category(&mut self, prompt: &str) -> TrackerResult<String> {
        self.ask_until_valid(prompt, "Please enter a valid category.", parse_category)
    }

    pub fn ask_goal(&mut self, prompt: &str) -> TrackerResult<String> {
        self.ask_until_valid(prompt, "Please enter a valid financial goal.", parse_goal_name)
    }

    pub fn ask_amount(&mut self, prompt: &str) -> TrackerResult<Amount> {
        self.ask_until_valid(prompt, "Please enter a valid amount.", parse_amount)
    }

    pub fn ask_date(&mut self, prompt: &str) -> TrackerResult<NaiveDate> {
        self.ask_until_valid(prompt, "Please try again.", parse_date)
    }

    /// List `options` and keep asking until one of them is entered
    ///
    /// Answers are capitalized before comparison. Returns `None` without
    /// prompting when there is nothing to choose from.
    pub fn choose(&mut self, noun: &str, options: &[String]) -> TrackerResult<Option<String>> {
        if options.is_empty() {
            self.say(format!("No {}s available.", noun))?;
            return Ok(None);
        }

        self.say(format!("Available {}s:", noun))?;
        for option in options {
            self.say(format!("- {}", option))?;
        }

        let prompt = format!("Enter a {} from the list above: ", noun);
        loop {
            let answer = capitalize(&self.read_line(&prompt)?);
            if options.contains(&answer) {
                return Ok(Some(answer));
            }
            self.say(format!("Invalid {}. Please choose from the list.", noun))?;
        }
    }
}
