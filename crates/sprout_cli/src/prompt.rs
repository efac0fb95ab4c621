//! Terminal prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

/// Result type alias for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Validation hook for text answers; `Err` carries the message shown to the user.
pub type Validator = fn(&str) -> Result<(), String>;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error("No choices to select from: {0}")]
    NoChoices(String),
}

/// Asks the user questions.
///
/// Implementations block until an acceptable answer is given. Text answers
/// that fail validation are asked again.
pub trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, message: &str, items: &[String]) -> PromptResult<usize>;

    /// Free text answer, with an optional default and validation.
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> PromptResult<String>;

    /// Yes/no answer.
    fn confirm(&mut self, message: &str, default: bool) -> PromptResult<bool>;
}

/// Interactive prompter backed by dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> PromptResult<usize> {
        if items.is_empty() {
            return Err(PromptError::NoChoices(message.to_string()));
        }

        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> PromptResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);

        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validate {
            input = input.validate_with(move |answer: &String| validate(answer));
        }

        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> PromptResult<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
