use std::io::IsTerminal;

use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::OverwritePrompt;

/// Terminal-backed prompt. Falls back to the default answer when stdin is
/// not a terminal, so scripted invocations never block on input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl OverwritePrompt for ConsolePrompt {
    fn ask(&self, question: &str, default: &str) -> Result<String, AppError> {
        if !std::io::stdin().is_terminal() {
            return Ok(default.to_string());
        }
        Input::new()
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map_err(|err| AppError::Prompt(err.to_string()))
    }
}
