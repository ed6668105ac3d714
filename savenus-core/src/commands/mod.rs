//! User-facing commands executed against a [`Model`].

mod sort;

pub use sort::SortCommand;

use thiserror::Error;

use crate::menu::MenuError;
use crate::model::Model;
use crate::query::SortSpecError;

/// Feedback shown to the user after a command succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl std::fmt::Display for CommandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.feedback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The sort arguments were rejected; `message` is the text shown to
    /// the user.
    #[error("{message}")]
    InvalidSort {
        message: &'static str,
        #[source]
        source: SortSpecError,
    },
    #[error(transparent)]
    Menu(#[from] MenuError),
}

/// A command that either fully applies to the model or leaves it unchanged
pub trait Command {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}
