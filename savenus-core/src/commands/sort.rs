use tracing::{debug, info};

use super::{Command, CommandError, CommandResult};
use crate::model::Model;
use crate::query::{FoodComparator, SortSpecError, SortSpecification};

/// Sorts the displayed foods by the given field/direction pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCommand {
    fields: Vec<String>,
}

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";
    pub const NO_ARGUMENTS_USAGE: &'static str = "Note you have entered in zero arguments:\n\
         Example Usage: sort PRICE ASC NAME DESC";
    pub const DUPLICATE_FIELD_USAGE: &'static str =
        "Note you have entered a duplicate field.";
    pub const MISSING_DIRECTION_USAGE: &'static str =
        "Note that you need to have a direction for each field.";
    pub const INVALID_DIRECTION_USAGE: &'static str = "Note you have entered an invalid direction:\n\
         You are only allowed to enter the following directions:\n\
         ASC for Ascending, DESC for descending.";
    pub const INVALID_FIELD_USAGE: &'static str = "Note you have entered an invalid field:\n\
         You are only allowed to enter the following fields:\n\
         NAME, PRICE, CATEGORY, DESCRIPTION, LOCATION, OPENING_HOURS, RESTRICTIONS";
    pub const MESSAGE_SUCCESS: &'static str =
        "You have successfully sorted the food items!";

    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Validate the stored tokens without touching any model.
    pub fn specification(&self) -> Result<SortSpecification, CommandError> {
        SortSpecification::parse(self.fields.as_slice()).map_err(|source| {
            CommandError::InvalidSort {
                message: usage_for(&source),
                source,
            }
        })
    }
}

impl Command for SortCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let spec = self.specification().inspect_err(|err| {
            debug!(error = ?err, "sort rejected");
        })?;
        info!(spec = %spec, "sorting displayed foods");
        model.apply_ordering(FoodComparator::new(spec));
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

fn usage_for(err: &SortSpecError) -> &'static str {
    match err {
        SortSpecError::EmptyInput => SortCommand::NO_ARGUMENTS_USAGE,
        SortSpecError::DuplicateField(_) => SortCommand::DUPLICATE_FIELD_USAGE,
        SortSpecError::MissingDirection(_) => {
            SortCommand::MISSING_DIRECTION_USAGE
        }
        SortSpecError::InvalidDirection(_) => {
            SortCommand::INVALID_DIRECTION_USAGE
        }
        SortSpecError::InvalidField(_) => SortCommand::INVALID_FIELD_USAGE,
    }
}
