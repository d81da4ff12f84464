use cyclewm_core::errors::{CycleError, Result};
use cyclewm_core::Command;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Command names as written in `config.toml`. The optional keybind value
/// carries their argument.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    FocusNextStacked,
    FocusPreviousStacked,
    FocusNext,
    FocusPrevious,
    Quit,
}

impl BaseCommand {
    /// # Errors
    ///
    /// Fails when the value of a linear command is not a positive step count.
    pub fn into_command(self, value: &str) -> Result<Command> {
        Ok(match self {
            BaseCommand::FocusNextStacked => Command::FocusNextStacked,
            BaseCommand::FocusPreviousStacked => Command::FocusPreviousStacked,
            BaseCommand::FocusNext => Command::FocusNext {
                count: parse_count(self, value)?,
            },
            BaseCommand::FocusPrevious => Command::FocusPrevious {
                count: parse_count(self, value)?,
            },
            BaseCommand::Quit => Command::Quit,
        })
    }

    #[must_use]
    pub const fn is_stacked(self) -> bool {
        matches!(
            self,
            BaseCommand::FocusNextStacked | BaseCommand::FocusPreviousStacked
        )
    }
}

fn parse_count(command: BaseCommand, value: &str) -> Result<usize> {
    if value.is_empty() {
        return Ok(1);
    }
    match usize::from_str(value) {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(CycleError::InvalidValue {
            command: format!("{command:?}"),
            value: value.to_owned(),
        }),
    }
}
