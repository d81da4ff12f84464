use super::{Command, Config, Direction, Handle, Invocation, Manager};
use crate::display_servers::DisplayServer;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run a bound command.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn command_handler(&mut self, command: Command, invocation: Invocation) -> bool {
        tracing::debug!("Running {:?} for {:?}", command, invocation);
        match command {
            Command::FocusNextStacked => self.state.focus_stacked(invocation, Direction::Forward),
            Command::FocusPreviousStacked => {
                self.state.focus_stacked(invocation, Direction::Backward)
            }
            Command::FocusNext { count } => {
                self.state
                    .focus_linear(invocation.screen, Direction::Forward, count)
            }
            Command::FocusPrevious { count } => {
                self.state
                    .focus_linear(invocation.screen, Direction::Backward, count)
            }
            Command::Quit => {
                self.quit();
                false
            }
        }
    }
}
