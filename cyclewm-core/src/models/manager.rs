use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
    pub(crate) quit_requested: bool,
}

impl<H: Handle, C, SERVER> Manager<H, C, SERVER>
where
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);
        Self::with_display_server(config, display_server)
    }

    /// Use a display server that was set up elsewhere, such as a replay of a
    /// recorded session.
    pub fn with_display_server(config: C, display_server: SERVER) -> Self {
        Self {
            state: State::new(&config),
            config,
            display_server,
            quit_requested: false,
        }
    }

    /// Leave the event loop after the current batch of events.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::tests::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test() -> Self {
        Self::new(crate::config::tests::TestConfig::default())
    }

    pub fn new_test_with(config: crate::config::tests::TestConfig) -> Self {
        Self::new(config)
    }
}
