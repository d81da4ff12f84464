//! A display server that plays a recorded or hand written event script.
//!
//! Scripts hold one JSON encoded [`DisplayEvent`] per line. Blank lines and
//! lines starting with `#` are skipped. The server answers focus requests
//! the way a real host would and ends the run with `Quit` once the script
//! is exhausted.

use cyclewm_core::errors::Result;
use cyclewm_core::models::Handle;
use cyclewm_core::{Command, Config, DisplayAction, DisplayEvent, DisplayServer, Manager};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// Window ids as they appear in scripts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ReplayHandle(pub u32);
impl Handle for ReplayHandle {}

/// A manager driven by a script.
pub type ReplayManager = Manager<ReplayHandle, crate::Config, ReplayDisplayServer>;

#[derive(Debug, Default)]
pub struct ReplayDisplayServer {
    events: VecDeque<DisplayEvent<ReplayHandle>>,
    transcript: Vec<DisplayAction<ReplayHandle>>,
    finished: bool,
}

impl ReplayDisplayServer {
    /// # Errors
    ///
    /// Fails on the first line that is not a valid event.
    pub fn from_script(script: &str) -> Result<Self> {
        let mut events = VecDeque::new();
        for (number, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let event = serde_json::from_str(line).map_err(|err| {
                tracing::error!("Script line {}: {}", number + 1, err);
                err
            })?;
            events.push_back(event);
        }
        Ok(Self {
            events,
            ..Self::default()
        })
    }

    /// # Errors
    ///
    /// Fails when the file cannot be read or holds an invalid event.
    pub fn from_path(path: &Path) -> Result<Self> {
        let script = std::fs::read_to_string(path)?;
        Self::from_script(&script)
    }

    /// Every action the manager asked for, in order.
    #[must_use]
    pub fn transcript(&self) -> &[DisplayAction<ReplayHandle>] {
        &self.transcript
    }
}

impl DisplayServer<ReplayHandle> for ReplayDisplayServer {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<ReplayHandle>> {
        if let Some(event) = self.events.pop_front() {
            return vec![event];
        }
        if self.finished {
            return vec![];
        }
        self.finished = true;
        vec![DisplayEvent::SendCommand(Command::Quit)]
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<ReplayHandle>,
    ) -> Option<DisplayEvent<ReplayHandle>> {
        tracing::debug!("Action: {:?}", act);
        let reply = match &act {
            DisplayAction::WindowTakeFocus { window, .. } => {
                Some(DisplayEvent::WindowFocused(Some(*window)))
            }
            _ => None,
        };
        self.transcript.push(act);
        reply
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        Box::pin(futures::future::ready(()))
    }

    fn flush(&self) {}
}
