use super::Config;
use super::DisplayServer;
use crate::models::Handle;
use crate::{DisplayAction, DisplayEvent};
use std::collections::VecDeque;

/// Plays back queued events and records the actions it is asked to run.
#[derive(Clone, Debug)]
pub struct MockDisplayServer<H: Handle> {
    pub events: VecDeque<DisplayEvent<H>>,
    pub executed: Vec<DisplayAction<H>>,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Self {
        Self {
            events: VecDeque::new(),
            executed: vec![],
        }
    }

    // one event per wakeup, like a connection that is read a message at a time
    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        self.events.pop_front().into_iter().collect()
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        let reply = match &act {
            DisplayAction::WindowTakeFocus { window, .. } => {
                Some(DisplayEvent::WindowFocused(Some(*window)))
            }
            _ => None,
        };
        self.executed.push(act);
        reply
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(futures::future::ready(()))
    }

    fn flush(&self) {}
}
