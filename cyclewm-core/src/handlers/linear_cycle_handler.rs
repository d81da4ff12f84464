use super::{Direction, Handle, WindowHandle};
use crate::models::ScreenId;
use crate::state::State;
use crate::utils::eligibility::is_eligible;

impl<H: Handle> State<H> {
    /// Step through the screen's clients in their fixed order, `count` at a
    /// time, wrapping at the ends.
    ///
    /// Returns true if changes need to be rendered.
    pub fn focus_linear(&mut self, screen: ScreenId, direction: Direction, count: usize) -> bool {
        let desktop = self.current_desktop(screen);
        let clients: Vec<_> = self.clients(screen).collect();
        let len = clients.len();
        if len == 0 {
            return false;
        }

        let focused = self.focus_manager.focused.as_ref();
        let start = match (clients.iter().position(|w| Some(&w.handle) == focused), direction) {
            (Some(i), Direction::Forward) => (i + 1) % len,
            (Some(i), Direction::Backward) => (i + len - 1) % len,
            (None, _) => 0,
        };
        let stride = count % len;

        let mut index = start;
        let target: Option<WindowHandle<H>> = loop {
            if is_eligible(clients[index], desktop) {
                break Some(clients[index].handle);
            }
            index = match direction {
                Direction::Forward => (index + stride) % len,
                Direction::Backward => (index + len - stride) % len,
            };
            if index == start {
                break None;
            }
        };

        let Some(handle) = target else {
            tracing::debug!("No client to focus on screen {}", screen);
            return false;
        };
        self.request_focus(&handle);
        if self.focus_manager.cycle_raise {
            self.move_to_top(&handle);
        }
        true
    }
}
