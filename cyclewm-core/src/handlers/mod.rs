pub mod command_handler;
pub mod display_event_handler;
mod linear_cycle_handler;
mod popup_handler;
mod screen_create_handler;
mod stacked_cycle_handler;
mod window_handler;

use super::command::{Command, Invocation};
use super::command_builder::CommandBuilder;
use super::config::Config;
use super::models::{Direction, Handle, Manager, Screen, Window, WindowHandle};
use super::DisplayEvent;

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::models::{BBox, MockHandle, Screen, Window, WindowHandle};

    pub fn window(id: MockHandle) -> Window<MockHandle> {
        Window::new(WindowHandle(id), Some(format!("window {id}")))
    }

    pub fn screen(id: usize) -> Screen {
        Screen::new(
            id,
            BBox {
                x: 1000 * id as i32,
                y: 0,
                width: 1000,
                height: 800,
            },
        )
    }

    pub fn history(state: &crate::State<MockHandle>) -> Vec<MockHandle> {
        state.focus_manager.history.iter().map(|h| h.0).collect()
    }
}
