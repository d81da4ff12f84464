use super::{Direction, Handle, Window, WindowHandle};
use crate::models::PopupUpdate;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Start tracking a new window.
    /// Returns true if changes need to be rendered.
    pub fn window_created_handler(&mut self, window: Window<H>) -> bool {
        //don't add the window if the manager already knows about it
        if self.find_window(&window.handle).is_some() {
            tracing::debug!("Ignoring duplicate create for {:?}", window.handle);
            return false;
        }
        let handle = window.handle;
        self.windows.push(window);

        let focus_manager = &mut self.focus_manager;
        match focus_manager.cursor().copied() {
            // keep the new window in reach of the cycle in progress
            Some(cursor) => focus_manager.history.insert_after(&cursor, handle),
            None => focus_manager.history.insert_new(handle),
        };
        focus_manager.request_popup(PopupUpdate::Rebuild);
        true
    }

    /// Forget a window. A cycle that currently sits on it moves on first.
    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let is_cursor = self.focus_manager.cursor() == Some(handle);
        if is_cursor && !self.advance_cycle(Direction::Forward, Some(handle)) {
            if let Some(session) = &mut self.focus_manager.session {
                session.cursor = None;
            }
        }

        let known = self.focus_manager.history.remove(handle);
        let start_size = self.windows.len();
        self.windows.retain(|w| &w.handle != handle);
        if self.focus_manager.focused.as_ref() == Some(handle) {
            self.focus_manager.focused = None;
        }
        self.focus_manager.request_popup(PopupUpdate::Rebuild);
        known || start_size != self.windows.len()
    }

    /// The host moved input focus. Outside a cycle the window moves to the
    /// front of the history; during a cycle it only becomes the cursor.
    pub fn window_focused_handler(&mut self, handle: Option<WindowHandle<H>>) -> bool {
        let Some(handle) = handle else {
            self.focus_manager.focused = None;
            return self.focus_manager.fallback && self.focus_fallback();
        };
        if self.find_window(&handle).is_none() {
            tracing::debug!("Focus moved to unmanaged window {:?}", handle);
            self.focus_manager.focused = None;
            return false;
        }

        let focus_manager = &mut self.focus_manager;
        focus_manager.focused = Some(handle);
        match &mut focus_manager.session {
            Some(session) => {
                session.cursor = Some(handle);
                focus_manager.request_popup(PopupUpdate::Highlight);
            }
            None => {
                focus_manager.history.move_to_front(&handle);
            }
        }
        true
    }

    /// Nothing holds focus: hand it to the most recent eligible window on the
    /// active desktop.
    fn focus_fallback(&mut self) -> bool {
        let screen = self
            .focus_manager
            .session
            .as_ref()
            .map_or_else(|| self.active_screen(), |s| s.screen);
        let desktop = self.current_desktop(screen);

        if let Some(session) = &mut self.focus_manager.session {
            session.cursor = None;
            self.focus_manager.request_popup(PopupUpdate::Highlight);
        }

        let target = self
            .focus_manager
            .history
            .iter()
            .find(|h| self.is_eligible(h, desktop))
            .copied();
        match target {
            Some(handle) => {
                tracing::info!("Falling back to {:?}", handle);
                self.request_focus(&handle);
                true
            }
            None => {
                tracing::debug!("Nothing to fall back to on desktop {}", desktop);
                false
            }
        }
    }
}
