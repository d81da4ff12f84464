//! The manager's mirror of the host's screens and windows.

use crate::config::Config;
use crate::models::{
    DesktopId, FocusManager, Handle, Screen, ScreenId, Window, WindowHandle,
};
use crate::utils::eligibility::find_eligible;
use crate::DisplayAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug)]
pub struct State<H: Handle> {
    #[serde(bound = "")]
    pub screens: Vec<Screen>,
    /// Every managed window, in the host's fixed client order.
    #[serde(bound = "")]
    pub windows: Vec<Window<H>>,
    #[serde(bound = "")]
    pub focus_manager: FocusManager<H>,
    #[serde(bound = "")]
    pub actions: VecDeque<DisplayAction<H>>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            screens: Vec::new(),
            windows: Vec::new(),
            focus_manager: FocusManager::new(config),
            actions: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn screen(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// The screen of the focused window, else the first known screen.
    #[must_use]
    pub fn active_screen(&self) -> ScreenId {
        self.focus_manager
            .focused
            .as_ref()
            .and_then(|h| self.find_window(h))
            .map(|w| w.screen)
            .or_else(|| self.screens.first().map(|s| s.id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn current_desktop(&self, screen: ScreenId) -> DesktopId {
        self.screen(screen)
            .or_else(|| self.screens.first())
            .map(|s| s.desktop)
            .unwrap_or_default()
    }

    pub fn clients(&self, screen: ScreenId) -> impl Iterator<Item = &Window<H>> {
        self.windows.iter().filter(move |w| w.screen == screen)
    }

    #[must_use]
    pub fn client_count(&self, screen: ScreenId) -> usize {
        self.clients(screen).count()
    }

    #[must_use]
    pub fn client_at(&self, screen: ScreenId, index: usize) -> Option<&Window<H>> {
        self.clients(screen).nth(index)
    }

    #[must_use]
    pub fn find_window(&self, handle: &WindowHandle<H>) -> Option<&Window<H>> {
        self.windows.iter().find(|w| &w.handle == handle)
    }

    #[must_use]
    pub fn is_eligible(&self, handle: &WindowHandle<H>, desktop: DesktopId) -> bool {
        find_eligible(&self.windows, handle, desktop).is_some()
    }

    pub(crate) fn request_focus(&mut self, handle: &WindowHandle<H>) {
        let act = DisplayAction::WindowTakeFocus {
            window: *handle,
            previous_window: self.focus_manager.focused,
        };
        self.actions.push_back(act);
    }

    pub(crate) fn move_to_top(&mut self, handle: &WindowHandle<H>) {
        self.actions.push_back(DisplayAction::MoveToTop(*handle));
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{BBox, Screen, Window, WindowHandle};
    use crate::Manager;

    #[test]
    fn clients_are_listed_per_screen_in_creation_order() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        for (id, screen) in [(1, 0), (2, 1), (3, 0)] {
            let mut window = Window::new(WindowHandle(id), None);
            window.screen = screen;
            state.windows.push(window);
        }
        assert_eq!(state.client_count(0), 2);
        assert_eq!(state.client_at(0, 1).map(|w| w.handle), Some(WindowHandle(3)));
        assert!(state.client_at(1, 1).is_none());
    }

    #[test]
    fn unknown_screens_fall_back_to_the_first_one() {
        let mut manager = Manager::new_test();
        let mut screen = Screen::new(4, BBox::default());
        screen.desktop = 2;
        manager.state.screens.push(screen);
        assert_eq!(manager.state.current_desktop(4), 2);
        assert_eq!(manager.state.current_desktop(9), 2);
        assert_eq!(manager.state.active_screen(), 4);
    }
}
