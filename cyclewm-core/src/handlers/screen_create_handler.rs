use super::{Handle, Screen};
use crate::models::{DesktopId, PopupUpdate, ScreenId};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Register a screen, replacing an earlier one with the same id.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn screen_create_handler(&mut self, screen: Screen) -> bool {
        match self.screens.iter_mut().find(|s| s.id == screen.id) {
            Some(known) => *known = screen,
            None => self.screens.push(screen),
        }
        true
    }

    pub fn desktop_changed_handler(&mut self, screen: ScreenId, desktop: DesktopId) -> bool {
        let Some(known) = self.screens.iter_mut().find(|s| s.id == screen) else {
            tracing::warn!("Desktop change on unknown screen {}", screen);
            return false;
        };
        known.desktop = desktop;
        if self
            .focus_manager
            .session
            .as_ref()
            .is_some_and(|s| s.screen == screen)
        {
            self.focus_manager.request_popup(PopupUpdate::Rebuild);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::screen;
    use crate::Manager;

    #[test]
    fn creating_a_screen_twice_replaces_it() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(screen(0));
        let mut again = screen(0);
        again.desktop = 3;
        manager.state.screen_create_handler(again);
        assert_eq!(manager.state.screens.len(), 1);
        assert_eq!(manager.state.current_desktop(0), 3);
    }

    #[test]
    fn switching_desktops_changes_the_current_desktop() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(screen(0));
        manager.state.screen_create_handler(screen(1));
        assert!(manager.state.desktop_changed_handler(1, 2));
        assert_eq!(manager.state.current_desktop(0), 0);
        assert_eq!(manager.state.current_desktop(1), 2);
        assert!(!manager.state.desktop_changed_handler(5, 1));
    }
}
