use super::{CommandBuilder, Config, DisplayEvent, Handle, Invocation, Manager};
use crate::display_servers::DisplayServer;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        let changed = match event {
            DisplayEvent::ScreenCreate(s) => self.state.screen_create_handler(s),
            DisplayEvent::DesktopChanged(screen, desktop) => {
                self.state.desktop_changed_handler(screen, desktop)
            }
            DisplayEvent::WindowCreate(w) => self.state.window_created_handler(w),
            DisplayEvent::WindowDestroy(handle) => self.state.window_destroyed_handler(&handle),
            DisplayEvent::WindowFocused(handle) => self.state.window_focused_handler(handle),

            DisplayEvent::KeyCombo(screen, modmask, key) => {
                //look through the config and build a command if its defined in the config
                let build = CommandBuilder::new(&self.config);
                let invocation = Invocation {
                    screen,
                    modmask,
                    key,
                };
                build
                    .xkeyevent(modmask, key)
                    .map_or(false, |cmd| self.command_handler(cmd, invocation))
            }

            DisplayEvent::KeyRelease(screen, held) => self.state.key_release_handler(screen, held),

            DisplayEvent::SendCommand(command) => {
                let invocation = Invocation::for_screen(self.state.active_screen());
                self.command_handler(command, invocation)
            }
        };

        // popup work raised by the handler above
        self.state.update_popup();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{history, screen, window};
    use crate::models::WindowHandle;
    use crate::{Command, DisplayAction, DisplayEvent, Manager, ModMask};

    const TAB: u32 = 0xff09;

    #[test]
    fn key_combos_run_their_binding() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::ScreenCreate(screen(0)));
        for id in [3, 2, 1] {
            manager.display_event_handler(DisplayEvent::WindowCreate(window(id)));
            manager.display_event_handler(DisplayEvent::WindowFocused(Some(WindowHandle(id))));
        }
        assert_eq!(history(&manager.state), vec![1, 2, 3]);
        manager.state.actions.clear();

        manager.display_event_handler(DisplayEvent::KeyCombo(0, ModMask::Alt, TAB));
        assert!(manager.state.focus_manager.is_cycling());
        assert_eq!(manager.state.focus_manager.cursor(), Some(&WindowHandle(2)));
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::ShowPopupList(_))));
        manager.display_event_handler(DisplayEvent::KeyRelease(0, ModMask::Zero));
        assert!(!manager.state.focus_manager.is_cycling());
        assert_eq!(history(&manager.state), vec![2, 1, 3]);
    }

    #[test]
    fn unbound_combos_do_nothing() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::WindowCreate(window(1)));
        manager.state.actions.clear();
        assert!(!manager.display_event_handler(DisplayEvent::KeyCombo(0, ModMask::Control, TAB)));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn sent_commands_use_the_active_screen() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::ScreenCreate(screen(0)));
        manager.display_event_handler(DisplayEvent::WindowCreate(window(1)));
        manager.display_event_handler(DisplayEvent::WindowCreate(window(2)));
        manager.state.actions.clear();

        manager.display_event_handler(DisplayEvent::SendCommand(Command::FocusNext { count: 1 }));
        assert!(matches!(
            manager.state.actions.front(),
            Some(DisplayAction::WindowTakeFocus { window: WindowHandle(1), .. })
        ));
    }
}
