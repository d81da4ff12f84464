use crate::config::Config;
use crate::models::Handle;
use crate::{DisplayServer, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run until a `Quit` command has been handled.
    pub async fn start_event_loop(&mut self) {
        //main event loop
        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();

            tokio::select! {
                _ = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.display_event_handler(event);
                    }
                }
            }

            //preform any actions requested by the handler
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }

            if self.quit_requested {
                tracing::info!("Leaving the event loop");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_helpers::{history, screen, window};
    use crate::models::WindowHandle;
    use crate::{Command, DisplayAction, DisplayEvent, Manager, ModMask};

    #[tokio::test]
    async fn a_scripted_session_runs_to_the_end() {
        let mut manager = Manager::new_test();
        let events = [
            DisplayEvent::ScreenCreate(screen(0)),
            DisplayEvent::WindowCreate(window(1)),
            DisplayEvent::WindowCreate(window(2)),
            DisplayEvent::WindowCreate(window(3)),
            DisplayEvent::WindowFocused(Some(WindowHandle(1))),
            DisplayEvent::KeyCombo(0, ModMask::Alt, 0xff09),
            DisplayEvent::KeyCombo(0, ModMask::Alt, 0xff09),
            DisplayEvent::KeyRelease(0, ModMask::Zero),
            DisplayEvent::SendCommand(Command::Quit),
        ];
        manager.display_server.events.extend(events);
        manager.start_event_loop().await;

        // the host answers every focus request, so the history follows
        assert_eq!(history(&manager.state), vec![2, 1, 3]);
        assert!(!manager.state.focus_manager.is_cycling());
        let executed = &manager.display_server.executed;
        assert_eq!(executed.last(), Some(&DisplayAction::MoveToTop(WindowHandle(2))));
        assert!(executed.contains(&DisplayAction::UngrabKeyboard));
        assert!(manager.state.actions.is_empty());
    }
}
