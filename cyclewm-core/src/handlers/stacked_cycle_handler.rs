use super::{Direction, Handle, Invocation, WindowHandle};
use crate::models::{rotation, CycleSession, PopupUpdate, ScreenId};
use crate::state::State;
use crate::{DisplayAction, ModMask};

impl<H: Handle> State<H> {
    /// Walk the focus history while the binding's modifiers stay held.
    ///
    /// The first press opens a session, later presses of the same key step
    /// it. Returns true if changes need to be rendered.
    pub fn focus_stacked(&mut self, invocation: Invocation, direction: Direction) -> bool {
        match &self.focus_manager.session {
            None => {
                self.start_cycle(invocation, direction);
                true
            }
            Some(session) if session.is_trigger(invocation.key) => {
                self.advance_cycle(direction, None)
            }
            Some(_) => {
                tracing::debug!("Stacked cycle already running on another key");
                false
            }
        }
    }

    /// Commit the session once none of its modifiers are held any more.
    pub fn key_release_handler(&mut self, _screen: ScreenId, held: ModMask) -> bool {
        match &self.focus_manager.session {
            Some(session) if session.is_released_by(held) => {
                self.end_cycle();
                true
            }
            _ => false,
        }
    }

    fn start_cycle(&mut self, invocation: Invocation, direction: Direction) {
        tracing::debug!("Starting stacked cycle on screen {}", invocation.screen);
        let session = CycleSession::new(invocation.screen, invocation.modmask, invocation.key);
        self.focus_manager.session = Some(session);
        self.rebuild_popup();
        self.actions
            .push_back(DisplayAction::GrabKeyboard(invocation.screen));
        self.actions
            .push_back(DisplayAction::GrabPointer(invocation.screen));
        self.advance_cycle(direction, None);
    }

    /// Move the cursor to the next eligible window of the history, never
    /// landing on `skip`. Returns false when there is nowhere to go.
    pub(crate) fn advance_cycle(
        &mut self,
        direction: Direction,
        skip: Option<&WindowHandle<H>>,
    ) -> bool {
        let Some(session) = &self.focus_manager.session else {
            return false;
        };
        let desktop = self.current_desktop(session.screen);
        let snapshot = self.focus_manager.history.snapshot();
        let focused = self.focus_manager.focused.as_ref();
        let next = rotation(&snapshot, session.cursor.as_ref(), focused, direction)
            .filter(|h| Some(*h) != skip)
            .find(|h| self.is_eligible(h, desktop))
            .copied();
        let Some(next) = next else {
            tracing::debug!("No window to cycle to on desktop {}", desktop);
            return false;
        };

        if let Some(session) = &mut self.focus_manager.session {
            session.cursor = Some(next);
        }
        self.request_focus(&next);
        if self.focus_manager.stacked_cycle_raise {
            self.move_to_top(&next);
        }
        self.focus_manager.request_popup(PopupUpdate::Highlight);
        true
    }

    fn end_cycle(&mut self) {
        let Some(session) = self.focus_manager.session.take() else {
            return;
        };
        tracing::debug!("Committing stacked cycle at {:?}", session.cursor);
        self.destroy_popup();
        self.actions.push_back(DisplayAction::UngrabKeyboard);
        self.actions.push_back(DisplayAction::UngrabPointer);

        let Some(cursor) = session.cursor else {
            return;
        };
        self.focus_manager.history.move_to_front(&cursor);
        if self.focus_manager.cycle_raise && self.find_window(&cursor).is_some() {
            self.move_to_top(&cursor);
        }
    }
}
