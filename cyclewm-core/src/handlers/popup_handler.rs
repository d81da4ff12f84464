use super::{Handle, Screen};
use crate::models::{PopupList, PopupUpdate};
use crate::state::State;
use crate::DisplayAction;

impl<H: Handle> State<H> {
    /// Carry out the popup work requested while handling the last event.
    pub fn update_popup(&mut self) {
        match self.focus_manager.pending_popup.take() {
            Some(PopupUpdate::Rebuild) => self.rebuild_popup(),
            Some(PopupUpdate::Highlight) => self.highlight_popup(),
            None => {}
        }
    }

    pub(crate) fn rebuild_popup(&mut self) {
        let focus_manager = &self.focus_manager;
        let Some(session) = &focus_manager.session else {
            return self.destroy_popup();
        };
        if !focus_manager.stacked_cycle_popup_list {
            return;
        }
        let screen = self.screen(session.screen).cloned().unwrap_or_else(|| Screen {
            id: session.screen,
            ..Screen::default()
        });
        let desktop = self.current_desktop(session.screen);
        let list = PopupList::build(
            focus_manager.history.iter(),
            &self.windows,
            &screen,
            desktop,
            &focus_manager.popup_style,
        );

        match list {
            Some(mut list) => {
                list.highlight(focus_manager.cursor());
                self.actions
                    .push_back(DisplayAction::ShowPopupList(list.clone()));
                self.focus_manager.popup = Some(list);
            }
            None => self.destroy_popup(),
        }
    }

    fn highlight_popup(&mut self) {
        let cursor = self.focus_manager.cursor().copied();
        let Some(popup) = &mut self.focus_manager.popup else {
            return self.rebuild_popup();
        };
        if popup.highlight(cursor.as_ref()) {
            self.actions
                .push_back(DisplayAction::HighlightPopupRow(cursor));
        } else {
            tracing::debug!("Cursor {:?} missing from the popup, rebuilding", cursor);
            self.rebuild_popup();
        }
    }

    pub(crate) fn destroy_popup(&mut self) {
        self.focus_manager.pending_popup = None;
        if self.focus_manager.popup.take().is_some() {
            self.actions.push_back(DisplayAction::DestroyPopupList);
        }
    }
}
