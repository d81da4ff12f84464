use super::{CycleSession, FocusHistory, Handle, PopupList, PopupStyle, WindowHandle};
use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Work left for the popup once the current event has been handled.
/// A rebuild covers a highlight.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PopupUpdate {
    Highlight,
    Rebuild,
}

/// `FocusManager` stores the focus history and the stacked cycle in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FocusManager<H: Handle> {
    #[serde(bound = "")]
    pub history: FocusHistory<H>,
    /// Last window the host reported as focused.
    #[serde(bound = "")]
    pub focused: Option<WindowHandle<H>>,
    #[serde(bound = "")]
    pub session: Option<CycleSession<H>>,
    #[serde(bound = "")]
    pub popup: Option<PopupList<H>>,
    #[serde(skip)]
    pub pending_popup: Option<PopupUpdate>,
    // entries below are configuration variables and are never changed
    pub cycle_raise: bool,
    pub stacked_cycle_raise: bool,
    pub stacked_cycle_popup_list: bool,
    pub fallback: bool,
    pub popup_style: PopupStyle,
}

impl<H: Handle> FocusManager<H> {
    pub fn new(config: &impl Config) -> Self {
        Self {
            history: FocusHistory::default(),
            focused: None,
            session: None,
            popup: None,
            pending_popup: None,
            cycle_raise: config.cycle_raise(),
            stacked_cycle_raise: config.stacked_cycle_raise(),
            stacked_cycle_popup_list: config.stacked_cycle_popup_list(),
            fallback: config.fallback(),
            popup_style: config.popup_style(),
        }
    }

    #[must_use]
    pub fn is_cycling(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&WindowHandle<H>> {
        self.session.as_ref().and_then(|s| s.cursor.as_ref())
    }

    /// Ask for a popup update. Only meaningful while the popup is wanted.
    pub fn request_popup(&mut self, update: PopupUpdate) {
        if !(self.is_cycling() && self.stacked_cycle_popup_list) {
            return;
        }
        self.pending_popup = self.pending_popup.max(Some(update));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::models::MockHandle;
    use crate::ModMask;

    #[test]
    fn configuration_is_copied_in() {
        let config = TestConfig {
            cycle_raise: false,
            fallback: true,
            ..TestConfig::default()
        };
        let subject: FocusManager<MockHandle> = FocusManager::new(&config);
        assert!(!subject.cycle_raise);
        assert!(subject.fallback);
        assert!(subject.stacked_cycle_popup_list);
        assert!(!subject.stacked_cycle_raise);
    }

    #[test]
    fn a_rebuild_request_wins_over_a_highlight() {
        let mut subject: FocusManager<MockHandle> = FocusManager::new(&TestConfig::default());
        subject.request_popup(PopupUpdate::Rebuild);
        assert_eq!(subject.pending_popup, None);

        subject.session = Some(CycleSession::new(0, ModMask::Alt, 0xff09));
        subject.request_popup(PopupUpdate::Rebuild);
        subject.request_popup(PopupUpdate::Highlight);
        assert_eq!(subject.pending_popup, Some(PopupUpdate::Rebuild));
    }
}
