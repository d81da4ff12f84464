//! Which windows may be picked by the cyclers and listed in the popup.
use crate::models::{DesktopId, Handle, Window, WindowHandle};

/// A window is a cycling candidate for `desktop` when it lives there (or on
/// every desktop), is a normal window and can take focus in some way.
#[must_use]
pub fn is_eligible<H: Handle>(window: &Window<H>, desktop: DesktopId) -> bool {
    window.on_desktop(desktop) && window.is_normal() && window.accepts_focus()
}

/// Resolve `handle` and test it. A handle with no live window is never eligible.
pub fn find_eligible<'a, H: Handle>(
    windows: &'a [Window<H>],
    handle: &WindowHandle<H>,
    desktop: DesktopId,
) -> Option<&'a Window<H>> {
    windows
        .iter()
        .find(|w| &w.handle == handle)
        .filter(|w| is_eligible(w, desktop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Desktop, MockHandle, WindowType};

    fn window(id: MockHandle) -> Window<MockHandle> {
        Window::new(WindowHandle(id), Some(format!("window {id}")))
    }

    #[test]
    fn a_normal_focusable_window_on_the_desktop_is_eligible() {
        assert!(is_eligible(&window(1), 0));
    }

    #[test]
    fn windows_on_other_desktops_are_not_eligible() {
        let mut subject = window(1);
        subject.desktop = Desktop::Index(1);
        assert!(!is_eligible(&subject, 0));
        assert!(is_eligible(&subject, 1));
    }

    #[test]
    fn sticky_windows_are_eligible_everywhere() {
        let mut subject = window(1);
        subject.desktop = Desktop::All;
        assert!(is_eligible(&subject, 0));
        assert!(is_eligible(&subject, 7));
    }

    #[test]
    fn docks_and_utilities_are_not_eligible() {
        for r#type in [WindowType::Dock, WindowType::Utility, WindowType::Desktop] {
            let mut subject = window(1);
            subject.r#type = r#type;
            assert!(!is_eligible(&subject, 0));
        }
    }

    #[test]
    fn a_focus_notification_counts_as_accepting_focus() {
        let mut subject = window(1);
        subject.can_focus = false;
        assert!(!is_eligible(&subject, 0));
        subject.focus_notify = true;
        assert!(is_eligible(&subject, 0));
    }

    #[test]
    fn stale_handles_are_not_eligible() {
        let windows = vec![window(1)];
        assert!(find_eligible(&windows, &WindowHandle(1), 0).is_some());
        assert!(find_eligible(&windows, &WindowHandle(2), 0).is_none());
    }
}
