//! Window Information
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use super::{Desktop, DesktopId, ScreenId, WindowType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// What the host tells us about a window.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    #[serde(default)]
    pub screen: ScreenId,
    #[serde(default)]
    pub desktop: Desktop,
    #[serde(default)]
    pub r#type: WindowType,
    /// Accepts input focus directly (`WM_HINTS` input).
    #[serde(default = "accepts_by_default")]
    pub can_focus: bool,
    /// Takes part in `WM_TAKE_FOCUS` instead of direct focus.
    #[serde(default)]
    pub focus_notify: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub legacy_name: Option<String>,
}

const fn accepts_by_default() -> bool {
    true
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(h: WindowHandle<H>, name: Option<String>) -> Self {
        Self {
            handle: h,
            screen: 0,
            desktop: Desktop::default(),
            r#type: WindowType::Normal,
            can_focus: true,
            focus_notify: false,
            name,
            legacy_name: None,
        }
    }

    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.r#type == WindowType::Normal
    }

    #[must_use]
    pub fn accepts_focus(&self) -> bool {
        self.can_focus || self.focus_notify
    }

    #[must_use]
    pub fn on_desktop(&self, desktop: DesktopId) -> bool {
        self.desktop.contains(desktop)
    }

    /// `_NET_WM_NAME`, falling back to `WM_NAME`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .or(self.legacy_name.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_to_the_legacy_name() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        assert_eq!(subject.title(), "");
        subject.legacy_name = Some("xterm".to_owned());
        assert_eq!(subject.title(), "xterm");
        subject.name = Some("vim".to_owned());
        assert_eq!(subject.title(), "vim");
    }

    #[test]
    fn missing_attributes_take_their_defaults() {
        let subject: Window<MockHandle> = serde_json::from_str(r#"{"handle": 3}"#).unwrap();
        assert_eq!(subject.handle, WindowHandle(3));
        assert!(subject.is_normal());
        assert!(subject.accepts_focus());
        assert!(subject.on_desktop(0));
    }
}
