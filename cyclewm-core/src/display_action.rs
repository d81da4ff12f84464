use crate::models::{Handle, PopupList, ScreenId, WindowHandle};
use serde::{Deserialize, Serialize};

/// These are responses from the focus core.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Give input focus to a window.
    #[serde(bound = "")]
    WindowTakeFocus {
        window: WindowHandle<H>,
        previous_window: Option<WindowHandle<H>>,
    },

    /// Raise a window above its siblings.
    #[serde(bound = "")]
    MoveToTop(WindowHandle<H>),

    /// Route all keyboard input on a screen to us.
    GrabKeyboard(ScreenId),
    GrabPointer(ScreenId),
    UngrabKeyboard,
    UngrabPointer,

    /// Replace whatever list is on screen with this one.
    #[serde(bound = "")]
    ShowPopupList(PopupList<H>),

    /// Move the highlight of the shown list. `None` clears it.
    #[serde(bound = "")]
    HighlightPopupRow(Option<WindowHandle<H>>),

    DestroyPopupList,
}
