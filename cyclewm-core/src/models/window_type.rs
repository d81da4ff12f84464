use serde::{Deserialize, Serialize};

/// Presentation style as announced through `_NET_WM_WINDOW_TYPE`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    #[default]
    Normal,
}
