use super::{ModMask, XKeysym};
use crate::models::{DesktopId, Handle, Screen, ScreenId, Window, WindowHandle};
use crate::Command;
use serde::{Deserialize, Serialize};

/// What the host reports to us. Modifiers carried by `KeyRelease` are the
/// ones still held after the release.
#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    ScreenCreate(Screen),
    DesktopChanged(ScreenId, DesktopId),
    #[serde(bound = "")]
    WindowCreate(Window<H>),
    #[serde(bound = "")]
    WindowDestroy(WindowHandle<H>),
    #[serde(bound = "")]
    WindowFocused(Option<WindowHandle<H>>),
    KeyCombo(ScreenId, ModMask, XKeysym),
    KeyRelease(ScreenId, ModMask),
    SendCommand(Command),
}
