use crate::models::ScreenId;
use crate::{ModMask, XKeysym};
use serde::{Deserialize, Serialize};

/// Entry points that can be bound to keys.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    FocusNextStacked,
    FocusPreviousStacked,
    FocusNext { count: usize },
    FocusPrevious { count: usize },
    Quit,
}

/// The key press a command was run for.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Invocation {
    pub screen: ScreenId,
    pub modmask: ModMask,
    pub key: XKeysym,
}

impl Invocation {
    /// An invocation that did not come from the keyboard.
    #[must_use]
    pub fn for_screen(screen: ScreenId) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }
}
