use super::{Handle, ScreenId, WindowHandle};
use crate::{ModMask, XKeysym};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// A stacked cycle in progress. It lives from the first press of the
/// binding until the modifiers that started it are released.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CycleSession<H: Handle> {
    pub screen: ScreenId,
    pub modmask: ModMask,
    pub key: XKeysym,
    /// Last candidate visited, `None` until the first step lands somewhere.
    #[serde(bound = "")]
    pub cursor: Option<WindowHandle<H>>,
}

impl<H: Handle> CycleSession<H> {
    #[must_use]
    pub fn new(screen: ScreenId, modmask: ModMask, key: XKeysym) -> Self {
        Self {
            screen,
            modmask: modmask.cleaned(),
            key,
            cursor: None,
        }
    }

    #[must_use]
    pub fn is_trigger(&self, key: XKeysym) -> bool {
        self.key == key
    }

    /// True once none of the modifiers that opened the session are held.
    #[must_use]
    pub fn is_released_by(&self, held: ModMask) -> bool {
        !held.cleaned().intersects(self.modmask)
    }
}

/// Circular walk over a history snapshot that visits every entry once.
pub struct Rotation<'a, H: Handle> {
    snapshot: &'a [WindowHandle<H>],
    index: usize,
    remaining: usize,
    direction: Direction,
}

/// Start the walk just after `cursor` (or just before it, going backward).
///
/// Without a cursor a forward walk skips the head only when it is the
/// `focused` window, so that window comes up last. A backward walk starts at
/// the tail.
pub fn rotation<'a, H: Handle>(
    snapshot: &'a [WindowHandle<H>],
    cursor: Option<&WindowHandle<H>>,
    focused: Option<&WindowHandle<H>>,
    direction: Direction,
) -> Rotation<'a, H> {
    let len = snapshot.len();
    let position = cursor.and_then(|c| snapshot.iter().position(|h| h == c));
    let head_focused = focused.is_some() && snapshot.first() == focused;
    let index = match (len, direction, position) {
        (0, _, _) => 0,
        (_, Direction::Forward, Some(p)) => (p + 1) % len,
        (_, Direction::Forward, None) if head_focused => 1 % len,
        (_, Direction::Forward, None) => 0,
        (_, Direction::Backward, Some(p)) => (p + len - 1) % len,
        (_, Direction::Backward, None) => len - 1,
    };
    Rotation {
        snapshot,
        index,
        remaining: len,
        direction,
    }
}

impl<'a, H: Handle> Iterator for Rotation<'a, H> {
    type Item = &'a WindowHandle<H>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let len = self.snapshot.len();
        let item = &self.snapshot[self.index];
        self.index = match self.direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Backward => (self.index + len - 1) % len,
        };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
