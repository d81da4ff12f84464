use super::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Every open window once, most recently focused first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FocusHistory<H: Handle> {
    #[serde(bound = "")]
    entries: VecDeque<WindowHandle<H>>,
}

impl<H: Handle> Default for FocusHistory<H> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<H: Handle> FocusHistory<H> {
    /// New windows go to the front of an empty history and right behind the
    /// head otherwise. Returns false for a window that is already known.
    pub fn insert_new(&mut self, handle: WindowHandle<H>) -> bool {
        if self.contains(&handle) {
            return false;
        }
        let index = usize::from(!self.entries.is_empty());
        self.entries.insert(index, handle);
        true
    }

    /// Insert directly behind `anchor`, or use the normal creation rule when
    /// `anchor` is not in the history.
    pub fn insert_after(&mut self, anchor: &WindowHandle<H>, handle: WindowHandle<H>) -> bool {
        if self.contains(&handle) {
            return false;
        }
        match self.position(anchor) {
            Some(index) => {
                self.entries.insert(index + 1, handle);
                true
            }
            None => self.insert_new(handle),
        }
    }

    pub fn remove(&mut self, handle: &WindowHandle<H>) -> bool {
        match self.position(handle) {
            Some(index) => self.entries.remove(index).is_some(),
            None => false,
        }
    }

    /// Returns false when the window is unknown.
    pub fn move_to_front(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(index) = self.position(handle) else {
            return false;
        };
        if let Some(entry) = self.entries.remove(index) {
            self.entries.push_front(entry);
        }
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<WindowHandle<H>> {
        self.entries.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowHandle<H>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn front(&self) -> Option<&WindowHandle<H>> {
        self.entries.front()
    }

    #[must_use]
    pub fn position(&self, handle: &WindowHandle<H>) -> Option<usize> {
        self.entries.iter().position(|h| h == handle)
    }

    #[must_use]
    pub fn contains(&self, handle: &WindowHandle<H>) -> bool {
        self.entries.contains(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
