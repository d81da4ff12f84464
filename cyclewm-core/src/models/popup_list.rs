//! The list of candidates shown while a stacked cycle is held open.
use super::{BBox, DesktopId, Handle, Screen, ScreenId, Window, WindowHandle};
use crate::utils::eligibility::find_eligible;
use serde::{Deserialize, Serialize};

const MAX_TITLE: usize = 50;
const TITLE_KEEP: usize = 24;

/// Metrics used to size the list without knowing the font.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PopupStyle {
    pub row_height: i32,
    pub char_width: i32,
    pub padding: i32,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            row_height: 18,
            char_width: 8,
            padding: 4,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PopupRow<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub label: String,
    pub highlighted: bool,
    pub bbox: BBox,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PopupList<H: Handle> {
    pub screen: ScreenId,
    #[serde(bound = "")]
    pub rows: Vec<PopupRow<H>>,
    pub bbox: BBox,
}

impl<H: Handle> PopupList<H> {
    /// Lay out the eligible windows of `history` on `screen`. Returns `None`
    /// when there are fewer than two rows to show.
    pub fn build<'a>(
        history: impl IntoIterator<Item = &'a WindowHandle<H>>,
        windows: &[Window<H>],
        screen: &Screen,
        desktop: DesktopId,
        style: &PopupStyle,
    ) -> Option<Self> {
        let labels: Vec<(WindowHandle<H>, String)> = history
            .into_iter()
            .filter_map(|h| find_eligible(windows, h, desktop))
            .map(|w| (w.handle, ellipsize(w.title())))
            .collect();
        if labels.len() < 2 {
            return None;
        }

        let widest = labels
            .iter()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or_default() as i32;
        let inner_width = widest * style.char_width;
        let width = inner_width + 2 * style.padding;
        let height = labels.len() as i32 * style.row_height + 2 * style.padding;
        let bbox = screen.bbox.centered(width, height);

        let rows = labels
            .into_iter()
            .enumerate()
            .map(|(i, (handle, label))| PopupRow {
                handle,
                label,
                highlighted: false,
                bbox: BBox {
                    x: bbox.x + style.padding,
                    y: bbox.y + style.padding + i as i32 * style.row_height,
                    width: inner_width,
                    height: style.row_height,
                },
            })
            .collect();

        Some(Self {
            screen: screen.id,
            rows,
            bbox,
        })
    }

    /// Mark the row of `cursor`. Returns false when the cursor has no row,
    /// which means the list is out of date.
    pub fn highlight(&mut self, cursor: Option<&WindowHandle<H>>) -> bool {
        let found = cursor.map_or(true, |c| self.rows.iter().any(|r| &r.handle == c));
        for row in &mut self.rows {
            row.highlighted = Some(&row.handle) == cursor;
        }
        found
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&WindowHandle<H>> {
        self.rows.iter().find(|r| r.highlighted).map(|r| &r.handle)
    }
}

/// Shorten long titles to their first and last 24 characters.
#[must_use]
pub fn ellipsize(title: &str) -> String {
    let count = title.chars().count();
    if count <= MAX_TITLE {
        return title.to_owned();
    }
    let head: String = title.chars().take(TITLE_KEEP).collect();
    let tail: String = title.chars().skip(count - TITLE_KEEP).collect();
    format!("{head}...{tail}")
}
