use super::DesktopId;
use serde::{Deserialize, Serialize};

pub type ScreenId = usize;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Screen {
    pub id: ScreenId,
    pub bbox: BBox,
    /// Desktop currently shown on this screen.
    #[serde(default)]
    pub desktop: DesktopId,
}

/// Screen Bounding Box
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Screen {
    #[must_use]
    pub fn new(id: ScreenId, bbox: BBox) -> Self {
        Self {
            id,
            bbox,
            desktop: 0,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(
            0,
            BBox {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
        )
    }
}

impl BBox {
    /// A `width` x `height` box centred inside this one.
    #[must_use]
    pub const fn centered(&self, width: i32, height: i32) -> BBox {
        BBox {
            x: self.x + (self.width - width) / 2,
            y: self.y + (self.height - height) / 2,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_boxes_stay_inside_the_screen() {
        let screen = BBox {
            x: 1920,
            y: 0,
            width: 1000,
            height: 800,
        };
        let inner = screen.centered(200, 100);
        assert_eq!(inner, BBox { x: 2320, y: 350, width: 200, height: 100 });
        assert!(inner.x + inner.width <= screen.x + screen.width);
        assert!(inner.y + inner.height <= screen.y + screen.height);
    }
}
