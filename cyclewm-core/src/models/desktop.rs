use serde::{Deserialize, Serialize};

pub type DesktopId = u32;

/// `_NET_WM_DESKTOP` value meaning "shown on every desktop".
const ALL_DESKTOPS: DesktopId = 0xffff_ffff;

/// Where a window lives. Hosts may send either the raw `_NET_WM_DESKTOP`
/// number or the tagged form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "RawDesktop")]
pub enum Desktop {
    Index(DesktopId),
    All,
}

impl Default for Desktop {
    fn default() -> Self {
        Desktop::Index(0)
    }
}

impl Desktop {
    #[must_use]
    pub const fn contains(self, desktop: DesktopId) -> bool {
        match self {
            Desktop::Index(index) => index == desktop,
            Desktop::All => true,
        }
    }
}

impl From<DesktopId> for Desktop {
    fn from(value: DesktopId) -> Self {
        if value == ALL_DESKTOPS {
            Desktop::All
        } else {
            Desktop::Index(value)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDesktop {
    Number(DesktopId),
    Tagged(TaggedDesktop),
}

#[derive(Deserialize)]
enum TaggedDesktop {
    Index(DesktopId),
    All,
}

impl From<RawDesktop> for Desktop {
    fn from(raw: RawDesktop) -> Self {
        match raw {
            RawDesktop::Number(value) | RawDesktop::Tagged(TaggedDesktop::Index(value)) => {
                Desktop::from(value)
            }
            RawDesktop::Tagged(TaggedDesktop::All) => Desktop::All,
        }
    }
}
