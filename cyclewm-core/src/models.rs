//! Objects (such as windows) used by the cycling core.
mod cycle_session;
mod desktop;
mod focus_history;
mod focus_manager;
mod manager;
mod popup_list;
mod screen;
mod window;
mod window_type;

pub use cycle_session::{rotation, CycleSession, Direction, Rotation};
pub use desktop::{Desktop, DesktopId};
pub use focus_history::FocusHistory;
pub use focus_manager::{FocusManager, PopupUpdate};
pub use manager::Manager;
pub use popup_list::{ellipsize, PopupList, PopupRow, PopupStyle};
pub use screen::{BBox, Screen, ScreenId};
pub use window::{Handle, MockHandle, Window, WindowHandle};
pub use window_type::WindowType;
