//! Focus history and window cycling for window managers.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod command;
mod command_builder;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;
pub mod utils;

pub use command::{Command, Invocation};
pub use command_builder::CommandBuilder;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use models::Manager;
pub use models::Window;
pub use state::State;
pub use utils::modmask_lookup::ModMask;
pub use utils::xkeysym_lookup::XKeysym;
