mod command;
mod config;
pub mod replay;
pub mod utils;

pub use command::*;
pub use config::*;
