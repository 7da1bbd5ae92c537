pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod main_lib;
pub mod menu;
pub mod session;
pub mod style;

pub use main_lib::{init_tracing, run_stdio};
pub use session::Session;
