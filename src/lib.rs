pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use error::{AppError, Result};
