// Velin library exports

pub mod app;
pub mod buffer;
pub mod command;
pub mod config;
pub mod file_manager;
pub mod input;
pub mod status;
pub mod ui;

pub use app::{App, CursorFocus, Mode, RenderPlan};
pub use buffer::TextBuffer;
pub use command::Command;
pub use config::Config;
pub use input::InputEvent;
