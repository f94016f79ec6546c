#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod input;
pub mod metadata;
pub mod ops;
pub mod panels;
pub mod picture;
pub mod rubber_band;
pub mod state;

pub use app::ImageEditorApp;
pub use command::Command;
pub use error::{CommandResult, EditorError};
pub use input::{InputEvent, InputLocation};
pub use picture::Picture;
pub use state::EditorContext;
