#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod breathing;
pub mod brush;
pub mod config;
pub mod document;
pub mod error;
pub mod game;
pub mod input;
pub mod journal;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tips;
pub mod util;

pub use app::{MindfulApp, Screen};
pub use brush::{Brush, PaletteColor};
pub use config::Settings;
pub use document::Document;
pub use error::{AppError, SettingsError};
pub use input::{DragEvent, DragTracker, route_drag};
pub use renderer::{Renderer, Surface};
pub use state::DoodleState;
pub use stroke::Stroke;
