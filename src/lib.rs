#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod file_io;
pub mod fill;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod shape;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, RasterImage};
pub use command::{Command, CommandHistory};
pub use config::CanvasConfig;
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use renderer::Renderer;
pub use session::PaintSession;
pub use shape::{Geometry, Shape, ShapeKind, ShapeStyle};
pub use tools::{InteractionController, ToolKind, ToolSettings};
