//! Slidecraft Library
//!
//! Vector-graphics slides for the terminal: a pixel canvas with a parallel
//! character grid, a closed set of shapes, slides and decks with undo
//! history, and an interactive editor session.

pub mod canvas;
pub mod cli;
pub mod color;
pub mod config;
pub mod deck;
pub mod history;
pub mod logging;
pub mod session;
pub mod shape;
pub mod slide;
pub mod theme;

pub use canvas::{Canvas, ExportError};
pub use color::Color;
pub use config::Config;
pub use deck::{Deck, DeckError};
pub use history::History;
pub use session::Session;
pub use shape::{Shape, ShapeKind};
pub use slide::Slide;
