//! # geodish-tui - Terminal Interface
//!
//! Ratatui front end for the GeoDish client: event polling, layout,
//! theming, widgets, and the main event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
