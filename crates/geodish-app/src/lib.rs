//! # geodish-app - Application Engine
//!
//! State and update logic for the GeoDish terminal client, structured as
//! a message-driven state machine:
//!
//! - [`AppState`] holds all mutable state, owned by the event loop
//! - [`Message`] describes everything that can happen
//! - [`handler::update`] folds a message into the state and returns an
//!   optional [`UpdateAction`] side effect
//! - [`actions::handle_action`] performs side effects by spawning gateway
//!   tasks whose results come back as messages
//!
//! The crate is terminal-agnostic: key input arrives as [`InputKey`],
//! converted from crossterm events at the TUI boundary.

pub mod actions;
pub mod alerts;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod theme;

pub use actions::ActionContext;
pub use alerts::{Alert, AlertSeverity, AlertStack};
pub use confirm_dialog::{ConfirmChoice, ConfirmDialogState};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, DishPhase, Focus, LoadPhase, UiMode};
pub use theme::Theme;
