//! Terminal User Interface for the dashboard.
//!
//! A fixed-interval poll-render loop: each tick collects a snapshot, folds it
//! into the trend history, and redraws the panel layout.

mod app;
mod event;
pub mod layout;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::AppState;
