//! UI Components
//!
//! Leptos components for the message display.

pub mod message_board;

pub use message_board::MessageBoard;
