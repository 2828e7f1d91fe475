//! API Access
//!
//! HTTP client for the Marquee REST API.

pub mod client;

pub use client::{fetch_message, get_api_base, MessageResponse};
