//! Marquee
//!
//! A small message service. The Axum back-end in this crate serves the
//! payload displayed by the Marquee front-end (`marquee-ui`): a single
//! JSON endpoint returning `{"message": "<string>"}`, plus health probes.

pub mod api;
