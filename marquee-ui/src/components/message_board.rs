//! Message Board Component
//!
//! Fetches the message payload once on mount and renders it. While the
//! request is in flight the board shows "Loading..."; a failed request
//! shows the error instead of staying on the loading text forever.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{self, MessageResponse};

/// Lifecycle of the one-shot request issued on mount.
///
/// A single tagged state instead of separate `loading`/`data` flags, so
/// the render path can never observe "not loading, but no payload".
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
    /// Request in flight (initial state)
    Loading,
    /// Request resolved with a decoded payload
    Loaded(MessageResponse),
    /// Network, HTTP, or decode failure
    Failed(String),
}

impl FetchState {
    /// Text displayed for this state
    pub fn display_text(&self) -> String {
        match self {
            FetchState::Loading => "Loading...".to_string(),
            FetchState::Loaded(payload) => payload.message.clone(),
            FetchState::Failed(error) => format!("Error: {}", error),
        }
    }

    /// Color of the displayed text
    pub fn color(&self) -> &'static str {
        match self {
            FetchState::Failed(_) => "red",
            _ => "green",
        }
    }
}

/// Message display component
///
/// Issues exactly one request per mount; remounting issues one more.
/// There are no retries and no timeout, so a request that never settles
/// leaves the board on the loading text.
#[component]
pub fn MessageBoard() -> impl IntoView {
    let state = create_rw_signal(FetchState::Loading);

    // A response landing after disposal must not write to the signal
    let disposed = Rc::new(Cell::new(false));
    {
        let disposed = disposed.clone();
        on_cleanup(move || disposed.set(true));
    }

    // Fetch once on mount
    let disposed_for_fetch = disposed.clone();
    create_effect(move |_| {
        let disposed = disposed_for_fetch.clone();
        spawn_local(async move {
            let next = match api::fetch_message().await {
                Ok(payload) => FetchState::Loaded(payload),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch message: {}", e).into());
                    FetchState::Failed(e)
                }
            };
            if !disposed.get() {
                state.set(next);
            }
        });
    });

    view! {
        <div style=move || {
            format!(
                "color: {}; text-align: center; font-size: 5rem;",
                state.get().color()
            )
        }>
            {move || state.get().display_text()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_shows_placeholder() {
        assert_eq!(FetchState::Loading.display_text(), "Loading...");
        assert_eq!(FetchState::Loading.color(), "green");
    }

    #[test]
    fn test_loaded_shows_message_verbatim() {
        let state = FetchState::Loaded(MessageResponse {
            message: "hello".to_string(),
        });
        assert_eq!(state.display_text(), "hello");
        assert_eq!(state.color(), "green");
    }

    #[test]
    fn test_empty_message_is_not_loading() {
        let state = FetchState::Loaded(MessageResponse {
            message: String::new(),
        });
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn test_failure_is_surfaced() {
        let state = FetchState::Failed("Network error: connection refused".to_string());
        assert!(state.display_text().contains("connection refused"));
        assert_eq!(state.color(), "red");
    }
}
