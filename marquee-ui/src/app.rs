//! App Root Component

use leptos::*;

use crate::components::MessageBoard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! { <MessageBoard /> }
}
