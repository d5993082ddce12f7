use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="portal-loading">
            <Spinner size=SpinnerSize::Large />
            <p class="portal-loading-message">
                {message.unwrap_or_else(|| "Loading your admission information...".to_string())}
            </p>
        </div>
    }
}
