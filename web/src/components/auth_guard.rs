use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::use_auth;

#[component]
pub fn CheckingSessionState() -> impl IntoView {
    view! {
        <div class="session-guard-container">
            <div class="session-guard-content">
                <div class="session-guard-loading-title">
                    "Verifying your session..."
                </div>
                <div class="session-guard-loading-subtitle">
                    "Please wait while we check your credentials"
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SignedOutState() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        // Send the visitor back to this page once they sign in.
        let return_to = location.pathname.get_untracked();
        let target = format!("/login?redirect={}", urlencoding::encode(&return_to));
        navigate(&target, Default::default());
    });

    view! {
        <div class="session-guard-container">
            <div class="session-guard-content">
                <div class="session-guard-denied-title">
                    "Sign-in required"
                </div>
                <div class="session-guard-denied-subtitle">
                    "Redirecting to the login page..."
                </div>
            </div>
        </div>
    }
}

/// Gates applicant-only pages behind a stored session.
#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let (auth, is_loading) = use_auth();

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=move || view! { <CheckingSessionState/> }
        >
            <Show
                when=move || auth.get().is_some()
                fallback=move || view! { <SignedOutState/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}
