use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::server::logout_user;
use crate::session::{clear_session, use_auth};

/// Top navigation bar. Shows the applicant links once a session exists,
/// otherwise a sign-in link.
#[component]
pub fn PortalNavBar() -> impl IntoView {
    let (auth, _is_loading) = use_auth();

    let handle_logout = move || {
        if let Some(session) = auth.get() {
            spawn_local(async move {
                // Best effort: the local session is gone either way.
                let _ = logout_user(session.token).await;
            });
        }
        clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    view! {
        <nav class="portal-navbar">
            <div class="portal-navbar-brand">
                <A href="/">"Graduate Admission Portal"</A>
            </div>
            {move || {
                if let Some(session) = auth.get() {
                    view! {
                        <div class="portal-navbar-links">
                            <A href="/documents/upload">"My Documents"</A>
                            <A href="/documents/download">"Program Documents"</A>
                            <A href="/interview">"Interview"</A>
                            <span class="portal-navbar-user">{session.user_name.clone()}</span>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| handle_logout()
                            >
                                "Sign Out"
                            </Button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="portal-navbar-links">
                            <A href="/login">"Sign In"</A>
                        </div>
                    }.into_any()
                }
            }}
        </nav>
    }
}
