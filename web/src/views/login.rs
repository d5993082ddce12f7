use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::LoginRequest;
use thaw::*;

use crate::server::login_user;
use crate::session::store_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query_map = leptos_router::hooks::use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled =
        Memo::new(move |_| email.get().is_empty() || password.get().is_empty());

    let submit_login = move |_| {
        loading.set(true);
        error_message.set(None);

        let credentials = LoginRequest {
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            match login_user(credentials).await {
                Ok(auth_result) => {
                    if auth_result.success {
                        if let (Some(token), Some(user_id)) =
                            (&auth_result.token, auth_result.user_id)
                        {
                            store_session(
                                token,
                                user_id,
                                auth_result.user_name.as_deref().unwrap_or_default(),
                            );
                        }

                        // Return to the page the guard bounced the visitor
                        // from, or to the document checklist by default.
                        let redirect_url = query_map
                            .get_untracked()
                            .get("redirect")
                            .unwrap_or_else(|| "/documents/upload".to_string());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&redirect_url);
                        }
                    } else {
                        error_message.set(auth_result.error);
                    }
                }
                Err(e) => {
                    error_message.set(Some(format!("Login failed: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome back"</h1>
                    <p>"Sign in to continue your admission process"</p>
                </div>

                {move || {
                    error_message.get().map(|msg| view! {
                        <div class="auth-error-message">
                            <MessageBar intent=MessageBarIntent::Error>
                                {msg}
                            </MessageBar>
                        </div>
                    })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    if !is_button_disabled.get() {
                        submit_login(());
                    }
                }>
                    <div class="auth-form-group">
                        <label for="email">"Email"</label>
                        <Input
                            id="email"
                            input_type=InputType::Email
                            placeholder="you@example.com"
                            value=email
                        />
                    </div>
                    <div class="auth-form-group">
                        <label for="password">"Password"</label>
                        <Input
                            id="password"
                            input_type=InputType::Password
                            placeholder="Your password"
                            value=password
                        />
                    </div>

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::from(is_button_disabled)
                        loading=loading
                    >
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>

                <p class="auth-footer">
                    "Not registered yet? Apply through your program's page."
                </p>
            </div>
        </div>
    }
}
