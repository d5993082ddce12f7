use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::scheduling::{MessageKind, OutcomeMessage};

/// Success/error banner shown above the interview picker after a booking
/// attempt resolves.
#[component]
pub fn ResultBanner(message: Signal<Option<OutcomeMessage>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|outcome| {
                let intent = match outcome.kind {
                    MessageKind::Success => MessageBarIntent::Success,
                    MessageKind::Error => MessageBarIntent::Error,
                };
                view! {
                    <div class="result-banner">
                        <MessageBar intent=intent>
                            {outcome.text}
                        </MessageBar>
                    </div>
                }
            })
        }}
    }
}
