use leptos::prelude::*;
use thaw::*;

use crate::scheduling::DisplaySlot;

/// Confirmation step between picking a slot and sending the booking
/// request. While the request is in flight both buttons lock up; the
/// selection state machine independently refuses a second submit.
#[component]
pub fn ConfirmBookingDialog(
    open: Signal<bool>,
    booking_slot: Signal<Option<DisplaySlot>>,
    submitting: Signal<bool>,
    on_confirm: impl Fn() + 'static + Copy + Send + Sync,
    on_cancel: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class=move || {
            if open.get() { "confirm-dialog-overlay show" } else { "confirm-dialog-overlay" }
        }>
            <div class="confirm-dialog">
                <div class="confirm-dialog-header">
                    <h2>"Confirm Interview"</h2>
                </div>

                {move || {
                    booking_slot.get().map(|selected| view! {
                        <div class="confirm-dialog-body">
                            <p>"Are you sure you want to book this interview?"</p>
                            <div class="confirm-dialog-details">
                                <div><span class="detail-label">"Date: "</span>{selected.date_label.clone()}</div>
                                <div><span class="detail-label">"Time: "</span>{selected.time_label.clone()}</div>
                                <div><span class="detail-label">"Interviewer: "</span>{selected.professor_name.clone()}</div>
                                <div><span class="detail-label">"Program: "</span>{selected.program_name.clone()}</div>
                            </div>
                        </div>
                    })
                }}

                <div class="confirm-dialog-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=submitting
                        on_click=move |_| on_cancel()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=submitting
                        loading=submitting
                        on_click=move |_| on_confirm()
                    >
                        {move || if submitting.get() { "Confirming..." } else { "Confirm" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
