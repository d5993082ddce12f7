use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use shared_types::{ApplicantDetails, InterviewAppointment, InterviewAvailability};
use thaw::*;

use crate::components::{ConfirmBookingDialog, LoadingView, ResultBanner, SessionGuard};
use crate::scheduling::{
    format_start_label, group_by_date, resolve_interview_view, AfterBooking, BookingOutcome,
    DisplaySlot, InterviewGate, InterviewSelection,
};
use crate::server::{
    get_applicant_details, get_interview_appointments, get_interview_availabilities,
    get_interview_eligibility,
};
use crate::session::use_auth;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InterviewPageData {
    details: ApplicantDetails,
    can_register: bool,
    appointments: Vec<InterviewAppointment>,
    availabilities: Vec<InterviewAvailability>,
}

#[component]
pub fn InterviewPage() -> impl IntoView {
    view! {
        <SessionGuard>
            <InterviewContent/>
        </SessionGuard>
    }
}

#[component]
fn InterviewContent() -> impl IntoView {
    let (auth, _) = use_auth();
    // Bumped after a successful booking to refetch capacity from the
    // backend instead of patching client-side state.
    let reload_tick = RwSignal::new(0u32);

    let interview_resource = Resource::new(
        move || (auth.get().map(|session| session.token), reload_tick.get()),
        move |(token_opt, _)| async move {
            let token = token_opt?;
            Some(load_interview_page(token).await)
        },
    );

    let selection = RwSignal::new(InterviewSelection::new());

    let dialog_open = Signal::derive(move || selection.get().dialog_open());
    let selected_slot = Signal::derive(move || selection.get().selected().cloned());
    let submitting = Signal::derive(move || selection.get().submitting());
    let result_message = Signal::derive(move || selection.get().message().cloned());

    let handle_confirm = move || {
        let Some(session) = auth.get_untracked() else {
            selection.update(|state| {
                let _ = state.resolve(BookingOutcome::session_expired());
            });
            return;
        };

        // The state machine hands out at most one ticket per confirm, so a
        // double click cannot produce a second request.
        let Some(Ok(ticket)) = selection.try_update(|state| state.begin_submit()) else {
            return;
        };

        spawn_local(async move {
            let outcome = crate::server::book_interview_slot(session.token, ticket.availability_id)
                .await
                .unwrap_or_else(|err| {
                    leptos::logging::error!("booking request did not complete: {}", err);
                    BookingOutcome::connection_failure()
                });

            let after = selection
                .try_update(|state| state.resolve(outcome))
                .unwrap_or(AfterBooking::KeepSelection);

            if after == AfterBooking::ReloadSchedule {
                reload_tick.update(|tick| *tick += 1);
            }
        });
    };

    let handle_cancel = move || {
        selection.update(|state| state.close_dialog());
    };

    view! {
        <div class="interview-page">
            <Suspense fallback=move || view! { <LoadingView message=None/> }>
                {move || {
                    match interview_resource.get() {
                        None | Some(None) => view! { <LoadingView message=None/> }.into_any(),
                        Some(Some(Err(message))) => view! {
                            <div class="interview-error">
                                <MessageBar intent=MessageBarIntent::Error>
                                    {message}
                                </MessageBar>
                            </div>
                        }.into_any(),
                        Some(Some(Ok(data))) => {
                            let gate = resolve_interview_view(
                                data.can_register,
                                data.appointments.clone(),
                            );
                            view! {
                                <div class="interview-body">
                                    <PageHeader details=data.details.clone()/>
                                    {match gate {
                                        InterviewGate::RegistrationClosed => {
                                            view! { <RegistrationClosedNotice/> }.into_any()
                                        }
                                        InterviewGate::AlreadyScheduled(appointment) => {
                                            view! { <ScheduledSummary appointment/> }.into_any()
                                        }
                                        InterviewGate::Picker => view! {
                                            <div class="interview-picker-section">
                                                <ResultBanner message=result_message/>
                                                <SlotPicker
                                                    availabilities=data.availabilities.clone()
                                                    selection
                                                />
                                                <InterviewInstructions/>
                                            </div>
                                        }.into_any(),
                                    }}
                                </div>
                            }.into_any()
                        }
                    }
                }}
            </Suspense>

            <ConfirmBookingDialog
                open=dialog_open
                booking_slot=selected_slot
                submitting=submitting
                on_confirm=handle_confirm
                on_cancel=handle_cancel
            />
        </div>
    }
}

async fn load_interview_page(token: String) -> Result<InterviewPageData, String> {
    let details = get_applicant_details(token.clone())
        .await
        .map_err(|err| err.to_string())?;
    let can_register = get_interview_eligibility(token.clone())
        .await
        .map_err(|err| err.to_string())?;
    let appointments = get_interview_appointments(token.clone())
        .await
        .map_err(|err| err.to_string())?;
    let availabilities = get_interview_availabilities(token)
        .await
        .map_err(|err| err.to_string())?;

    Ok(InterviewPageData {
        details,
        can_register,
        appointments,
        availabilities,
    })
}

#[component]
fn PageHeader(details: ApplicantDetails) -> impl IntoView {
    view! {
        <div class="interview-header">
            <h1>"Admission Interview"</h1>
            <p class="interview-header-context">
                {details.program.name.clone()}
                " · "
                {details.academic_period.name.clone()}
            </p>
        </div>
    }
}

#[component]
fn RegistrationClosedNotice() -> impl IntoView {
    view! {
        <div class="interview-closed-card">
            <h2>"Interview registration is not available yet"</h2>
            <p>"Before you can book an interview, you need to:"</p>
            <ol>
                <li>"Upload all required documents"</li>
                <li>"Wait for the documents to be reviewed and approved"</li>
            </ol>
            <p class="interview-closed-hint">
                "You will be able to pick an interview slot once your documents are approved."
            </p>
        </div>
    }
}

#[component]
fn ScheduledSummary(appointment: InterviewAppointment) -> impl IntoView {
    let (date_label, time_label) = format_start_label(&appointment.interviewer_start_at)
        .unwrap_or_else(|| (appointment.interviewer_start_at.clone(), String::new()));
    let interviewer = format!(
        "{} {}",
        appointment.professor_first_name, appointment.professor_last_name
    );
    let is_virtual = appointment.mode == "virtual";

    view! {
        <div class="interview-scheduled-card">
            <h2>"Your interview is scheduled"</h2>
            <div class="interview-scheduled-details">
                <div><span class="detail-label">"Date: "</span>{date_label}</div>
                <div><span class="detail-label">"Time: "</span>{time_label}</div>
                <div><span class="detail-label">"Interviewer: "</span>{interviewer}</div>
                <div><span class="detail-label">"Program: "</span>{appointment.program_name.clone()}</div>
                <div><span class="detail-label">"Mode: "</span>{appointment.mode.clone()}</div>
                {if is_virtual {
                    view! {
                        <div>
                            <span class="detail-label">"Meeting link: "</span>
                            <a href=appointment.meeting_link.clone() target="_blank">
                                {appointment.meeting_link.clone()}
                            </a>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div><span class="detail-label">"Location: "</span>{appointment.location.clone()}</div>
                    }.into_any()
                }}
            </div>
            <p class="interview-scheduled-hint">
                "Please join 5 minutes early and keep your ID at hand. Contact admissions at least 48 hours ahead if you need to reschedule."
            </p>
        </div>
    }
}

#[component]
fn SlotPicker(
    availabilities: Vec<InterviewAvailability>,
    selection: RwSignal<InterviewSelection>,
) -> impl IntoView {
    let schedule = group_by_date(&availabilities);

    view! {
        <div class="slot-picker-card">
            <h2>"Pick your preferred time"</h2>

            {if schedule.is_empty() {
                view! {
                    <div class="slot-picker-empty">
                        <p>"No interview slots are available right now."</p>
                        <p class="slot-picker-empty-hint">
                            "Please contact the admissions office for more information."
                        </p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="slot-picker-days">
                        {schedule.days.into_iter().map(|day| {
                            view! {
                                <div class="slot-picker-day">
                                    <h3 class="slot-picker-day-label">{day.label.clone()}</h3>
                                    <div class="slot-picker-grid">
                                        {day.slots.into_iter().map(|slot| {
                                            view! { <SlotButton display_slot=slot selection/> }
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}

            <SelectedSlotSummary selection/>

            <div class="slot-picker-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || selection.get().selected().is_none())
                    on_click=move |_| selection.update(|state| state.clear())
                >
                    "Clear Selection"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || {
                        let state = selection.get();
                        state.selected().is_none() || state.submitting()
                    })
                    on_click=move |_| selection.update(|state| state.open_dialog())
                >
                    "Confirm Interview"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn SlotButton(display_slot: DisplaySlot, selection: RwSignal<InterviewSelection>) -> impl IntoView {
    let slot = display_slot;
    let slot_for_click = slot.clone();
    let slot_id = slot.availability_id;
    let available = slot.available;

    view! {
        <button
            class="slot-button"
            class:available=available
            class:unavailable=!available
            class:selected=move || selection.get().is_selected(slot_id)
            disabled=!available
            on:click=move |_| {
                selection.update(|state| state.select(&slot_for_click));
            }
        >
            <div class="slot-button-time">{slot.time_label.clone()}</div>
            <div class="slot-button-professor">{slot.professor_name.clone()}</div>
            <div class="slot-button-program">{slot.program_name.clone()}</div>
            <div class=move || {
                if available { "slot-button-status open" } else { "slot-button-status full" }
            }>
                {if available { "Available" } else { "Full" }}
            </div>
        </button>
    }
}

#[component]
fn SelectedSlotSummary(selection: RwSignal<InterviewSelection>) -> impl IntoView {
    view! {
        {move || {
            selection.get().selected().cloned().map(|slot| view! {
                <div class="selected-slot-card">
                    <h3>"Selected Slot"</h3>
                    <div class="selected-slot-details">
                        <div><span class="detail-label">"Date: "</span>{slot.date_label.clone()}</div>
                        <div><span class="detail-label">"Time: "</span>{slot.time_label.clone()}</div>
                        <div><span class="detail-label">"Interviewer: "</span>{slot.professor_name.clone()}</div>
                        <div><span class="detail-label">"Program: "</span>{slot.program_name.clone()}</div>
                        <div><span class="detail-label">"Period: "</span>{slot.academic_period_name.clone()}</div>
                        <div><span class="detail-label">"Location: "</span>{slot.location.clone()}</div>
                    </div>
                </div>
            })
        }}
    }
}

#[component]
fn InterviewInstructions() -> impl IntoView {
    view! {
        <div class="interview-instructions">
            <h3>"Important instructions"</h3>
            <ul>
                <li>"Join 5 minutes before your scheduled time"</li>
                <li>"Keep your identity document at hand"</li>
                <li>"The interview is evaluated by the academic committee"</li>
                <li>"To reschedule, contact admissions at least 48 hours in advance"</li>
            </ul>
        </div>
    }
}
