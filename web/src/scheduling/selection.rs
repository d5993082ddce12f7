use serde::{Deserialize, Serialize};
use shared_types::{ApiStatus, CreateAppointmentResponse};

use super::grouping::DisplaySlot;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Could not reach the admission server. Please try again later.";

/// Total result of one booking attempt. The booking client converts every
/// transport or backend failure into the `Error` variant; nothing above it
/// has to handle exceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    Success { message: String },
    Error { message: String },
}

impl BookingOutcome {
    pub fn session_expired() -> Self {
        Self::Error {
            message: SESSION_EXPIRED_MESSAGE.to_string(),
        }
    }

    pub fn connection_failure() -> Self {
        Self::Error {
            message: CONNECTION_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message } => message,
        }
    }
}

impl From<CreateAppointmentResponse> for BookingOutcome {
    fn from(response: CreateAppointmentResponse) -> Self {
        match response.status {
            ApiStatus::Success => Self::Success {
                message: response.message,
            },
            ApiStatus::Error => Self::Error {
                message: response.message,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Result banner shown above the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Why `begin_submit` refused to hand out a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    NoSelection,
    AlreadyInFlight,
}

/// Claim on a single booking request; exactly one exists per confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingTicket {
    pub availability_id: i64,
}

/// What the caller must do after a booking resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterBooking {
    /// Capacity changed server-side; refetch availabilities and appointments.
    ReloadSchedule,
    /// The attempt failed; the selection is intact so the user can retry.
    KeepSelection,
}

/// Selection and submission state for the interview picker.
///
/// Transitions only happen through the methods below; in particular
/// [`InterviewSelection::begin_submit`] is the sole way to start a request,
/// and it refuses while one is in flight, so at most one booking call can
/// ever be outstanding per instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewSelection {
    selected: Option<DisplaySlot>,
    dialog_open: bool,
    submitting: bool,
    message: Option<OutcomeMessage>,
}

impl InterviewSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&DisplaySlot> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, availability_id: i64) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|slot| slot.availability_id == availability_id)
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&OutcomeMessage> {
        self.message.as_ref()
    }

    /// Picks a slot. Ignored for fully booked slots and while a request is
    /// in flight; picking a different slot just replaces the selection.
    pub fn select(&mut self, slot: &DisplaySlot) {
        if !slot.available || self.submitting {
            return;
        }
        self.selected = Some(slot.clone());
        self.message = None;
    }

    /// Opens the confirmation dialog; needs a selection.
    pub fn open_dialog(&mut self) {
        if self.selected.is_none() || self.submitting {
            return;
        }
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        if self.submitting {
            return;
        }
        self.dialog_open = false;
    }

    /// Flips into the submitting state and hands out the one ticket for
    /// this confirm action. A second call while in flight is rejected, so
    /// a double click can never produce two requests.
    pub fn begin_submit(&mut self) -> Result<BookingTicket, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::AlreadyInFlight);
        }
        let slot = self.selected.as_ref().ok_or(SubmitBlocked::NoSelection)?;
        let ticket = BookingTicket {
            availability_id: slot.availability_id,
        };
        self.submitting = true;
        Ok(ticket)
    }

    /// Applies the booking result. Success clears the selection and asks
    /// the caller to refetch; failure keeps the selection for a retry.
    pub fn resolve(&mut self, outcome: BookingOutcome) -> AfterBooking {
        self.submitting = false;
        self.dialog_open = false;
        match outcome {
            BookingOutcome::Success { message } => {
                self.selected = None;
                self.message = Some(OutcomeMessage {
                    kind: MessageKind::Success,
                    text: message,
                });
                AfterBooking::ReloadSchedule
            }
            BookingOutcome::Error { message } => {
                self.message = Some(OutcomeMessage {
                    kind: MessageKind::Error,
                    text: message,
                });
                AfterBooking::KeepSelection
            }
        }
    }

    /// Back to idle. No-op while a request is in flight.
    pub fn clear(&mut self) {
        if self.submitting {
            return;
        }
        self.selected = None;
        self.dialog_open = false;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(availability_id: i64, available: bool) -> DisplaySlot {
        let start_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        DisplaySlot {
            availability_id,
            start_at,
            date: start_at.date(),
            date_label: "Monday, March 2, 2026".to_string(),
            time_label: "09:00".to_string(),
            available,
            capacity: if available { 1 } else { 0 },
            professor_name: "Elena Vargas".to_string(),
            program_name: "MSc Systems Engineering".to_string(),
            academic_period_name: "2026-I".to_string(),
            mode: "in-person".to_string(),
            location: "Building A, Room 301".to_string(),
            meeting_link: String::new(),
        }
    }

    #[test]
    fn selecting_an_unavailable_slot_is_a_no_op() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(2, false));
        assert!(selection.selected().is_none());
    }

    #[test]
    fn selecting_another_slot_replaces_the_first() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(1, true));
        selection.select(&slot(3, true));
        assert!(selection.is_selected(3));
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn selecting_clears_a_previous_result_message() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(1, true));
        selection.begin_submit().unwrap();
        selection.resolve(BookingOutcome::Error {
            message: "The selected slot is full.".to_string(),
        });
        assert!(selection.message().is_some());

        selection.select(&slot(3, true));
        assert!(selection.message().is_none());
    }

    #[test]
    fn dialog_needs_a_selection() {
        let mut selection = InterviewSelection::new();
        selection.open_dialog();
        assert!(!selection.dialog_open());

        selection.select(&slot(1, true));
        selection.open_dialog();
        assert!(selection.dialog_open());
    }

    #[test]
    fn begin_submit_without_selection_is_blocked() {
        let mut selection = InterviewSelection::new();
        assert_eq!(selection.begin_submit(), Err(SubmitBlocked::NoSelection));
        assert!(!selection.submitting());
    }

    #[test]
    fn exactly_one_ticket_per_confirm() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(1, true));
        selection.open_dialog();

        let first = selection.begin_submit();
        assert_eq!(first, Ok(BookingTicket { availability_id: 1 }));

        // The impatient double click.
        let second = selection.begin_submit();
        assert_eq!(second, Err(SubmitBlocked::AlreadyInFlight));
    }

    #[test]
    fn success_clears_selection_and_requests_reload() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(1, true));
        selection.open_dialog();
        selection.begin_submit().unwrap();

        let after = selection.resolve(BookingOutcome::Success {
            message: "Appointment booked.".to_string(),
        });
        assert_eq!(after, AfterBooking::ReloadSchedule);
        assert!(selection.selected().is_none());
        assert!(!selection.dialog_open());
        assert_eq!(
            selection.message().map(|m| m.kind),
            Some(MessageKind::Success)
        );
    }

    #[test]
    fn failure_preserves_the_selection_for_retry() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(1, true));
        let before = selection.selected().cloned();
        selection.begin_submit().unwrap();

        let after = selection.resolve(BookingOutcome::connection_failure());
        assert_eq!(after, AfterBooking::KeepSelection);
        assert_eq!(selection.selected(), before.as_ref());
        assert!(!selection.submitting());
        assert_eq!(
            selection.message().map(|m| m.text.clone()),
            Some(CONNECTION_FAILURE_MESSAGE.to_string())
        );

        // Retry is a fresh confirm.
        assert!(selection.begin_submit().is_ok());
    }

    #[test]
    fn clear_is_refused_mid_flight() {
        let mut selection = InterviewSelection::new();
        selection.select(&slot(1, true));
        selection.begin_submit().unwrap();

        selection.clear();
        assert!(selection.submitting());
        assert!(selection.selected().is_some());

        selection.resolve(BookingOutcome::Success {
            message: "done".to_string(),
        });
        selection.clear();
        assert_eq!(selection, InterviewSelection::new());
    }

    #[test]
    fn backend_error_message_surfaces_verbatim() {
        let response = CreateAppointmentResponse {
            status: ApiStatus::Error,
            message: "The selected slot is full.".to_string(),
            data: None,
        };
        let outcome = BookingOutcome::from(response);
        assert_eq!(outcome.message(), "The selected slot is full.");
        assert!(!outcome.is_success());
    }
}
