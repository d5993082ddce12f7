//! Interview scheduling core: grouping of published availabilities,
//! the selection/booking state machine, and the gate that decides which
//! branch of the interview page to render. Pure code, no I/O.

pub mod grouping;
pub mod resolver;
pub mod selection;

pub use grouping::{format_start_label, group_by_date, DaySchedule, DisplaySlot, GroupedSchedule};
pub use resolver::{resolve_interview_view, InterviewGate};
pub use selection::{
    AfterBooking, BookingOutcome, BookingTicket, InterviewSelection, MessageKind, OutcomeMessage,
    SubmitBlocked,
};
