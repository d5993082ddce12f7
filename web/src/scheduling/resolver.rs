use shared_types::InterviewAppointment;

/// Which branch of the interview page to render.
#[derive(Debug, Clone, PartialEq)]
pub enum InterviewGate {
    /// Documents not yet approved; registration is not open for this
    /// applicant.
    RegistrationClosed,
    /// The applicant already holds an appointment; show its summary and
    /// suppress the picker. One appointment per applicant is a backend
    /// invariant, so the first entry is the appointment.
    AlreadyScheduled(InterviewAppointment),
    /// Eligible and unscheduled; show the slot picker.
    Picker,
}

pub fn resolve_interview_view(
    can_register: bool,
    mut appointments: Vec<InterviewAppointment>,
) -> InterviewGate {
    if !can_register {
        return InterviewGate::RegistrationClosed;
    }
    if appointments.is_empty() {
        InterviewGate::Picker
    } else {
        InterviewGate::AlreadyScheduled(appointments.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment() -> InterviewAppointment {
        InterviewAppointment {
            interviewer_start_at: "2026-03-02T09:00:00".to_string(),
            interviewer_end_at: "2026-03-02T09:30:00".to_string(),
            mode: "virtual".to_string(),
            location: "Online".to_string(),
            meeting_link: "https://meet.example.edu/abc".to_string(),
            program_name: "MSc Systems Engineering".to_string(),
            professor_first_name: "Elena".to_string(),
            professor_last_name: "Vargas".to_string(),
        }
    }

    #[test]
    fn ineligible_applicant_sees_the_closed_notice() {
        assert_eq!(
            resolve_interview_view(false, vec![]),
            InterviewGate::RegistrationClosed
        );
        // The gate wins even with an appointment on file.
        assert_eq!(
            resolve_interview_view(false, vec![appointment()]),
            InterviewGate::RegistrationClosed
        );
    }

    #[test]
    fn existing_appointment_suppresses_the_picker() {
        let gate = resolve_interview_view(true, vec![appointment()]);
        match gate {
            InterviewGate::AlreadyScheduled(scheduled) => {
                assert_eq!(scheduled.professor_last_name, "Vargas");
            }
            other => panic!("expected AlreadyScheduled, got {other:?}"),
        }
    }

    #[test]
    fn no_appointments_means_picker() {
        assert_eq!(resolve_interview_view(true, vec![]), InterviewGate::Picker);
    }
}
