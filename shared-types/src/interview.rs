use serde::{Deserialize, Serialize};

use crate::ApiStatus;

/// A bookable interview time window published by an interviewer.
///
/// `capacity == 0` means the slot is fully booked; the backend keeps such
/// slots in the listing so clients can render them as unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewAvailability {
    pub id: i64,
    pub interviewer_start_at: String,
    pub interviewer_end_at: String,
    pub professor_name: String,
    pub academic_period_name: String,
    pub program_name: String,
    pub capacity: i64,
    pub mode: String,
    pub location: String,
    pub meeting_link: String,
}

/// A confirmed booking linking the applicant to one availability slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewAppointment {
    pub interviewer_start_at: String,
    pub interviewer_end_at: String,
    pub mode: String,
    pub location: String,
    pub meeting_link: String,
    pub program_name: String,
    pub professor_first_name: String,
    pub professor_last_name: String,
}

/// Body of `POST /admission/interview-appointments`. The misspelled field
/// name is the backend's; changing it breaks the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub interviewer_availabilitie_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentData {
    pub appointment: InterviewAppointment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    pub status: ApiStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AppointmentData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_parses_backend_listing() {
        let raw = r#"{
            "id": 7,
            "interviewer_start_at": "2026-03-02T09:00:00",
            "interviewer_end_at": "2026-03-02T09:30:00",
            "professor_name": "Elena Vargas",
            "academic_period_name": "2026-I",
            "program_name": "MSc Systems Engineering",
            "capacity": 0,
            "academic_period": null,
            "program": null,
            "professor": null,
            "mode": "virtual",
            "location": "Online",
            "meeting_link": "https://meet.example.edu/abc"
        }"#;
        let slot: InterviewAvailability = serde_json::from_str(raw).unwrap();
        assert_eq!(slot.id, 7);
        assert_eq!(slot.capacity, 0);
        assert_eq!(slot.mode, "virtual");
    }

    #[test]
    fn create_request_keeps_backend_field_name() {
        let body = serde_json::to_string(&CreateAppointmentRequest {
            interviewer_availabilitie_id: 42,
        })
        .unwrap();
        assert_eq!(body, r#"{"interviewer_availabilitie_id":42}"#);
    }

    #[test]
    fn create_response_error_has_no_data() {
        let raw = r#"{"status":"error","message":"The selected slot is full."}"#;
        let response: CreateAppointmentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, ApiStatus::Error);
        assert!(response.data.is_none());
    }

    #[test]
    fn create_response_success_carries_appointment() {
        let raw = r#"{
            "status": "success",
            "message": "Appointment booked.",
            "data": {
                "appointment": {
                    "interviewer_start_at": "2026-03-02T09:00:00",
                    "interviewer_end_at": "2026-03-02T09:30:00",
                    "mode": "in-person",
                    "location": "Building A, Room 301",
                    "meeting_link": "",
                    "program_name": "MSc Systems Engineering",
                    "professor_first_name": "Elena",
                    "professor_last_name": "Vargas"
                }
            }
        }"#;
        let response: CreateAppointmentResponse = serde_json::from_str(raw).unwrap();
        let appointment = response.data.unwrap().appointment;
        assert_eq!(appointment.professor_last_name, "Vargas");
    }
}
