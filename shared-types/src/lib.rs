use serde::{Deserialize, Serialize};

pub mod applicant;
pub mod application;
pub mod auth;
pub mod catalog;
pub mod documents;
pub mod interview;

pub use applicant::{AcademicPeriodSummary, ApplicantDetails, ProgramSummary, Student};
pub use application::{ApplicantRecord, ApplicationData, ApplicationRequest, ApplicationResponse};
pub use auth::{LoginRequest, LoginResponse, LogoutResponse, Role, User};
pub use catalog::{AcademicPeriod, Bank, DocumentType, Program, ProgramType, University};
pub use documents::{
    ApplicantDocument, ProgramDocument, ProgramDocumentsResponse, StatusMessage,
    UploadDocumentResponse, UploadedDocument,
};
pub use interview::{
    AppointmentData, CreateAppointmentRequest, CreateAppointmentResponse, InterviewAppointment,
    InterviewAvailability,
};

/// Response status used by every admission backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Generic `{status, message?, data?}` envelope the backend wraps list and
/// detail payloads in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&ApiStatus::Success).unwrap(),
            "\"success\""
        );
        let status: ApiStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(status, ApiStatus::Error);
    }

    #[test]
    fn envelope_tolerates_missing_message_and_data() {
        let envelope: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(envelope.status, ApiStatus::Success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }
}
