//! Interview endpoints: the availability listing and the appointment
//! booking client.

use shared_types::{
    CreateAppointmentRequest, CreateAppointmentResponse, InterviewAppointment,
    InterviewAvailability,
};

use super::{endpoint, get_data, get_data_or_default, http_client, ApiError};
use crate::scheduling::BookingOutcome;

pub async fn fetch_interview_availabilities(
    token: &str,
) -> Result<Vec<InterviewAvailability>, ApiError> {
    get_data("/admission/interview-availabilities", Some(token)).await
}

/// The applicant's existing appointments; a missing `data` field means none.
pub async fn fetch_interview_appointments(
    token: &str,
) -> Result<Vec<InterviewAppointment>, ApiError> {
    get_data_or_default("/admission/interview-appointments", Some(token)).await
}

/// Books one availability slot for the authenticated applicant.
///
/// Total by contract: a blank token short-circuits before any network I/O,
/// transport failures map to a generic connection error, and backend
/// rejections pass the backend's message through verbatim. The body is
/// parsed regardless of the HTTP status code because the backend ships its
/// business rejections with 4xx statuses and the same JSON shape.
pub async fn create_interview_appointment(token: &str, availability_id: i64) -> BookingOutcome {
    if token.trim().is_empty() {
        return BookingOutcome::session_expired();
    }

    let request = CreateAppointmentRequest {
        interviewer_availabilitie_id: availability_id,
    };

    let sent = http_client()
        .post(endpoint("/admission/interview-appointments"))
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(token)
        .json(&request)
        .send()
        .await;

    let response = match sent {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, availability_id, "appointment request failed to send");
            return BookingOutcome::connection_failure();
        }
    };

    match response.json::<CreateAppointmentResponse>().await {
        Ok(body) => BookingOutcome::from(body),
        Err(err) => {
            tracing::warn!(error = %err, availability_id, "appointment response was unreadable");
            BookingOutcome::connection_failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::selection::SESSION_EXPIRED_MESSAGE;

    #[tokio::test]
    async fn blank_token_short_circuits_without_a_request() {
        // No backend is listening in the test environment; reaching the
        // network would fail with a connection error, not this message.
        let outcome = create_interview_appointment("   ", 1).await;
        assert_eq!(outcome.message(), SESSION_EXPIRED_MESSAGE);
        assert!(!outcome.is_success());
    }
}
