use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{
    AcademicPeriod, ApplicantDetails, ApplicantDocument, ApplicationRequest, ApplicationResponse,
    Bank, DocumentType, InterviewAppointment, InterviewAvailability, LoginRequest, Program,
    ProgramDocumentsResponse, StatusMessage, University, UploadDocumentResponse,
};

use crate::scheduling::BookingOutcome;

#[cfg(feature = "ssr")]
use crate::api::{admission, applicant, auth, catalog};

/// Outcome of a login attempt, flattened for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub error: Option<String>,
}

#[server]
pub async fn login_user(credentials: LoginRequest) -> Result<AuthResult, ServerFnError> {
    match auth::login(&credentials).await {
        Ok(login) => Ok(AuthResult {
            success: true,
            token: Some(login.token),
            user_id: Some(login.user.id),
            user_name: Some(login.user.name),
            error: None,
        }),
        Err(err) => {
            let response = expect_context::<leptos_axum::ResponseOptions>();
            response.set_status(http::StatusCode::UNAUTHORIZED);
            Ok(AuthResult {
                success: false,
                token: None,
                user_id: None,
                user_name: None,
                error: Some(err.to_string()),
            })
        }
    }
}

#[server]
pub async fn logout_user(token: String) -> Result<(), ServerFnError> {
    // A dead backend session is already the state logout wants; failures
    // only get logged.
    if let Err(err) = auth::logout(&token).await {
        tracing::warn!(error = %err, "logout request failed");
    }
    Ok(())
}

#[server]
pub async fn get_interview_availabilities(
    token: String,
) -> Result<Vec<InterviewAvailability>, ServerFnError> {
    admission::fetch_interview_availabilities(&token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch availabilities: {}", e)))
}

#[server]
pub async fn get_interview_appointments(
    token: String,
) -> Result<Vec<InterviewAppointment>, ServerFnError> {
    admission::fetch_interview_appointments(&token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch appointments: {}", e)))
}

/// Books one slot. Always resolves to a [`BookingOutcome`]; the booking
/// client converts every failure mode into the error variant.
#[server]
pub async fn book_interview_slot(
    token: String,
    availability_id: i64,
) -> Result<BookingOutcome, ServerFnError> {
    Ok(admission::create_interview_appointment(&token, availability_id).await)
}

#[server]
pub async fn get_interview_eligibility(token: String) -> Result<bool, ServerFnError> {
    applicant::can_register_for_interviews(&token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to check eligibility: {}", e)))
}

#[server]
pub async fn get_applicant_details(token: String) -> Result<ApplicantDetails, ServerFnError> {
    applicant::fetch_applicant_details(&token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch applicant details: {}", e)))
}

#[server]
pub async fn submit_admission_application(
    application: ApplicationRequest,
) -> Result<ApplicationResponse, ServerFnError> {
    applicant::submit_application(&application)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to submit application: {}", e)))
}

#[server]
pub async fn get_applicant_documents(
    token: String,
) -> Result<Vec<ApplicantDocument>, ServerFnError> {
    applicant::fetch_applicant_documents(&token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch documents: {}", e)))
}

/// Uploads one document. The file content travels base64-encoded because
/// server-function arguments are form-encoded on the wire.
#[server]
pub async fn upload_applicant_document(
    token: String,
    file_name: String,
    document_name: String,
    content_base64: String,
) -> Result<UploadDocumentResponse, ServerFnError> {
    use base64::Engine;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(content_base64.as_bytes())
        .map_err(|e| ServerFnError::new(format!("Invalid file payload: {}", e)))?;

    applicant::upload_document(&token, &file_name, &document_name, bytes)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to upload document: {}", e)))
}

#[server]
pub async fn delete_applicant_document(
    token: String,
    document_id: i64,
) -> Result<StatusMessage, ServerFnError> {
    applicant::delete_document(&token, document_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete document: {}", e)))
}

#[server]
pub async fn get_programs() -> Result<Vec<Program>, ServerFnError> {
    catalog::fetch_programs()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch programs: {}", e)))
}

#[server]
pub async fn get_program(uuid: String) -> Result<Program, ServerFnError> {
    catalog::fetch_program_by_uuid(&uuid)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch program: {}", e)))
}

#[server]
pub async fn get_active_period() -> Result<AcademicPeriod, ServerFnError> {
    catalog::fetch_active_period()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch academic period: {}", e)))
}

#[server]
pub async fn get_universities() -> Result<Vec<University>, ServerFnError> {
    catalog::fetch_universities()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch universities: {}", e)))
}

#[server]
pub async fn get_banks() -> Result<Vec<Bank>, ServerFnError> {
    catalog::fetch_banks()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch banks: {}", e)))
}

#[server]
pub async fn get_document_types() -> Result<Vec<DocumentType>, ServerFnError> {
    catalog::fetch_document_types()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch document types: {}", e)))
}

#[server]
pub async fn get_program_documents(
    token: String,
    program_id: i64,
) -> Result<ProgramDocumentsResponse, ServerFnError> {
    catalog::fetch_program_documents(&token, program_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch program documents: {}", e)))
}
