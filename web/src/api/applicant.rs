//! Applicant-facing endpoints: the admission application, uploaded
//! documents and the interview-eligibility flag.

use shared_types::{
    ApplicantDetails, ApplicantDocument, ApplicationRequest, ApplicationResponse, StatusMessage,
    UploadDocumentResponse,
};

use super::{endpoint, get_data, get_data_or_default, http_client, ApiError};

/// Submits the admission application. Validation failures come back inside
/// [`ApplicationResponse`]; only transport problems surface as `Err`.
pub async fn submit_application(
    application: &ApplicationRequest,
) -> Result<ApplicationResponse, ApiError> {
    let response = http_client()
        .post(endpoint("/admission/apply"))
        .header(reqwest::header::ACCEPT, "application/json")
        .json(application)
        .send()
        .await?;

    Ok(response.json::<ApplicationResponse>().await?)
}

/// Uploads one document as multipart form data.
pub async fn upload_document(
    token: &str,
    file_name: &str,
    document_name: &str,
    bytes: Vec<u8>,
) -> Result<UploadDocumentResponse, ApiError> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new()
        .part("document", part)
        .text("document_name", document_name.to_string());

    let response = http_client()
        .post(endpoint("/admission/applicant/documents"))
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(token)
        .multipart(form)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<UploadDocumentResponse>().await?)
}

pub async fn fetch_applicant_documents(token: &str) -> Result<Vec<ApplicantDocument>, ApiError> {
    get_data_or_default("/admission/applicant/documents", Some(token)).await
}

pub async fn delete_document(token: &str, document_id: i64) -> Result<StatusMessage, ApiError> {
    let response = http_client()
        .delete(endpoint(&format!(
            "/admission/applicant/documents/{document_id}"
        )))
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<StatusMessage>().await?)
}

pub async fn fetch_applicant_details(token: &str) -> Result<ApplicantDetails, ApiError> {
    get_data("/admission/applicant/details", Some(token)).await
}

/// Whether the applicant's documents have been approved, opening interview
/// registration.
pub async fn can_register_for_interviews(token: &str) -> Result<bool, ApiError> {
    get_data(
        "/admission/applicant/can-register-for-interviews",
        Some(token),
    )
    .await
}
