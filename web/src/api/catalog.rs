//! Public catalog endpoints backing the registration form and the program
//! document listings. None of these require authentication.

use shared_types::{
    AcademicPeriod, Bank, DocumentType, Program, ProgramDocumentsResponse, University,
};

use super::{endpoint, get_data, http_client, ApiError};

pub async fn fetch_programs() -> Result<Vec<Program>, ApiError> {
    get_data("/admission/programs", None).await
}

pub async fn fetch_program_by_uuid(uuid: &str) -> Result<Program, ApiError> {
    get_data(&format!("/admission/program/{uuid}"), None).await
}

pub async fn fetch_active_period() -> Result<AcademicPeriod, ApiError> {
    get_data("/admission/period", None).await
}

pub async fn fetch_universities() -> Result<Vec<University>, ApiError> {
    get_data("/admission/universities", None).await
}

pub async fn fetch_banks() -> Result<Vec<Bank>, ApiError> {
    get_data("/admission/banks", None).await
}

pub async fn fetch_document_types() -> Result<Vec<DocumentType>, ApiError> {
    get_data("/admission/document-types", None).await
}

/// Program documents come in a bespoke envelope carrying the program name.
pub async fn fetch_program_documents(
    token: &str,
    program_id: i64,
) -> Result<ProgramDocumentsResponse, ApiError> {
    let response = http_client()
        .get(endpoint(&format!(
            "/admission/programs/{program_id}/documents"
        )))
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<ProgramDocumentsResponse>().await?)
}
