use serde::{Deserialize, Serialize};

use crate::ApiStatus;

/// A file the applicant has uploaded for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantDocument {
    pub id: i64,
    pub document_name: String,
    pub document_path: Option<String>,
    pub document_type: Option<String>,
    pub document_size: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub full_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub path: String,
    pub document_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadDocumentResponse {
    pub status: ApiStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<UploadedDocument>,
}

/// Downloadable document published for a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDocument {
    pub id: i64,
    pub program_id: i64,
    pub document_name: String,
    pub document_path: String,
    pub document_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_size: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub full_url: String,
}

/// `GET /admission/programs/{id}/documents` uses its own envelope carrying
/// the program name next to the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDocumentsResponse {
    pub status: ApiStatus,
    pub program: String,
    pub data: Vec<ProgramDocument>,
}

/// Bare `{status, message}` acknowledgement, e.g. for document deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: ApiStatus,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_documents_envelope_carries_program_name() {
        let raw = r#"{
            "status": "success",
            "program": "MSc Systems Engineering",
            "data": [{
                "id": 1,
                "program_id": 3,
                "document_name": "Admission guide",
                "document_path": "programs/3/guide.pdf",
                "document_type": "application/pdf",
                "document_size": "1.2 MB",
                "created_at": "2026-01-05T10:00:00",
                "updated_at": "2026-01-05T10:00:00",
                "full_url": "https://api.example.edu/storage/programs/3/guide.pdf"
            }]
        }"#;
        let response: ProgramDocumentsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.program, "MSc Systems Engineering");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].document_type, "application/pdf");
    }
}
