use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ApiStatus;

/// Body of `POST /admission/apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub first_name: String,
    pub last_name: String,
    pub personal_email: String,
    pub phones: String,
    pub document_type: String,
    pub document_number: String,
    pub program_id: i64,
    pub academic_period_id: i64,
    pub payment_order_bank: String,
    pub birth_date: String,
    pub university_id: i64,
    pub undergraduate_major: String,
    pub with_invoice: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: i64,
    pub student_id: i64,
    pub academic_period_id: i64,
    pub program_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationData {
    pub applicant: ApplicantRecord,
}

/// Union of the backend's success and validation-error shapes: on success
/// `data` is set, on error `errors` maps field names to messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub status: ApiStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ApplicationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApplicationResponse {
    /// Field-level messages for a given input, if the backend rejected it.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(|messages| messages.as_slice())
    }

    /// The backend reports duplicates as per-field "already been taken"
    /// validation errors on the unique columns.
    pub fn is_duplicate_applicant(&self) -> bool {
        ["personal_email", "document_number"].iter().any(|field| {
            self.field_errors(field)
                .is_some_and(|messages| messages.iter().any(|m| m.contains("already been taken")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_reachable_per_field() {
        let raw = r#"{
            "status": "error",
            "message": "The given data was invalid.",
            "errors": {
                "personal_email": ["The personal email has already been taken."],
                "phones": ["The phones field is required."]
            }
        }"#;
        let response: ApplicationResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, ApiStatus::Error);
        assert_eq!(
            response.field_errors("phones"),
            Some(&["The phones field is required.".to_string()][..])
        );
        assert!(response.is_duplicate_applicant());
    }

    #[test]
    fn success_response_carries_applicant_record() {
        let raw = r#"{
            "status": "success",
            "message": "Application received.",
            "data": {
                "applicant": {
                    "id": 11,
                    "student_id": 5,
                    "academic_period_id": 2,
                    "program_id": 3,
                    "created_at": "2026-02-10T12:00:00",
                    "updated_at": "2026-02-10T12:00:00"
                }
            }
        }"#;
        let response: ApplicationResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.is_duplicate_applicant());
        assert_eq!(response.data.unwrap().applicant.id, 11);
    }

    #[test]
    fn invoice_fields_are_omitted_when_absent() {
        let request = ApplicationRequest {
            first_name: "Ana".into(),
            last_name: "Quispe".into(),
            personal_email: "ana@example.com".into(),
            phones: "987654321".into(),
            document_type: "dni".into(),
            document_number: "12345678".into(),
            program_id: 3,
            academic_period_id: 2,
            payment_order_bank: "BCP".into(),
            birth_date: "1995-06-15".into(),
            university_id: 1,
            undergraduate_major: "Industrial Engineering".into(),
            with_invoice: false,
            ruc_number: None,
            business_name: None,
            business_address: None,
            registered_address: None,
        };
        let body = serde_json::to_string(&request).unwrap();
        assert!(!body.contains("ruc_number"));
        assert!(body.contains("\"with_invoice\":false"));
    }
}
