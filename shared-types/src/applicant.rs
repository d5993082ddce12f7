use serde::{Deserialize, Serialize};

/// Student record attached to the applicant detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub code: String,
    pub last_name: String,
    pub first_name: String,
    pub personal_email: String,
    pub uni_email: Option<String>,
    pub phones: String,
    pub document_type: String,
    pub document_number: String,
    pub user_id: i64,
    pub birth_date: String,
    pub payment_order_bank: String,
    pub university_id: i64,
    pub undergraduate_major: String,
    pub with_invoice: bool,
    pub ruc_number: Option<String>,
    pub business_name: Option<String>,
    pub registered_address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub program_type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicPeriodSummary {
    pub id: i64,
    pub name: String,
    pub admission: bool,
    pub active: bool,
}

/// Payload of `GET /admission/applicant/details`: the applicant row plus its
/// student, program and academic-period relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub id: i64,
    pub student_id: i64,
    pub academic_period_id: i64,
    pub program_id: i64,
    pub prospecto: bool,
    pub admission: bool,
    pub is_accepted: bool,
    pub created_at: String,
    pub updated_at: String,
    pub student: Student,
    pub program: ProgramSummary,
    pub academic_period: AcademicPeriodSummary,
}
