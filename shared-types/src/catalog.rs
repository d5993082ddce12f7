use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramType {
    pub id: i64,
    pub name: String,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub program_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_types: Option<ProgramType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub admission: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    pub name: String,
}

/// Identity-document kinds offered on the registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentType {
    pub id: String,
    pub name: String,
}
