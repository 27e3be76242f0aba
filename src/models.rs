//! Request and response models for the REST API.
//!
//! Request bodies keep the store's required columns optional: a missing
//! field is passed through as `NULL` and rejected by the column's
//! `NOT NULL` constraint, which the error layer reports as a validation
//! error.

use crate::db::AttendanceStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Request Bodies
// ============================================================================

/// Body for creating or updating a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StudentInput {
    /// Given name (required).
    pub first_name: Option<String>,
    /// Family name (required).
    pub last_name: Option<String>,
    /// Class to enrol the student in.
    pub class_id: Option<i64>,
}

/// Body for creating or updating a teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TeacherInput {
    /// Given name (required).
    pub first_name: Option<String>,
    /// Family name (required).
    pub last_name: Option<String>,
    /// Subject taught.
    pub subject: Option<String>,
}

/// Body for creating or updating a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ClassInput {
    /// Class name (required).
    pub name: Option<String>,
    /// Teacher in charge of the class.
    pub teacher_id: Option<i64>,
}

/// Body for recording a student's attendance on a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AttendanceInput {
    /// Student (required).
    pub student_id: Option<i64>,
    /// Day of the mark, YYYY-MM-DD (required).
    pub date: Option<String>,
    /// Attendance status (required).
    pub status: Option<AttendanceStatus>,
}

/// Body for recording a teacher's attendance on a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TeacherAttendanceInput {
    /// Teacher (required).
    pub teacher_id: Option<i64>,
    /// Day of the mark, YYYY-MM-DD (required).
    pub date: Option<String>,
    /// Attendance status (required).
    pub status: Option<AttendanceStatus>,
}

/// Body for recording a teacher's salary for a month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SalaryInput {
    /// Teacher (required).
    pub teacher_id: Option<i64>,
    /// Pay period, YYYY-MM (required).
    pub month: Option<String>,
    /// Amount owed (required).
    pub amount: Option<f64>,
    /// Whether the salary has been paid. Defaults to `false`.
    pub paid: Option<bool>,
}

/// Body for creating or updating a grade.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GradeInput {
    /// Graded student (required).
    pub student_id: Option<i64>,
    /// Subject name (required).
    pub subject: Option<String>,
    /// Score obtained (required).
    pub score: Option<f64>,
    /// Term label (required).
    pub term: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Identifier assigned to a newly created row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// New row identifier.
    pub id: i64,
}

/// Acknowledgement for mutations that return no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OkResponse {
    /// Always `true`.
    pub ok: bool,
}

impl OkResponse {
    /// The acknowledgement value.
    pub const OK: Self = Self { ok: true };
}
