//! Request and response types for the school API.

use serde::{Deserialize, Serialize};


/// Attendance mark for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Attended.
    Present,
    /// Did not attend.
    Absent,
    /// Arrived late.
    Late,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
            Self::Late => write!(f, "late"),
        }
    }
}

// ============================================================================
// Health & Stats
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Row counts response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Number of students.
    pub students: i64,
    /// Number of teachers.
    pub teachers: i64,
    /// Number of classes.
    pub classes: i64,
}

/// Identifier assigned to a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// New row identifier.
    pub id: i64,
}

/// Acknowledgement for mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    /// Always `true` on success.
    pub ok: bool,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

// ============================================================================
// Rows
// ============================================================================

/// Student row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Class, if enrolled.
    pub class_id: Option<i64>,
    /// Creation timestamp as returned by the server.
    pub created_at: String,
}

/// Teacher row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Subject taught.
    pub subject: Option<String>,
    /// Creation timestamp as returned by the server.
    pub created_at: String,
}

/// Class row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Identifier.
    pub id: i64,
    /// Class name.
    pub name: String,
    /// Teacher in charge.
    pub teacher_id: Option<i64>,
    /// Creation timestamp as returned by the server.
    pub created_at: String,
}

/// Student attendance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Identifier.
    pub id: i64,
    /// Student.
    pub student_id: i64,
    /// Day (YYYY-MM-DD).
    pub date: String,
    /// Status.
    pub status: AttendanceStatus,
}

/// Teacher attendance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherAttendance {
    /// Identifier.
    pub id: i64,
    /// Teacher.
    pub teacher_id: i64,
    /// Day (YYYY-MM-DD).
    pub date: String,
    /// Status.
    pub status: AttendanceStatus,
}

/// Salary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    /// Identifier.
    pub id: i64,
    /// Teacher.
    pub teacher_id: i64,
    /// Pay period (YYYY-MM).
    pub month: String,
    /// Amount.
    pub amount: f64,
    /// Paid flag.
    pub paid: bool,
}

/// Grade row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Identifier.
    pub id: i64,
    /// Student.
    pub student_id: i64,
    /// Subject.
    pub subject: String,
    /// Score.
    pub score: f64,
    /// Term label.
    pub term: String,
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body for creating or updating a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentInput {
    /// Given name (required by the server).
    pub first_name: Option<String>,
    /// Family name (required by the server).
    pub last_name: Option<String>,
    /// Class to enrol in.
    pub class_id: Option<i64>,
}

/// Body for creating or updating a teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherInput {
    /// Given name (required by the server).
    pub first_name: Option<String>,
    /// Family name (required by the server).
    pub last_name: Option<String>,
    /// Subject taught.
    pub subject: Option<String>,
}

/// Body for creating or updating a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassInput {
    /// Class name (required by the server).
    pub name: Option<String>,
    /// Teacher in charge.
    pub teacher_id: Option<i64>,
}

/// Body for recording student attendance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceInput {
    /// Student.
    pub student_id: Option<i64>,
    /// Day (YYYY-MM-DD).
    pub date: Option<String>,
    /// Status.
    pub status: Option<AttendanceStatus>,
}

/// Body for recording teacher attendance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherAttendanceInput {
    /// Teacher.
    pub teacher_id: Option<i64>,
    /// Day (YYYY-MM-DD).
    pub date: Option<String>,
    /// Status.
    pub status: Option<AttendanceStatus>,
}

/// Body for recording a salary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Teacher.
    pub teacher_id: Option<i64>,
    /// Pay period (YYYY-MM).
    pub month: Option<String>,
    /// Amount.
    pub amount: Option<f64>,
    /// Paid flag; the server defaults it to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}

/// Body for creating or updating a grade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeInput {
    /// Student.
    pub student_id: Option<i64>,
    /// Subject.
    pub subject: Option<String>,
    /// Score.
    pub score: Option<f64>,
    /// Term label.
    pub term: Option<String>,
}
