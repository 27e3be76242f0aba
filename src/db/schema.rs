//! Database schema types and queries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Table definitions, applied in order by [`Store::initialize`](super::Store::initialize).
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        class_id INTEGER,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY (class_id) REFERENCES classes(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teachers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        subject TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS classes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        teacher_id INTEGER,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY (teacher_id) REFERENCES teachers(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        status TEXT NOT NULL CHECK (status IN ('present', 'absent', 'late')),
        FOREIGN KEY (student_id) REFERENCES students(id),
        UNIQUE (student_id, date)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teacher_attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        teacher_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        status TEXT NOT NULL CHECK (status IN ('present', 'absent', 'late')),
        FOREIGN KEY (teacher_id) REFERENCES teachers(id),
        UNIQUE (teacher_id, date)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS salaries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        teacher_id INTEGER NOT NULL,
        month TEXT NOT NULL,
        amount REAL NOT NULL,
        paid INTEGER NOT NULL DEFAULT 0,
        FOREIGN KEY (teacher_id) REFERENCES teachers(id),
        UNIQUE (teacher_id, month)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS grades (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL,
        subject TEXT NOT NULL,
        score REAL NOT NULL,
        term TEXT NOT NULL,
        FOREIGN KEY (student_id) REFERENCES students(id)
    )
    "#,
];

/// Attendance mark for a single day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
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

/// Student record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    /// Unique identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Class the student belongs to, if any.
    pub class_id: Option<i64>,
    /// Record creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Teacher record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    /// Unique identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Subject taught, if any.
    pub subject: Option<String>,
    /// Record creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Class record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    /// Unique identifier.
    pub id: i64,
    /// Class name (e.g., "Algebra").
    pub name: String,
    /// Homeroom teacher, if any.
    pub teacher_id: Option<i64>,
    /// Record creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}

/// Student attendance record. One per student per date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attendance {
    /// Unique identifier.
    pub id: i64,
    /// Student the mark belongs to.
    pub student_id: i64,
    /// Day of the mark (YYYY-MM-DD).
    pub date: String,
    /// Attendance status.
    pub status: AttendanceStatus,
}

/// Teacher attendance record. One per teacher per date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeacherAttendance {
    /// Unique identifier.
    pub id: i64,
    /// Teacher the mark belongs to.
    pub teacher_id: i64,
    /// Day of the mark (YYYY-MM-DD).
    pub date: String,
    /// Attendance status.
    pub status: AttendanceStatus,
}

/// Salary record. One per teacher per month.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Salary {
    /// Unique identifier.
    pub id: i64,
    /// Teacher being paid.
    pub teacher_id: i64,
    /// Pay period (YYYY-MM).
    pub month: String,
    /// Amount owed.
    pub amount: f64,
    /// Whether the amount has been paid out.
    pub paid: bool,
}

/// Grade record. A student may hold several grades for the same subject and term.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Grade {
    /// Unique identifier.
    pub id: i64,
    /// Graded student.
    pub student_id: i64,
    /// Subject name.
    pub subject: String,
    /// Score obtained.
    pub score: f64,
    /// Term label (e.g., "2024-T1").
    pub term: String,
}

/// Row counts reported by the statistics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EntityCounts {
    /// Number of students.
    pub students: i64,
    /// Number of teachers.
    pub teachers: i64,
    /// Number of classes.
    pub classes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_every_table() {
        let tables = [
            "students",
            "teachers",
            "classes",
            "attendance",
            "teacher_attendance",
            "salaries",
            "grades",
        ];
        assert_eq!(SCHEMA.len(), tables.len());
        for (statement, table) in SCHEMA.iter().zip(tables) {
            assert!(statement.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)));
        }
    }

    #[test]
    fn test_attendance_status_wire_format() {
        let json = serde_json::to_string(&AttendanceStatus::Late).unwrap();
        assert_eq!(json, "\"late\"");

        let status: AttendanceStatus = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
        assert_eq!(status.to_string(), "absent");

        assert!(serde_json::from_str::<AttendanceStatus>("\"excused\"").is_err());
    }

    #[test]
    fn test_salary_serializes_paid_as_bool() {
        let salary = Salary {
            id: 1,
            teacher_id: 2,
            month: "2024-01".to_string(),
            amount: 2500.5,
            paid: true,
        };
        let json = serde_json::to_value(&salary).unwrap();
        assert_eq!(json["paid"], serde_json::json!(true));
        assert_eq!(json["amount"], serde_json::json!(2500.5));
    }
}
