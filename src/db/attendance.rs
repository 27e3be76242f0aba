//! Student and teacher attendance queries.
//!
//! Both tables hold at most one mark per person per date. Recording a mark
//! for a date that already has one replaces its status and keeps the row id.

use super::{Attendance, Store, TeacherAttendance};
use crate::models::{AttendanceInput, TeacherAttendanceInput};
use tracing::debug;

impl Store {
    /// Lists every student attendance mark, newest date first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_attendance(&self) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM attendance ORDER BY date DESC, id")
            .fetch_all(self.pool())
            .await
    }

    /// Lists the attendance marks of one student, newest date first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn attendance_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM attendance WHERE student_id = ? ORDER BY date DESC")
            .bind(student_id)
            .fetch_all(self.pool())
            .await
    }

    /// Records a student's status for a date, replacing any earlier mark.
    ///
    /// # Errors
    /// Returns an error if a field is missing or the student does not exist.
    pub async fn upsert_attendance(&self, input: &AttendanceInput) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO attendance (student_id, date, status)
            VALUES (?, ?, ?)
            ON CONFLICT (student_id, date) DO UPDATE SET status = excluded.status
            "#,
        )
        .bind(input.student_id)
        .bind(input.date.as_deref())
        .bind(input.status)
        .execute(self.pool())
        .await?;

        debug!(student_id = ?input.student_id, date = ?input.date, "Recorded attendance");
        Ok(())
    }

    /// Deletes a student attendance mark by id. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub async fn delete_attendance(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Lists every teacher attendance mark, newest date first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_teacher_attendance(&self) -> Result<Vec<TeacherAttendance>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM teacher_attendance ORDER BY date DESC, id")
            .fetch_all(self.pool())
            .await
    }

    /// Lists the attendance marks of one teacher, newest date first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn attendance_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherAttendance>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM teacher_attendance WHERE teacher_id = ? ORDER BY date DESC")
            .bind(teacher_id)
            .fetch_all(self.pool())
            .await
    }

    /// Records a teacher's status for a date, replacing any earlier mark.
    ///
    /// # Errors
    /// Returns an error if a field is missing or the teacher does not exist.
    pub async fn upsert_teacher_attendance(
        &self,
        input: &TeacherAttendanceInput,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO teacher_attendance (teacher_id, date, status)
            VALUES (?, ?, ?)
            ON CONFLICT (teacher_id, date) DO UPDATE SET status = excluded.status
            "#,
        )
        .bind(input.teacher_id)
        .bind(input.date.as_deref())
        .bind(input.status)
        .execute(self.pool())
        .await?;

        debug!(teacher_id = ?input.teacher_id, date = ?input.date, "Recorded teacher attendance");
        Ok(())
    }

    /// Deletes a teacher attendance mark by id. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub async fn delete_teacher_attendance(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teacher_attendance WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DatabaseConfig;
    use crate::db::{AttendanceStatus, Store, test_store};
    use crate::models::{AttendanceInput, StudentInput, TeacherAttendanceInput, TeacherInput};
    use sqlx::error::ErrorKind;

    async fn seed_student(store: &Store) -> i64 {
        store
            .create_student(&StudentInput {
                first_name: Some("Tom".to_string()),
                last_name: Some("Ng".to_string()),
                class_id: None,
            })
            .await
            .unwrap()
    }

    async fn seed_teacher(store: &Store) -> i64 {
        store
            .create_teacher(&TeacherInput {
                first_name: Some("Ann".to_string()),
                last_name: Some("Lee".to_string()),
                subject: None,
            })
            .await
            .unwrap()
    }

    fn mark(student_id: i64, date: &str, status: AttendanceStatus) -> AttendanceInput {
        AttendanceInput {
            student_id: Some(student_id),
            date: Some(date.to_string()),
            status: Some(status),
        }
    }

    #[tokio::test]
    async fn test_resubmission_replaces_status() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;

        store
            .upsert_attendance(&mark(student_id, "2024-01-10", AttendanceStatus::Present))
            .await
            .unwrap();
        store
            .upsert_attendance(&mark(student_id, "2024-01-10", AttendanceStatus::Late))
            .await
            .unwrap();

        let rows = store.attendance_for_student(student_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn test_student_rows_ordered_by_date_desc() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;

        for date in ["2024-01-09", "2024-01-11", "2024-01-10"] {
            store
                .upsert_attendance(&mark(student_id, date, AttendanceStatus::Present))
                .await
                .unwrap();
        }

        let dates: Vec<String> = store
            .attendance_for_student(student_id)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-11", "2024-01-10", "2024-01-09"]);
    }

    #[tokio::test]
    async fn test_filter_by_student() {
        let store = test_store().await;
        let first = seed_student(&store).await;
        let second = seed_student(&store).await;

        store
            .upsert_attendance(&mark(first, "2024-01-10", AttendanceStatus::Present))
            .await
            .unwrap();
        store
            .upsert_attendance(&mark(second, "2024-01-10", AttendanceStatus::Absent))
            .await
            .unwrap();

        let rows = store.attendance_for_student(second).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_id, second);
        assert_eq!(store.list_attendance().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_student_is_rejected() {
        let store = test_store().await;

        let err = store
            .upsert_attendance(&mark(9, "2024-01-10", AttendanceStatus::Present))
            .await
            .unwrap_err();
        let kind = err.as_database_error().map(|e| e.kind());
        assert!(matches!(kind, Some(ErrorKind::ForeignKeyViolation)));
    }

    #[tokio::test]
    async fn test_missing_status_is_rejected() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;
        let input = AttendanceInput {
            student_id: Some(student_id),
            date: Some("2024-01-10".to_string()),
            status: None,
        };

        let err = store.upsert_attendance(&input).await.unwrap_err();
        let kind = err.as_database_error().map(|e| e.kind());
        assert!(matches!(kind, Some(ErrorKind::NotNullViolation)));
    }

    #[tokio::test]
    async fn test_status_check_constraint() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;

        let err = sqlx::query("INSERT INTO attendance (student_id, date, status) VALUES (?, ?, ?)")
            .bind(student_id)
            .bind("2024-01-10")
            .bind("sick")
            .execute(store.pool())
            .await
            .unwrap_err();
        let kind = err.as_database_error().map(|e| e.kind());
        assert!(matches!(kind, Some(ErrorKind::CheckViolation)));
    }

    #[tokio::test]
    async fn test_teacher_attendance_upsert() {
        let store = test_store().await;
        let teacher_id = seed_teacher(&store).await;
        let input = |status| TeacherAttendanceInput {
            teacher_id: Some(teacher_id),
            date: Some("2024-02-01".to_string()),
            status: Some(status),
        };

        store.upsert_teacher_attendance(&input(AttendanceStatus::Absent)).await.unwrap();
        store.upsert_teacher_attendance(&input(AttendanceStatus::Present)).await.unwrap();

        let rows = store.attendance_for_teacher(teacher_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, AttendanceStatus::Present);
        assert_eq!(store.list_teacher_attendance().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_marks() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;
        let teacher_id = seed_teacher(&store).await;
        store
            .upsert_attendance(&mark(student_id, "2024-01-10", AttendanceStatus::Present))
            .await
            .unwrap();
        store
            .upsert_teacher_attendance(&TeacherAttendanceInput {
                teacher_id: Some(teacher_id),
                date: Some("2024-01-10".to_string()),
                status: Some(AttendanceStatus::Present),
            })
            .await
            .unwrap();

        assert_eq!(store.delete_attendance(1).await.unwrap(), 1);
        assert_eq!(store.delete_teacher_attendance(1).await.unwrap(), 1);
        assert_eq!(store.delete_teacher_attendance(1).await.unwrap(), 0);
        assert!(store.list_attendance().await.unwrap().is_empty());
        assert!(store.list_teacher_attendance().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts_on_pooled_file_store() {
        let dir = std::env::temp_dir().join(format!("school-upsert-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.join("upsert.db").display()),
            max_connections: 5,
            busy_timeout_ms: 5000,
        };
        let store = Store::open(&config).await.unwrap();
        store.initialize().await.unwrap();
        let student_id = seed_student(&store).await;

        let statuses = [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ];
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                let input = mark(student_id, "2024-03-01", statuses[i % statuses.len()]);
                tokio::spawn(async move { store.upsert_attendance(&input).await })
            })
            .collect();

        let mut failures = 0;
        for handle in handles {
            if handle.await.unwrap().is_err() {
                failures += 1;
            }
        }
        assert_eq!(failures, 0);

        let rows = store.attendance_for_student(student_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-03-01");
        assert!(statuses.contains(&rows[0].status));

        store.close().await;
        let _ = std::fs::remove_dir_all(&dir);
    }
}
