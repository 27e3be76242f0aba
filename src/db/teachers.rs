//! Teacher queries.

use super::{Store, Teacher};
use crate::models::TeacherInput;
use tracing::debug;

impl Store {
    /// Lists every teacher in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM teachers ORDER BY id")
            .fetch_all(self.pool())
            .await
    }

    /// Inserts a teacher and returns its new identifier.
    ///
    /// # Errors
    /// Returns an error if a required field is missing.
    pub async fn create_teacher(&self, input: &TeacherInput) -> Result<i64, sqlx::Error> {
        let id = sqlx::query("INSERT INTO teachers (first_name, last_name, subject) VALUES (?, ?, ?)")
            .bind(input.first_name.as_deref())
            .bind(input.last_name.as_deref())
            .bind(input.subject.as_deref())
            .execute(self.pool())
            .await?
            .last_insert_rowid();

        debug!(id, "Created teacher");
        Ok(id)
    }

    /// Overwrites the mutable fields of a teacher. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if a required field is missing.
    pub async fn update_teacher(&self, id: i64, input: &TeacherInput) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE teachers SET first_name = ?, last_name = ?, subject = ? WHERE id = ?")
                .bind(input.first_name.as_deref())
                .bind(input.last_name.as_deref())
                .bind(input.subject.as_deref())
                .bind(id)
                .execute(self.pool())
                .await?;

        debug!(id, rows = result.rows_affected(), "Updated teacher");
        Ok(result.rows_affected())
    }

    /// Deletes a teacher. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if classes, attendance or salaries still reference the teacher.
    pub async fn delete_teacher(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        debug!(id, rows = result.rows_affected(), "Deleted teacher");
        Ok(result.rows_affected())
    }
}
