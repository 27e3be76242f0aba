//! Student queries.

use super::{Store, Student};
use crate::models::StudentInput;
use tracing::debug;

impl Store {
    /// Lists every student in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_students(&self) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM students ORDER BY id")
            .fetch_all(self.pool())
            .await
    }

    /// Inserts a student and returns its new identifier.
    ///
    /// # Errors
    /// Returns an error if a required field is missing or the class does not exist.
    pub async fn create_student(&self, input: &StudentInput) -> Result<i64, sqlx::Error> {
        let id = sqlx::query("INSERT INTO students (first_name, last_name, class_id) VALUES (?, ?, ?)")
            .bind(input.first_name.as_deref())
            .bind(input.last_name.as_deref())
            .bind(input.class_id)
            .execute(self.pool())
            .await?
            .last_insert_rowid();

        debug!(id, "Created student");
        Ok(id)
    }

    /// Overwrites the mutable fields of a student.
    ///
    /// Returns the number of rows touched; an unknown id touches none and is
    /// not an error.
    ///
    /// # Errors
    /// Returns an error if a required field is missing or the class does not exist.
    pub async fn update_student(&self, id: i64, input: &StudentInput) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE students SET first_name = ?, last_name = ?, class_id = ? WHERE id = ?")
                .bind(input.first_name.as_deref())
                .bind(input.last_name.as_deref())
                .bind(input.class_id)
                .bind(id)
                .execute(self.pool())
                .await?;

        debug!(id, rows = result.rows_affected(), "Updated student");
        Ok(result.rows_affected())
    }

    /// Deletes a student. An unknown id is not an error.
    ///
    /// # Errors
    /// Returns an error if attendance or grades still reference the student.
    pub async fn delete_student(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        debug!(id, rows = result.rows_affected(), "Deleted student");
        Ok(result.rows_affected())
    }
}
