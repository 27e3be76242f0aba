//! Class queries.

use super::{Class, Store};
use crate::models::ClassInput;
use tracing::debug;

impl Store {
    /// Lists every class in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_classes(&self) -> Result<Vec<Class>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM classes ORDER BY id")
            .fetch_all(self.pool())
            .await
    }

    /// Inserts a class and returns its new identifier.
    ///
    /// # Errors
    /// Returns an error if the name is missing or the teacher does not exist.
    pub async fn create_class(&self, input: &ClassInput) -> Result<i64, sqlx::Error> {
        let id = sqlx::query("INSERT INTO classes (name, teacher_id) VALUES (?, ?)")
            .bind(input.name.as_deref())
            .bind(input.teacher_id)
            .execute(self.pool())
            .await?
            .last_insert_rowid();

        debug!(id, "Created class");
        Ok(id)
    }

    /// Overwrites the mutable fields of a class. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if the name is missing or the teacher does not exist.
    pub async fn update_class(&self, id: i64, input: &ClassInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE classes SET name = ?, teacher_id = ? WHERE id = ?")
            .bind(input.name.as_deref())
            .bind(input.teacher_id)
            .bind(id)
            .execute(self.pool())
            .await?;

        debug!(id, rows = result.rows_affected(), "Updated class");
        Ok(result.rows_affected())
    }

    /// Deletes a class. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if students are still enrolled in the class.
    pub async fn delete_class(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        debug!(id, rows = result.rows_affected(), "Deleted class");
        Ok(result.rows_affected())
    }
}
