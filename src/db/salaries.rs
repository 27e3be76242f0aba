//! Salary queries.

use super::{Salary, Store};
use crate::models::SalaryInput;
use tracing::debug;

impl Store {
    /// Lists every salary record, newest month first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_salaries(&self) -> Result<Vec<Salary>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM salaries ORDER BY month DESC, id")
            .fetch_all(self.pool())
            .await
    }

    /// Lists the salary records of one teacher, newest month first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn salaries_for_teacher(&self, teacher_id: i64) -> Result<Vec<Salary>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM salaries WHERE teacher_id = ? ORDER BY month DESC")
            .bind(teacher_id)
            .fetch_all(self.pool())
            .await
    }

    /// Records a teacher's salary for a month, replacing any earlier record
    /// for the same month. An absent `paid` flag is stored as unpaid.
    ///
    /// # Errors
    /// Returns an error if a field is missing or the teacher does not exist.
    pub async fn upsert_salary(&self, input: &SalaryInput) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO salaries (teacher_id, month, amount, paid)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (teacher_id, month) DO UPDATE SET
                amount = excluded.amount,
                paid = excluded.paid
            "#,
        )
        .bind(input.teacher_id)
        .bind(input.month.as_deref())
        .bind(input.amount)
        .bind(input.paid.unwrap_or(false))
        .execute(self.pool())
        .await?;

        debug!(teacher_id = ?input.teacher_id, month = ?input.month, "Recorded salary");
        Ok(())
    }

    /// Deletes a salary record by id. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub async fn delete_salary(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM salaries WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
