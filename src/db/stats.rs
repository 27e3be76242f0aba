//! Aggregate counts.

use super::{EntityCounts, Store};

impl Store {
    /// Counts students, teachers and classes in one statement.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn counts(&self) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM students) AS students,
                (SELECT COUNT(*) FROM teachers) AS teachers,
                (SELECT COUNT(*) FROM classes) AS classes
            "#,
        )
        .fetch_one(self.pool())
        .await
    }
}
