//! Grade queries.

use super::{Grade, Store};
use crate::models::GradeInput;
use tracing::debug;

impl Store {
    /// Lists every grade in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_grades(&self) -> Result<Vec<Grade>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM grades ORDER BY id")
            .fetch_all(self.pool())
            .await
    }

    /// Lists the grades of one student, latest term first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn grades_for_student(&self, student_id: i64) -> Result<Vec<Grade>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM grades WHERE student_id = ? ORDER BY term DESC, id")
            .bind(student_id)
            .fetch_all(self.pool())
            .await
    }

    /// Inserts a grade and returns its new identifier.
    ///
    /// # Errors
    /// Returns an error if a field is missing or the student does not exist.
    pub async fn create_grade(&self, input: &GradeInput) -> Result<i64, sqlx::Error> {
        let id = sqlx::query("INSERT INTO grades (student_id, subject, score, term) VALUES (?, ?, ?, ?)")
            .bind(input.student_id)
            .bind(input.subject.as_deref())
            .bind(input.score)
            .bind(input.term.as_deref())
            .execute(self.pool())
            .await?
            .last_insert_rowid();

        debug!(id, "Created grade");
        Ok(id)
    }

    /// Overwrites a grade. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if a field is missing or the student does not exist.
    pub async fn update_grade(&self, id: i64, input: &GradeInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE grades SET student_id = ?, subject = ?, score = ?, term = ? WHERE id = ?",
        )
        .bind(input.student_id)
        .bind(input.subject.as_deref())
        .bind(input.score)
        .bind(input.term.as_deref())
        .bind(id)
        .execute(self.pool())
        .await?;

        debug!(id, rows = result.rows_affected(), "Updated grade");
        Ok(result.rows_affected())
    }

    /// Deletes a grade. Unknown ids touch no rows.
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub async fn delete_grade(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grades WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{Store, test_store};
    use crate::models::{GradeInput, StudentInput};

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

    fn grade(student_id: i64, term: &str, score: f64) -> GradeInput {
        GradeInput {
            student_id: Some(student_id),
            subject: Some("Math".to_string()),
            score: Some(score),
            term: Some(term.to_string()),
        }
    }

    #[tokio::test]
    async fn test_same_subject_and_term_accumulates() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;

        for score in [71.0, 88.5, 93.0, 64.0] {
            store.create_grade(&grade(student_id, "2024-T1", score)).await.unwrap();
        }

        let rows = store.grades_for_student(student_id).await.unwrap();
        assert_eq!(rows.len(), 4);
        let scores: Vec<f64> = rows.iter().map(|g| g.score).collect();
        assert_eq!(scores, vec![71.0, 88.5, 93.0, 64.0]);
    }

    #[tokio::test]
    async fn test_ordered_by_term_desc() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;

        store.create_grade(&grade(student_id, "2024-T1", 70.0)).await.unwrap();
        store.create_grade(&grade(student_id, "2024-T3", 80.0)).await.unwrap();
        store.create_grade(&grade(student_id, "2024-T2", 90.0)).await.unwrap();

        let terms: Vec<String> = store
            .grades_for_student(student_id)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.term)
            .collect();
        assert_eq!(terms, vec!["2024-T3", "2024-T2", "2024-T1"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = test_store().await;
        let student_id = seed_student(&store).await;
        let id = store.create_grade(&grade(student_id, "2024-T1", 50.0)).await.unwrap();

        assert_eq!(store.update_grade(id, &grade(student_id, "2024-T1", 55.0)).await.unwrap(), 1);
        assert_eq!(store.list_grades().await.unwrap()[0].score, 55.0);

        assert_eq!(store.update_grade(id + 1, &grade(student_id, "x", 1.0)).await.unwrap(), 0);
        assert_eq!(store.delete_grade(id).await.unwrap(), 1);
        assert!(store.list_grades().await.unwrap().is_empty());
    }
}
