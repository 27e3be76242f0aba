//! HTTP client for the school API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:4000").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the School Administration API.
#[derive(Debug, Clone)]
pub struct SchoolClient {
    client: Client,
    base_url: String,
}

impl SchoolClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Health & Stats
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        self.get("/health").await
    }

    /// Gets student, teacher and class counts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_stats(&self) -> Result<StatsResponse, Error> {
        self.get("/api/stats").await
    }

    // ========================================================================
    // Students
    // ========================================================================

    /// Lists all students.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_students(&self) -> Result<Vec<Student>, Error> {
        self.get("/api/students").await
    }

    /// Creates a student.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn create_student(&self, input: &StudentInput) -> Result<CreatedResponse, Error> {
        self.post("/api/students", input).await
    }

    /// Overwrites a student.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn update_student(&self, id: i64, input: &StudentInput) -> Result<OkResponse, Error> {
        self.put(&format!("/api/students/{}", id), input).await
    }

    /// Deletes a student.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_student(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/students/{}", id)).await
    }

    // ========================================================================
    // Teachers
    // ========================================================================

    /// Lists all teachers.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, Error> {
        self.get("/api/teachers").await
    }

    /// Creates a teacher.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn create_teacher(&self, input: &TeacherInput) -> Result<CreatedResponse, Error> {
        self.post("/api/teachers", input).await
    }

    /// Overwrites a teacher.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn update_teacher(&self, id: i64, input: &TeacherInput) -> Result<OkResponse, Error> {
        self.put(&format!("/api/teachers/{}", id), input).await
    }

    /// Deletes a teacher.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_teacher(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/teachers/{}", id)).await
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// Lists all classes.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_classes(&self) -> Result<Vec<Class>, Error> {
        self.get("/api/classes").await
    }

    /// Creates a class.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn create_class(&self, input: &ClassInput) -> Result<CreatedResponse, Error> {
        self.post("/api/classes", input).await
    }

    /// Overwrites a class.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn update_class(&self, id: i64, input: &ClassInput) -> Result<OkResponse, Error> {
        self.put(&format!("/api/classes/{}", id), input).await
    }

    /// Deletes a class.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_class(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/classes/{}", id)).await
    }

    // ========================================================================
    // Student Attendance
    // ========================================================================

    /// Lists all student attendance marks.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_attendance(&self) -> Result<Vec<Attendance>, Error> {
        self.get("/api/attendance").await
    }

    /// Records a student's attendance for a date.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn record_attendance(&self, input: &AttendanceInput) -> Result<OkResponse, Error> {
        self.post("/api/attendance", input).await
    }

    /// Gets one student's attendance, newest first.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_student_attendance(&self, student_id: i64) -> Result<Vec<Attendance>, Error> {
        self.get(&format!("/api/attendance/{}", student_id)).await
    }

    /// Deletes a student attendance mark.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_attendance(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/attendance/record/{}", id)).await
    }

    // ========================================================================
    // Teacher Attendance
    // ========================================================================

    /// Lists all teacher attendance marks.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_teacher_attendance(&self) -> Result<Vec<TeacherAttendance>, Error> {
        self.get("/api/teacher-attendance").await
    }

    /// Records a teacher's attendance for a date.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn record_teacher_attendance(
        &self,
        input: &TeacherAttendanceInput,
    ) -> Result<OkResponse, Error> {
        self.post("/api/teacher-attendance", input).await
    }

    /// Gets one teacher's attendance, newest first.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_teacher_attendance(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherAttendance>, Error> {
        self.get(&format!("/api/teacher-attendance/{}", teacher_id))
            .await
    }

    /// Deletes a teacher attendance mark.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_teacher_attendance(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/teacher-attendance/record/{}", id))
            .await
    }

    // ========================================================================
    // Salaries
    // ========================================================================

    /// Lists all salary records.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_salaries(&self) -> Result<Vec<Salary>, Error> {
        self.get("/api/salaries").await
    }

    /// Records a teacher's salary for a month.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn record_salary(&self, input: &SalaryInput) -> Result<OkResponse, Error> {
        self.post("/api/salaries", input).await
    }

    /// Gets one teacher's salary records, newest month first.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_teacher_salaries(&self, teacher_id: i64) -> Result<Vec<Salary>, Error> {
        self.get(&format!("/api/salaries/{}", teacher_id)).await
    }

    /// Deletes a salary record.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_salary(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/salaries/record/{}", id)).await
    }

    // ========================================================================
    // Grades
    // ========================================================================

    /// Lists all grades.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_grades(&self) -> Result<Vec<Grade>, Error> {
        self.get("/api/grades").await
    }

    /// Creates a grade.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn create_grade(&self, input: &GradeInput) -> Result<CreatedResponse, Error> {
        self.post("/api/grades", input).await
    }

    /// Gets one student's grades, latest term first.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_student_grades(&self, student_id: i64) -> Result<Vec<Grade>, Error> {
        self.get(&format!("/api/grades/{}", student_id)).await
    }

    /// Overwrites a grade.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn update_grade(&self, id: i64, input: &GradeInput) -> Result<OkResponse, Error> {
        self.put(&format!("/api/grades/record/{}", id), input).await
    }

    /// Deletes a grade.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_grade(&self, id: i64) -> Result<OkResponse, Error> {
        self.delete(&format!("/api/grades/record/{}", id)).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let resp = self.client.get(self.url(path)).send().await?;
        self.handle_response(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, Error> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, Error> {
        let resp = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let resp = self.client.delete(self.url(path)).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let text = resp.text().await.unwrap_or_default();
        if status.as_u16() == 404 {
            return Err(Error::NotFound(text));
        }

        Err(match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => Error::Api {
                status: status.as_u16(),
                code: body.code,
                message: body.error,
            },
            Err(_) => Error::Api {
                status: status.as_u16(),
                code: String::new(),
                message: text,
            },
        })
    }
}
