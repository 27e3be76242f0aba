//! API request handlers.
//!
//! Every handler runs exactly one statement against the store and returns
//! its result as flat JSON.

use crate::api::extract::{ApiJson, ApiPath};
use crate::db::{
    Attendance, Class, EntityCounts, Grade, Salary, Student, Teacher, TeacherAttendance,
};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    AttendanceInput, ClassInput, CreatedResponse, GradeInput, HealthResponse, OkResponse,
    SalaryInput, StudentInput, TeacherAttendanceInput, TeacherInput,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use std::sync::Arc;

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

// ============================================================================
// Statistics
// ============================================================================

/// Get student, teacher and class counts.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Row counts", body = EntityCounts),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Statistics"
)]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<EntityCounts>, ApiError> {
    Ok(Json(state.store.counts().await?))
}

// ============================================================================
// Students
// ============================================================================

/// List all students.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = Vec<Student>)
    ),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(state.store.list_students().await?))
}

/// Create a student.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student created", body = CreatedResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Class does not exist", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<StudentInput>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.store.create_student(&body).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Overwrite a student. Unknown ids are accepted and change nothing.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student id")
    ),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student updated", body = OkResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Class does not exist", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<StudentInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.update_student(id, &body).await?;
    Ok(Json(OkResponse::OK))
}

/// Delete a student. Unknown ids are accepted and change nothing.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student deleted", body = OkResponse),
        (status = 409, description = "Student still has attendance or grades", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_student(id).await?;
    Ok(Json(OkResponse::OK))
}

// ============================================================================
// Teachers
// ============================================================================

/// List all teachers.
#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "All teachers", body = Vec<Teacher>)
    ),
    tag = "Teachers"
)]
pub async fn list_teachers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Teacher>>, ApiError> {
    Ok(Json(state.store.list_teachers().await?))
}

/// Create a teacher.
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = TeacherInput,
    responses(
        (status = 200, description = "Teacher created", body = CreatedResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<TeacherInput>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.store.create_teacher(&body).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Overwrite a teacher. Unknown ids are accepted and change nothing.
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(
        ("id" = i64, Path, description = "Teacher id")
    ),
    request_body = TeacherInput,
    responses(
        (status = 200, description = "Teacher updated", body = OkResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<TeacherInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.update_teacher(id, &body).await?;
    Ok(Json(OkResponse::OK))
}

/// Delete a teacher. Unknown ids are accepted and change nothing.
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(
        ("id" = i64, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Teacher deleted", body = OkResponse),
        (status = 409, description = "Teacher is still referenced", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_teacher(id).await?;
    Ok(Json(OkResponse::OK))
}

// ============================================================================
// Classes
// ============================================================================

/// List all classes.
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "All classes", body = Vec<Class>)
    ),
    tag = "Classes"
)]
pub async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Class>>, ApiError> {
    Ok(Json(state.store.list_classes().await?))
}

/// Create a class.
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = ClassInput,
    responses(
        (status = 200, description = "Class created", body = CreatedResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 409, description = "Teacher does not exist", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn create_class(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ClassInput>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.store.create_class(&body).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Overwrite a class. Unknown ids are accepted and change nothing.
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(
        ("id" = i64, Path, description = "Class id")
    ),
    request_body = ClassInput,
    responses(
        (status = 200, description = "Class updated", body = OkResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 409, description = "Teacher does not exist", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn update_class(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<ClassInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.update_class(id, &body).await?;
    Ok(Json(OkResponse::OK))
}

/// Delete a class. Unknown ids are accepted and change nothing.
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(
        ("id" = i64, Path, description = "Class id")
    ),
    responses(
        (status = 200, description = "Class deleted", body = OkResponse),
        (status = 409, description = "Students are still enrolled", body = ErrorResponse)
    ),
    tag = "Classes"
)]
pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_class(id).await?;
    Ok(Json(OkResponse::OK))
}

// ============================================================================
// Student Attendance
// ============================================================================

/// List all student attendance marks, newest date first.
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance marks", body = Vec<Attendance>)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Attendance>>, ApiError> {
    Ok(Json(state.store.list_attendance().await?))
}

/// Record a student's attendance, replacing any mark for the same date.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = AttendanceInput,
    responses(
        (status = 200, description = "Attendance recorded", body = OkResponse),
        (status = 400, description = "Missing field or unknown status", body = ErrorResponse),
        (status = 409, description = "Student does not exist", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<AttendanceInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.upsert_attendance(&body).await?;
    Ok(Json(OkResponse::OK))
}

/// Get one student's attendance, newest date first.
#[utoipa::path(
    get,
    path = "/api/attendance/{student_id}",
    params(
        ("student_id" = i64, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Attendance marks of the student", body = Vec<Attendance>)
    ),
    tag = "Attendance"
)]
pub async fn get_student_attendance(
    State(state): State<Arc<AppState>>,
    ApiPath(student_id): ApiPath<i64>,
) -> Result<Json<Vec<Attendance>>, ApiError> {
    Ok(Json(state.store.attendance_for_student(student_id).await?))
}

/// Delete a student attendance mark.
#[utoipa::path(
    delete,
    path = "/api/attendance/record/{id}",
    params(
        ("id" = i64, Path, description = "Attendance record id")
    ),
    responses(
        (status = 200, description = "Mark deleted", body = OkResponse)
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_attendance(id).await?;
    Ok(Json(OkResponse::OK))
}

// ============================================================================
// Teacher Attendance
// ============================================================================

/// List all teacher attendance marks, newest date first.
#[utoipa::path(
    get,
    path = "/api/teacher-attendance",
    responses(
        (status = 200, description = "All teacher attendance marks", body = Vec<TeacherAttendance>)
    ),
    tag = "Teacher Attendance"
)]
pub async fn list_teacher_attendance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeacherAttendance>>, ApiError> {
    Ok(Json(state.store.list_teacher_attendance().await?))
}

/// Record a teacher's attendance, replacing any mark for the same date.
#[utoipa::path(
    post,
    path = "/api/teacher-attendance",
    request_body = TeacherAttendanceInput,
    responses(
        (status = 200, description = "Attendance recorded", body = OkResponse),
        (status = 400, description = "Missing field or unknown status", body = ErrorResponse),
        (status = 409, description = "Teacher does not exist", body = ErrorResponse)
    ),
    tag = "Teacher Attendance"
)]
pub async fn record_teacher_attendance(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<TeacherAttendanceInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.upsert_teacher_attendance(&body).await?;
    Ok(Json(OkResponse::OK))
}

/// Get one teacher's attendance, newest date first.
#[utoipa::path(
    get,
    path = "/api/teacher-attendance/{teacher_id}",
    params(
        ("teacher_id" = i64, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Attendance marks of the teacher", body = Vec<TeacherAttendance>)
    ),
    tag = "Teacher Attendance"
)]
pub async fn get_teacher_attendance(
    State(state): State<Arc<AppState>>,
    ApiPath(teacher_id): ApiPath<i64>,
) -> Result<Json<Vec<TeacherAttendance>>, ApiError> {
    Ok(Json(state.store.attendance_for_teacher(teacher_id).await?))
}

/// Delete a teacher attendance mark.
#[utoipa::path(
    delete,
    path = "/api/teacher-attendance/record/{id}",
    params(
        ("id" = i64, Path, description = "Teacher attendance record id")
    ),
    responses(
        (status = 200, description = "Mark deleted", body = OkResponse)
    ),
    tag = "Teacher Attendance"
)]
pub async fn delete_teacher_attendance(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_teacher_attendance(id).await?;
    Ok(Json(OkResponse::OK))
}

// ============================================================================
// Salaries
// ============================================================================

/// List all salary records, newest month first.
#[utoipa::path(
    get,
    path = "/api/salaries",
    responses(
        (status = 200, description = "All salary records", body = Vec<Salary>)
    ),
    tag = "Salaries"
)]
pub async fn list_salaries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Salary>>, ApiError> {
    Ok(Json(state.store.list_salaries().await?))
}

/// Record a teacher's salary, replacing any record for the same month.
#[utoipa::path(
    post,
    path = "/api/salaries",
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Salary recorded", body = OkResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Teacher does not exist", body = ErrorResponse)
    ),
    tag = "Salaries"
)]
pub async fn record_salary(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<SalaryInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.upsert_salary(&body).await?;
    Ok(Json(OkResponse::OK))
}

/// Get one teacher's salary records, newest month first.
#[utoipa::path(
    get,
    path = "/api/salaries/{teacher_id}",
    params(
        ("teacher_id" = i64, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Salary records of the teacher", body = Vec<Salary>)
    ),
    tag = "Salaries"
)]
pub async fn get_teacher_salaries(
    State(state): State<Arc<AppState>>,
    ApiPath(teacher_id): ApiPath<i64>,
) -> Result<Json<Vec<Salary>>, ApiError> {
    Ok(Json(state.store.salaries_for_teacher(teacher_id).await?))
}

/// Delete a salary record.
#[utoipa::path(
    delete,
    path = "/api/salaries/record/{id}",
    params(
        ("id" = i64, Path, description = "Salary record id")
    ),
    responses(
        (status = 200, description = "Salary record deleted", body = OkResponse)
    ),
    tag = "Salaries"
)]
pub async fn delete_salary(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_salary(id).await?;
    Ok(Json(OkResponse::OK))
}

// ============================================================================
// Grades
// ============================================================================

/// List all grades.
#[utoipa::path(
    get,
    path = "/api/grades",
    responses(
        (status = 200, description = "All grades", body = Vec<Grade>)
    ),
    tag = "Grades"
)]
pub async fn list_grades(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Grade>>, ApiError> {
    Ok(Json(state.store.list_grades().await?))
}

/// Create a grade.
#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = GradeInput,
    responses(
        (status = 200, description = "Grade created", body = CreatedResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Student does not exist", body = ErrorResponse)
    ),
    tag = "Grades"
)]
pub async fn create_grade(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<GradeInput>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.store.create_grade(&body).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Get one student's grades, latest term first.
#[utoipa::path(
    get,
    path = "/api/grades/{student_id}",
    params(
        ("student_id" = i64, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Grades of the student", body = Vec<Grade>)
    ),
    tag = "Grades"
)]
pub async fn get_student_grades(
    State(state): State<Arc<AppState>>,
    ApiPath(student_id): ApiPath<i64>,
) -> Result<Json<Vec<Grade>>, ApiError> {
    Ok(Json(state.store.grades_for_student(student_id).await?))
}

/// Overwrite a grade. Unknown ids are accepted and change nothing.
#[utoipa::path(
    put,
    path = "/api/grades/record/{id}",
    params(
        ("id" = i64, Path, description = "Grade id")
    ),
    request_body = GradeInput,
    responses(
        (status = 200, description = "Grade updated", body = OkResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Student does not exist", body = ErrorResponse)
    ),
    tag = "Grades"
)]
pub async fn update_grade(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<GradeInput>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.update_grade(id, &body).await?;
    Ok(Json(OkResponse::OK))
}

/// Delete a grade.
#[utoipa::path(
    delete,
    path = "/api/grades/record/{id}",
    params(
        ("id" = i64, Path, description = "Grade id")
    ),
    responses(
        (status = 200, description = "Grade deleted", body = OkResponse)
    ),
    tag = "Grades"
)]
pub async fn delete_grade(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete_grade(id).await?;
    Ok(Json(OkResponse::OK))
}
