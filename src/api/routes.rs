//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{delete, get, put};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Statistics
        .route("/api/stats", get(handlers::get_stats))
        // Students
        .route(
            "/api/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/api/students/{id}",
            put(handlers::update_student).delete(handlers::delete_student),
        )
        // Teachers
        .route(
            "/api/teachers",
            get(handlers::list_teachers).post(handlers::create_teacher),
        )
        .route(
            "/api/teachers/{id}",
            put(handlers::update_teacher).delete(handlers::delete_teacher),
        )
        // Classes
        .route(
            "/api/classes",
            get(handlers::list_classes).post(handlers::create_class),
        )
        .route(
            "/api/classes/{id}",
            put(handlers::update_class).delete(handlers::delete_class),
        )
        // Student attendance
        .route(
            "/api/attendance",
            get(handlers::list_attendance).post(handlers::record_attendance),
        )
        .route(
            "/api/attendance/{student_id}",
            get(handlers::get_student_attendance),
        )
        .route(
            "/api/attendance/record/{id}",
            delete(handlers::delete_attendance),
        )
        // Teacher attendance
        .route(
            "/api/teacher-attendance",
            get(handlers::list_teacher_attendance).post(handlers::record_teacher_attendance),
        )
        .route(
            "/api/teacher-attendance/{teacher_id}",
            get(handlers::get_teacher_attendance),
        )
        .route(
            "/api/teacher-attendance/record/{id}",
            delete(handlers::delete_teacher_attendance),
        )
        // Salaries
        .route(
            "/api/salaries",
            get(handlers::list_salaries).post(handlers::record_salary),
        )
        .route(
            "/api/salaries/{teacher_id}",
            get(handlers::get_teacher_salaries),
        )
        .route("/api/salaries/record/{id}", delete(handlers::delete_salary))
        // Grades
        .route(
            "/api/grades",
            get(handlers::list_grades).post(handlers::create_grade),
        )
        .route(
            "/api/grades/{student_id}",
            get(handlers::get_student_grades),
        )
        .route(
            "/api/grades/record/{id}",
            put(handlers::update_grade).delete(handlers::delete_grade),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}
