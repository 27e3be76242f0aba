//! OpenAPI documentation.

use crate::api::handlers;
use crate::db::{
    Attendance, AttendanceStatus, Class, EntityCounts, Grade, Salary, Student, Teacher,
    TeacherAttendance,
};
use crate::error::ErrorResponse;
use crate::models::{
    AttendanceInput, ClassInput, CreatedResponse, GradeInput, HealthResponse, OkResponse,
    SalaryInput, StudentInput, TeacherAttendanceInput, TeacherInput,
};
use utoipa::OpenApi;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::get_stats,
        handlers::list_students,
        handlers::create_student,
        handlers::update_student,
        handlers::delete_student,
        handlers::list_teachers,
        handlers::create_teacher,
        handlers::update_teacher,
        handlers::delete_teacher,
        handlers::list_classes,
        handlers::create_class,
        handlers::update_class,
        handlers::delete_class,
        handlers::list_attendance,
        handlers::record_attendance,
        handlers::get_student_attendance,
        handlers::delete_attendance,
        handlers::list_teacher_attendance,
        handlers::record_teacher_attendance,
        handlers::get_teacher_attendance,
        handlers::delete_teacher_attendance,
        handlers::list_salaries,
        handlers::record_salary,
        handlers::get_teacher_salaries,
        handlers::delete_salary,
        handlers::list_grades,
        handlers::create_grade,
        handlers::get_student_grades,
        handlers::update_grade,
        handlers::delete_grade,
    ),
    components(
        schemas(
            HealthResponse,
            EntityCounts,
            CreatedResponse,
            OkResponse,
            ErrorResponse,
            AttendanceStatus,
            Student,
            StudentInput,
            Teacher,
            TeacherInput,
            Class,
            ClassInput,
            Attendance,
            AttendanceInput,
            TeacherAttendance,
            TeacherAttendanceInput,
            Salary,
            SalaryInput,
            Grade,
            GradeInput,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Statistics", description = "Row counts"),
        (name = "Students", description = "Student management"),
        (name = "Teachers", description = "Teacher management"),
        (name = "Classes", description = "Class management"),
        (name = "Attendance", description = "Student attendance marks"),
        (name = "Teacher Attendance", description = "Teacher attendance marks"),
        (name = "Salaries", description = "Teacher salary records"),
        (name = "Grades", description = "Student grades"),
    ),
    info(
        title = "School Administration API",
        version = "0.1.0",
        description = "REST API for students, teachers, classes, attendance, salaries and grades",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;
