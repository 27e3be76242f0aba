//! # School Administration Backend - REST API Server
//!
//! A REST API backend that keeps the records of a school (students,
//! teachers, classes, attendance, salaries and grades) in SQLite. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling and
//! [sqlx](https://crates.io/crates/sqlx) for storage, with OpenAPI/Swagger
//! documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **RESTful API**: CRUD operations for every school record.
//!
//! - **Storage-Enforced Integrity**: Foreign keys, uniqueness and value checks
//!   are declared in the schema and enforced by SQLite. Handlers never
//!   re-check them.
//!
//! - **Upserts**: Attendance and salary records are keyed by person and
//!   date (or month); recording the same key again replaces the earlier value.
//!
//! - **OpenAPI Documentation**: Auto-generated Swagger UI at `/swagger-ui/`.
//!
//! - **Structured Logging**: Request tracing with `tower-http`.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`db`] | SQLite store, schema and queries |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/stats` | Student, teacher and class counts |
//! | GET, POST | `/api/students` | List / create students |
//! | PUT, DELETE | `/api/students/{id}` | Update / delete a student |
//! | GET, POST | `/api/teachers` | List / create teachers |
//! | PUT, DELETE | `/api/teachers/{id}` | Update / delete a teacher |
//! | GET, POST | `/api/classes` | List / create classes |
//! | PUT, DELETE | `/api/classes/{id}` | Update / delete a class |
//! | GET, POST | `/api/attendance` | List / record student attendance |
//! | GET | `/api/attendance/{student_id}` | Attendance of one student |
//! | DELETE | `/api/attendance/record/{id}` | Delete an attendance mark |
//! | GET, POST | `/api/teacher-attendance` | List / record teacher attendance |
//! | GET | `/api/teacher-attendance/{teacher_id}` | Attendance of one teacher |
//! | DELETE | `/api/teacher-attendance/record/{id}` | Delete a teacher attendance mark |
//! | GET, POST | `/api/salaries` | List / record salaries |
//! | GET | `/api/salaries/{teacher_id}` | Salaries of one teacher |
//! | DELETE | `/api/salaries/record/{id}` | Delete a salary record |
//! | GET, POST | `/api/grades` | List / create grades |
//! | GET | `/api/grades/{student_id}` | Grades of one student |
//! | PUT, DELETE | `/api/grades/record/{id}` | Update / delete a grade |
//!
//! ## Example Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:4000, ./school.db)
//! cargo run
//!
//! # With a config file and overrides
//! SCHOOL_CONFIG=school.toml PORT=8080 cargo run
//!
//! # Create a teacher, a class and a student
//! curl -X POST http://localhost:4000/api/teachers \
//!   -H "Content-Type: application/json" \
//!   -d '{"first_name": "Ann", "last_name": "Lee", "subject": "Math"}'
//! curl -X POST http://localhost:4000/api/classes \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Algebra", "teacher_id": 1}'
//! curl -X POST http://localhost:4000/api/students \
//!   -H "Content-Type: application/json" \
//!   -d '{"first_name": "Tom", "last_name": "Ng", "class_id": 1}'
//!
//! # Record attendance and read it back
//! curl -X POST http://localhost:4000/api/attendance \
//!   -H "Content-Type: application/json" \
//!   -d '{"student_id": 1, "date": "2024-01-10", "status": "present"}'
//! curl http://localhost:4000/api/attendance/1
//! ```
//!
//! ## Dependencies
//!
//! - **axum** (0.8): Async web framework
//! - **tower-http** (0.6): HTTP middleware (CORS, tracing)
//! - **sqlx** (0.8): SQLite access
//! - **utoipa** (5): OpenAPI documentation generation
//! - **tokio** (1): Async runtime
//! - **serde** (1.0): Serialization/deserialization
//! - **tracing** (0.1): Structured logging

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
