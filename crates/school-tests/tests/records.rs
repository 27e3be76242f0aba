//! School record CRUD and upsert tests.

use futures_util::future::join_all;
use school_client::{
    AttendanceInput, AttendanceStatus, ClassInput, Error, GradeInput, SalaryInput, SchoolClient,
    StudentInput, TeacherAttendanceInput, TeacherInput,
};
use school_tests::TestServer;

fn teacher(first: &str) -> TeacherInput {
    TeacherInput {
        first_name: Some(first.into()),
        last_name: Some("Lee".into()),
        subject: Some("Math".into()),
    }
}

fn student(first: &str, class_id: Option<i64>) -> StudentInput {
    StudentInput {
        first_name: Some(first.into()),
        last_name: Some("Ng".into()),
        class_id,
    }
}

fn mark(student_id: i64, date: &str, status: AttendanceStatus) -> AttendanceInput {
    AttendanceInput {
        student_id: Some(student_id),
        date: Some(date.into()),
        status: Some(status),
    }
}

async fn seed_student(client: &SchoolClient) -> i64 {
    client
        .create_student(&student("Tom", None))
        .await
        .expect("Failed to create student")
        .id
}

#[tokio::test]
async fn test_teacher_class_student_attendance_scenario() {
    let server = TestServer::start().await;
    let client = &server.client;

    let teacher = client
        .create_teacher(&teacher("Ann"))
        .await
        .expect("Failed to create teacher");
    assert_eq!(teacher.id, 1);

    let class = client
        .create_class(&ClassInput {
            name: Some("Algebra".into()),
            teacher_id: Some(1),
        })
        .await
        .expect("Failed to create class");
    assert_eq!(class.id, 1);

    let created = client
        .create_student(&student("Tom", Some(1)))
        .await
        .expect("Failed to create student");
    assert_eq!(created.id, 1);

    let ack = client
        .record_attendance(&mark(1, "2024-01-10", AttendanceStatus::Present))
        .await
        .expect("Failed to record attendance");
    assert!(ack.ok);

    let rows = client
        .get_student_attendance(1)
        .await
        .expect("Failed to get attendance");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].student_id, 1);
    assert_eq!(rows[0].date, "2024-01-10");
    assert_eq!(rows[0].status, AttendanceStatus::Present);
}

#[tokio::test]
async fn test_created_students_are_listed() {
    let server = TestServer::start().await;
    let client = &server.client;

    let mut ids = Vec::new();
    for name in ["Tom", "Mia", "Raj", "Eve"] {
        ids.push(client.create_student(&student(name, None)).await.unwrap().id);
    }

    let listed: Vec<i64> = client
        .list_students()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_attendance_resubmission_keeps_one_row() {
    let server = TestServer::start().await;
    let client = &server.client;
    let student_id = seed_student(client).await;

    client
        .record_attendance(&mark(student_id, "2024-01-10", AttendanceStatus::Present))
        .await
        .unwrap();
    client
        .record_attendance(&mark(student_id, "2024-01-10", AttendanceStatus::Absent))
        .await
        .unwrap();

    let rows = client.get_student_attendance(student_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Absent);
}

#[tokio::test]
async fn test_concurrent_upserts_leave_one_row() {
    let server = TestServer::start().await;
    let client = &server.client;
    let student_id = seed_student(client).await;

    let statuses = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];
    let requests = statuses.iter().map(|status| {
        let input = mark(student_id, "2024-03-01", *status);
        async move { client.record_attendance(&input).await }
    });
    for result in join_all(requests).await {
        assert!(result.expect("Upsert failed").ok);
    }

    let rows = client.get_student_attendance(student_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(statuses.contains(&rows[0].status));
}

#[tokio::test]
async fn test_delete_unknown_teacher_is_ok() {
    let server = TestServer::start().await;
    let client = &server.client;
    client.create_teacher(&teacher("Ann")).await.unwrap();
    client.create_teacher(&teacher("Bob")).await.unwrap();

    let ack = client.delete_teacher(999).await.expect("Delete failed");
    assert!(ack.ok);
    assert_eq!(client.list_teachers().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_unknown_student_is_ok() {
    let server = TestServer::start().await;
    let client = &server.client;

    let ack = client
        .update_student(5, &student("Ghost", None))
        .await
        .expect("Update failed");
    assert!(ack.ok);
    assert!(client.list_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_class_with_unknown_teacher_is_rejected() {
    let server = TestServer::start().await;
    let client = &server.client;

    let result = client
        .create_class(&ClassInput {
            name: Some("Algebra".into()),
            teacher_id: Some(41),
        })
        .await;

    let err = result.expect_err("Dangling teacher id was accepted");
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.code(), Some("CONSTRAINT_VIOLATION"));
    assert!(client.list_classes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_referenced_class_is_rejected() {
    let server = TestServer::start().await;
    let client = &server.client;
    let class = client
        .create_class(&ClassInput {
            name: Some("Algebra".into()),
            teacher_id: None,
        })
        .await
        .unwrap();
    client.create_student(&student("Tom", Some(class.id))).await.unwrap();

    let err = client.delete_class(class.id).await.expect_err("Orphaning delete was accepted");
    assert_eq!(err.code(), Some("CONSTRAINT_VIOLATION"));
    assert_eq!(client.list_classes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_required_field_is_validation_error() {
    let server = TestServer::start().await;
    let client = &server.client;

    let result = client
        .create_teacher(&TeacherInput {
            first_name: Some("Ann".into()),
            ..Default::default()
        })
        .await;

    match result {
        Err(Error::Api { status, code, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(code, "VALIDATION_ERROR");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_status_is_validation_error() {
    let server = TestServer::start().await;
    let student_id = seed_student(&server.client).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/attendance"))
        .json(&serde_json::json!({
            "student_id": student_id,
            "date": "2024-01-10",
            "status": "sick"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(server.client.list_attendance().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/api/unknown")).await.unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_id_is_validation_error() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();

    for (method, path) in [
        (reqwest::Method::DELETE, "/api/students/abc"),
        (reqwest::Method::GET, "/api/attendance/abc"),
        (reqwest::Method::DELETE, "/api/grades/record/1.5"),
    ] {
        let response = http.request(method, server.url(path)).send().await.unwrap();

        assert_eq!(response.status().as_u16(), 400, "{}", path);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["code"], "VALIDATION_ERROR", "{}", path);
    }
}

#[tokio::test]
async fn test_grades_accumulate() {
    let server = TestServer::start().await;
    let client = &server.client;
    let student_id = seed_student(client).await;

    for score in [60.0, 75.5, 82.0] {
        client
            .create_grade(&GradeInput {
                student_id: Some(student_id),
                subject: Some("Math".into()),
                score: Some(score),
                term: Some("2024-T1".into()),
            })
            .await
            .unwrap();
    }

    let grades = client.get_student_grades(student_id).await.unwrap();
    assert_eq!(grades.len(), 3);

    let first = grades[0].id;
    client
        .update_grade(
            first,
            &GradeInput {
                student_id: Some(student_id),
                subject: Some("Math".into()),
                score: Some(99.0),
                term: Some("2024-T1".into()),
            },
        )
        .await
        .unwrap();
    client.delete_grade(grades[2].id).await.unwrap();

    let grades = client.list_grades().await.unwrap();
    assert_eq!(grades.len(), 2);
    assert_eq!(grades[0].score, 99.0);
}

#[tokio::test]
async fn test_salaries_upsert_by_month() {
    let server = TestServer::start().await;
    let client = &server.client;
    let teacher_id = client.create_teacher(&teacher("Ann")).await.unwrap().id;

    for (month, amount, paid) in [
        ("2024-01", 2000.0, None),
        ("2024-02", 2000.0, Some(false)),
        ("2024-01", 2000.0, Some(true)),
    ] {
        client
            .record_salary(&SalaryInput {
                teacher_id: Some(teacher_id),
                month: Some(month.into()),
                amount: Some(amount),
                paid,
            })
            .await
            .unwrap();
    }

    let salaries = client.get_teacher_salaries(teacher_id).await.unwrap();
    let months: Vec<&str> = salaries.iter().map(|s| s.month.as_str()).collect();
    assert_eq!(months, vec!["2024-02", "2024-01"]);
    assert!(!salaries[0].paid);
    assert!(salaries[1].paid);

    client.delete_salary(salaries[0].id).await.unwrap();
    assert_eq!(client.list_salaries().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_teacher_attendance_upsert_and_delete() {
    let server = TestServer::start().await;
    let client = &server.client;
    let teacher_id = client.create_teacher(&teacher("Ann")).await.unwrap().id;

    for (date, status) in [
        ("2024-01-09", AttendanceStatus::Present),
        ("2024-01-10", AttendanceStatus::Late),
        ("2024-01-10", AttendanceStatus::Present),
    ] {
        client
            .record_teacher_attendance(&TeacherAttendanceInput {
                teacher_id: Some(teacher_id),
                date: Some(date.into()),
                status: Some(status),
            })
            .await
            .unwrap();
    }

    let rows = client.get_teacher_attendance(teacher_id).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-10");
    assert_eq!(rows[0].status, AttendanceStatus::Present);

    client.delete_teacher_attendance(rows[1].id).await.unwrap();
    assert_eq!(client.list_teacher_attendance().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_student() {
    let server = TestServer::start().await;
    let client = &server.client;
    let id = seed_student(client).await;

    client.update_student(id, &student("Thomas", None)).await.unwrap();
    let students = client.list_students().await.unwrap();
    assert_eq!(students[0].first_name, "Thomas");

    client.delete_student(id).await.unwrap();
    assert!(client.list_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_attendance_mark() {
    let server = TestServer::start().await;
    let client = &server.client;
    let student_id = seed_student(client).await;
    client
        .record_attendance(&mark(student_id, "2024-01-10", AttendanceStatus::Late))
        .await
        .unwrap();

    let rows = client.list_attendance().await.unwrap();
    client.delete_attendance(rows[0].id).await.unwrap();

    assert!(client.get_student_attendance(student_id).await.unwrap().is_empty());
}
