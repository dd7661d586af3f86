#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn employee_json(employee_id: &str) -> serde_json::Value {
    json!({
        "id": format!("doc-{}", employee_id),
        "employee_id": employee_id,
        "full_name": "Alice Example",
        "email": "alice@example.com",
        "department": "Engineering",
        "role": "Engineer",
        "status": "Active",
        "phone": null,
        "location": "Remote"
    })
}

fn record_json(id: &str, employee_id: &str, date: &str, present: bool) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "employee_name": "Alice Example",
        "attendance_date": date,
        "is_present": present,
        "check_in_time": if present { json!("09:00") } else { json!(null) },
        "check_out_time": if present { json!("17:30:00") } else { json!(null) },
        "notes": null
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn new_employee() -> NewEmployee {
    NewEmployee {
        employee_id: "E001".into(),
        full_name: "Alice Example".into(),
        email: "alice@example.com".into(),
        department: "Engineering".into(),
        role: "Engineer".into(),
        status: EmployeeStatus::Active,
        phone: None,
        location: None,
    }
}

#[tokio::test]
async fn list_employees_returns_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({
            "success": true,
            "data": [employee_json("E001"), employee_json("E002")]
        }));
    });

    let employees = client_for(&server).list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].employee_id, "E002");
    assert_eq!(employees[0].location.as_deref(), Some("Remote"));
}

#[tokio::test]
async fn list_employees_defaults_missing_data_to_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({ "success": true }));
    });

    let employees = client_for(&server).list_employees().await.unwrap();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn list_employees_uses_fallback_message_for_opaque_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(500).raw_body("Internal Server Error");
    });

    let err = client_for(&server).list_employees().await.unwrap_err();
    assert_eq!(err.error, "Failed to fetch employees");
    assert_eq!(err.code, ApiError::REQUEST_FAILED);
}

#[tokio::test]
async fn network_failure_maps_to_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.network_error();
    });

    let err = client_for(&server).list_employees().await.unwrap_err();
    assert_eq!(err.error, "Network error");
    assert_eq!(err.code, ApiError::NETWORK);
    assert!(err.details.is_some());
}

#[tokio::test]
async fn unparseable_success_body_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).raw_body("not json");
    });

    let err = client_for(&server).list_employees().await.unwrap_err();
    assert_eq!(err.code, ApiError::PARSE);
    assert_eq!(err.error, "Failed to parse response");
}

#[tokio::test]
async fn create_employee_posts_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(201).json_body(json!({
            "success": true,
            "data": employee_json("E001"),
            "message": "Employee created"
        }));
    });

    let created = client_for(&server)
        .create_employee(&new_employee())
        .await
        .unwrap();
    assert_eq!(created.employee_id, "E001");

    let request = server.last_request();
    assert_eq!(request.method, POST);
    let body = request.body.expect("json body");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["status"], "Active");
    assert!(body.get("phone").is_none());
}

#[tokio::test]
async fn create_employee_surfaces_duplicate_email_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(400).json_body(json!({
            "success": false,
            "message": "Employee with email alice@example.com already exists"
        }));
    });

    let err = client_for(&server)
        .create_employee(&new_employee())
        .await
        .unwrap_err();
    assert_eq!(
        err.error,
        "Employee with email alice@example.com already exists"
    );
}

#[tokio::test]
async fn create_employee_surfaces_fastapi_validation_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(422).json_body(json!({
            "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }]
        }));
    });

    let err = client_for(&server)
        .create_employee(&new_employee())
        .await
        .unwrap_err();
    assert_eq!(err.error, "value is not a valid email address");
}

#[tokio::test]
async fn success_false_on_2xx_is_a_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(200).json_body(json!({ "success": false }));
    });

    let err = client_for(&server)
        .create_employee(&new_employee())
        .await
        .unwrap_err();
    assert_eq!(err.error, "Failed to add employee");
}

#[tokio::test]
async fn update_employee_puts_to_encoded_path_without_immutable_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/api/employees/E%2F01");
        then.status(200).json_body(json!({
            "success": true,
            "data": employee_json("E/01")
        }));
    });

    let update = EmployeeUpdate {
        full_name: Some("Alice Renamed".into()),
        status: Some(EmployeeStatus::OnLeave),
        ..EmployeeUpdate::default()
    };
    let updated = client_for(&server)
        .update_employee("E/01", &update)
        .await
        .unwrap();
    assert_eq!(updated.employee_id, "E/01");

    let body = server.last_request().body.expect("json body");
    assert_eq!(body["full_name"], "Alice Renamed");
    assert_eq!(body["status"], "On Leave");
    assert!(body.get("employee_id").is_none());
    assert!(body.get("email").is_none());
}

#[tokio::test]
async fn update_employee_not_found_uses_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/api/employees/E404");
        then.status(404)
            .json_body(json!({ "detail": "Employee with ID E404 not found" }));
    });

    let err = client_for(&server)
        .update_employee("E404", &EmployeeUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.error, "Employee with ID E404 not found");
}

#[tokio::test]
async fn delete_employee_succeeds_without_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/E001");
        then.status(200)
            .json_body(json!({ "success": true, "message": "Employee deleted" }));
    });

    client_for(&server).delete_employee("E001").await.unwrap();
    assert_eq!(server.last_request().method, DELETE);
}

#[tokio::test]
async fn delete_employee_failure_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/E001");
        then.status(500).json_body(json!({}));
    });

    let err = client_for(&server).delete_employee("E001").await.unwrap_err();
    assert_eq!(err.error, "Failed to delete employee");
}

#[tokio::test]
async fn list_attendance_decodes_records() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/");
        then.status(200).json_body(json!({
            "success": true,
            "data": [
                record_json("a1", "E001", "2026-10-16", true),
                record_json("a2", "E002", "2026-10-15T00:00:00", false)
            ]
        }));
    });

    let records = client_for(&server).list_attendance().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1].attendance_date,
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    );
    assert!(!records[1].is_present);
}

#[tokio::test]
async fn mark_attendance_sends_employee_id_in_query() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/");
        then.status(201).json_body(json!({
            "success": true,
            "data": record_json("a1", "E001", "2026-10-16", true)
        }));
    });

    let payload = MarkAttendance {
        attendance_date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        is_present: true,
        check_in_time: Some("09:00".into()),
        check_out_time: Some("17:00".into()),
        notes: None,
    };
    let record = client_for(&server)
        .mark_attendance("E001", &payload)
        .await
        .unwrap();
    assert_eq!(record.id, "a1");

    let request = server.last_request();
    assert_eq!(request.query.as_deref(), Some("employee_id=E001"));
    let body = request.body.expect("json body");
    assert_eq!(body["attendance_date"], "2026-10-16");
    assert_eq!(body["check_in_time"], "09:00");
    assert!(body.get("notes").is_none());
}

#[tokio::test]
async fn mark_absent_omits_clock_times() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/");
        then.status(201).json_body(json!({
            "success": true,
            "data": record_json("a2", "E001", "2026-10-16", false)
        }));
    });

    let payload = MarkAttendance {
        attendance_date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        is_present: false,
        check_in_time: None,
        check_out_time: None,
        notes: Some("Sick".into()),
    };
    let record = client_for(&server)
        .mark_attendance("E001", &payload)
        .await
        .unwrap();
    assert!(record.check_in_time.is_none());

    let body = server.last_request().body.expect("json body");
    assert!(body.get("check_in_time").is_none());
    assert!(body.get("check_out_time").is_none());
    assert_eq!(body["notes"], "Sick");
}

#[tokio::test]
async fn mark_attendance_duplicate_surfaces_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance/");
        then.status(400).json_body(json!({
            "detail": "Attendance already marked for this date"
        }));
    });

    let payload = MarkAttendance {
        attendance_date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        is_present: true,
        check_in_time: None,
        check_out_time: None,
        notes: None,
    };
    let err = client_for(&server)
        .mark_attendance("E001", &payload)
        .await
        .unwrap_err();
    assert_eq!(err.error, "Attendance already marked for this date");
}

#[tokio::test]
async fn employee_attendance_uses_employee_path() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/employee/E001");
        then.status(200).json_body(json!({
            "success": true,
            "data": [record_json("a1", "E001", "2026-10-16", true)]
        }));
    });

    let records = client_for(&server)
        .get_employee_attendance("E001")
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, "E001");
}

#[tokio::test]
async fn attendance_by_date_formats_iso_date() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/date/2026-01-05");
        then.status(200).json_body(json!({ "success": true, "data": null }));
    });

    let records = client_for(&server)
        .get_attendance_by_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
        .await
        .unwrap();
    assert!(records.is_empty());
}
