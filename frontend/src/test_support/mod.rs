#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, Employee, EmployeeStatus};
    use chrono::NaiveDate;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    pub fn employee(employee_id: &str, full_name: &str, department: Option<&str>) -> Employee {
        Employee {
            id: Some(format!("doc-{}", employee_id)),
            employee_id: employee_id.to_string(),
            full_name: full_name.to_string(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: department.map(str::to_string),
            role: "Employee".to_string(),
            status: EmployeeStatus::Active,
            phone: None,
            location: None,
        }
    }

    pub fn record(
        id: &str,
        employee_id: &str,
        attendance_date: NaiveDate,
        is_present: bool,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            employee_name: Some(format!("Employee {}", employee_id)),
            attendance_date,
            is_present,
            check_in_time: is_present.then(|| "09:00".to_string()),
            check_out_time: is_present.then(|| "17:00".to_string()),
            notes: None,
        }
    }
}
