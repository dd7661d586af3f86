use chrono::NaiveDate;

use crate::api::{Employee, MarkAttendance};

pub const DEFAULT_CHECK_IN: &str = "09:00";
pub const DEFAULT_CHECK_OUT: &str = "17:00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormValues {
    pub attendance_date: NaiveDate,
    pub is_present: bool,
    pub check_in_time: String,
    pub check_out_time: String,
    pub notes: String,
}

impl AttendanceFormValues {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            attendance_date: date,
            is_present: true,
            check_in_time: DEFAULT_CHECK_IN.to_string(),
            check_out_time: DEFAULT_CHECK_OUT.to_string(),
            notes: String::new(),
        }
    }

    /// Attendance is only ever marked for `today`, whatever the form holds.
    /// Clock times are dropped for an absence.
    pub fn to_request(&self, today: NaiveDate) -> MarkAttendance {
        let time = |value: &str| {
            let value = value.trim();
            (self.is_present && !value.is_empty()).then(|| value.to_string())
        };
        let notes = self.notes.trim();
        MarkAttendance {
            attendance_date: today,
            is_present: self.is_present,
            check_in_time: time(&self.check_in_time),
            check_out_time: time(&self.check_out_time),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

/// Key for the history fetch. Bumping `token` reloads the same employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub employee_id: Option<String>,
    pub token: u32,
}

impl HistoryQuery {
    pub fn with_employee(&self, employee_id: Option<String>) -> Self {
        Self {
            employee_id,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(&self) -> Self {
        self.with_employee(self.employee_id.clone())
    }
}

pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}

pub fn presence_label(is_present: bool) -> &'static str {
    if is_present {
        "Present"
    } else {
        "Absent"
    }
}

pub fn presence_badge_class(is_present: bool) -> &'static str {
    if is_present {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    }
}

pub fn format_history_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
