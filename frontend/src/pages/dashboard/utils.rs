use chrono::{Datelike, Duration, NaiveDate};

use crate::api::{AttendanceRecord, Employee};

pub const TREND_MONTHS: i32 = 6;
pub const TREND_DAYS: i64 = 7;
pub const RATE_CHART_EMPLOYEES: usize = 5;
pub const RATE_LABEL_CHARS: usize = 12;
pub const RECENT_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub present: u32,
    pub absent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    pub label: String,
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentToday {
    pub count: u32,
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub name: String,
    pub count: u32,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRate {
    pub name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSplit {
    pub present: u32,
    pub absent: u32,
    pub present_percent: u32,
    pub absent_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub initials: String,
    pub name: String,
    pub status: &'static str,
    pub date: NaiveDate,
}

/// Everything the dashboard shows, derived from the two collections.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_records: usize,
    pub present_today: PresentToday,
    pub monthly: Vec<MonthlyBucket>,
    pub daily: Vec<DailyPoint>,
    pub departments: Vec<DepartmentShare>,
    pub employee_rates: Vec<EmployeeRate>,
    pub status: StatusSplit,
    pub recent: Vec<RecentEntry>,
}

impl DashboardStats {
    pub fn build(employees: &[Employee], records: &[AttendanceRecord], today: NaiveDate) -> Self {
        Self {
            total_employees: employees.len(),
            total_records: records.len(),
            present_today: present_today(records, employees.len(), today),
            monthly: monthly_buckets(records, today),
            daily: daily_trend(records, today),
            departments: department_distribution(employees),
            employee_rates: employee_attendance_rates(employees, records),
            status: status_split(records),
            recent: recent_attendance(records),
        }
    }
}

fn shift_month(year: i32, month: u32, back: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 - back;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Trailing six calendar months including the current one, oldest first.
pub fn monthly_buckets(records: &[AttendanceRecord], today: NaiveDate) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let (year, month) = shift_month(today.year(), today.month(), back);
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|first| first.format("%b %y").to_string())
                .unwrap_or_default();
            MonthlyBucket {
                label,
                year,
                month,
                present: 0,
                absent: 0,
            }
        })
        .collect();

    for record in records {
        let date = record.attendance_date;
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| b.year == date.year() && b.month == date.month())
        {
            if record.is_present {
                bucket.present += 1;
            } else {
                bucket.absent += 1;
            }
        }
    }
    buckets
}

/// Trailing seven days including today, oldest first.
pub fn daily_trend(records: &[AttendanceRecord], today: NaiveDate) -> Vec<DailyPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let count = records
                .iter()
                .filter(|record| record.attendance_date == date)
                .count() as u32;
            DailyPoint {
                label: date.format("%b %-d").to_string(),
                date,
                count,
            }
        })
        .collect()
}

pub fn present_today(
    records: &[AttendanceRecord],
    employee_count: usize,
    today: NaiveDate,
) -> PresentToday {
    let count = records
        .iter()
        .filter(|record| record.attendance_date == today && record.is_present)
        .count() as u32;
    let rate = if employee_count == 0 {
        0
    } else {
        (count as f64 / employee_count as f64 * 100.0).round() as u32
    };
    PresentToday { count, rate }
}

/// Head count per department in first-seen order.
pub fn department_distribution(employees: &[Employee]) -> Vec<DepartmentShare> {
    let mut shares: Vec<DepartmentShare> = Vec::new();
    for employee in employees {
        let name = employee.department_or_unassigned();
        match shares.iter_mut().find(|share| share.name == name) {
            Some(share) => share.count += 1,
            None => shares.push(DepartmentShare {
                name: name.to_string(),
                count: 1,
                width: 0.0,
            }),
        }
    }
    let total = employees.len() as f64;
    for share in &mut shares {
        share.width = (share.count as f64 / total * 100.0).min(100.0);
    }
    shares
}

pub fn employee_attendance_rates(
    employees: &[Employee],
    records: &[AttendanceRecord],
) -> Vec<EmployeeRate> {
    employees
        .iter()
        .take(RATE_CHART_EMPLOYEES)
        .map(|employee| {
            let (present, total) = records
                .iter()
                .filter(|record| record.employee_id == employee.employee_id)
                .fold((0u32, 0u32), |(present, total), record| {
                    (present + u32::from(record.is_present), total + 1)
                });
            let rate = if total == 0 {
                0.0
            } else {
                (present as f64 / total as f64 * 1000.0).round() / 10.0
            };
            EmployeeRate {
                name: truncate_chars(&employee.full_name, RATE_LABEL_CHARS),
                rate,
            }
        })
        .collect()
}

pub fn status_split(records: &[AttendanceRecord]) -> StatusSplit {
    let present = records.iter().filter(|record| record.is_present).count() as u32;
    let absent = records.len() as u32 - present;
    let share = |part: u32| {
        if records.is_empty() {
            0
        } else {
            (part as f64 / records.len() as f64 * 100.0).round() as u32
        }
    };
    StatusSplit {
        present,
        absent,
        present_percent: share(present),
        absent_percent: share(absent),
    }
}

/// The first few records as the server returned them (newest first).
pub fn recent_attendance(records: &[AttendanceRecord]) -> Vec<RecentEntry> {
    records
        .iter()
        .take(RECENT_LIMIT)
        .map(|record| RecentEntry {
            initials: initials(record.employee_name.as_deref()),
            name: record
                .employee_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            status: if record.is_present { "Present" } else { "Absent" },
            date: record.attendance_date,
        })
        .collect()
}

/// First two characters of the name, upper-cased; `??` when there is no name.
pub fn initials(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.chars().take(2).collect::<String>().to_uppercase(),
        None => "??".to_string(),
    }
}

pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

pub fn employees_label(count: u32) -> &'static str {
    if count == 1 {
        "employee"
    } else {
        "employees"
    }
}
