use crate::api::{ApiError, ApiResult, Employee, EmployeeStatus, EmployeeUpdate, NewEmployee};

pub const FIELD_EMPLOYEE_ID: &str = "employee_id";
pub const FIELD_FULL_NAME: &str = "full_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_DEPARTMENT: &str = "department";

pub const ALL_DEPARTMENTS: &str = "All Department";
pub const ALL_STATUSES: &str = "All Status";
pub const INVALID_FORM: &str = "Please fix the highlighted fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFormValues {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub status: EmployeeStatus,
    pub phone: String,
    pub location: String,
}

impl Default for EmployeeFormValues {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            full_name: String::new(),
            email: String::new(),
            department: String::new(),
            role: "Employee".to_string(),
            status: EmployeeStatus::Active,
            phone: String::new(),
            location: String::new(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EmployeeFormValues {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone().unwrap_or_default(),
            role: employee.role.clone(),
            status: employee.status,
            phone: employee.phone.clone().unwrap_or_default(),
            location: employee.location.clone().unwrap_or_default(),
        }
    }

    pub fn to_new(&self) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            role: non_empty(&self.role).unwrap_or_else(|| "Employee".to_string()),
            status: self.status,
            phone: non_empty(&self.phone),
            location: non_empty(&self.location),
        }
    }

    /// Editable fields only; the id and email stay as created.
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            full_name: non_empty(&self.full_name),
            department: non_empty(&self.department),
            role: non_empty(&self.role),
            status: Some(self.status),
            phone: non_empty(&self.phone),
            location: non_empty(&self.location),
        }
    }

    /// Field errors found before any request is made. Immutable fields are
    /// not checked while editing.
    pub fn validate(&self, editing: bool) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();
        if !editing {
            let id = self.employee_id.trim();
            if id.is_empty() {
                errors.push((FIELD_EMPLOYEE_ID, "Employee ID is required".to_string()));
            } else if !(3..=20).contains(&id.chars().count())
                || !id.chars().all(|c| c.is_ascii_alphanumeric())
            {
                errors.push((
                    FIELD_EMPLOYEE_ID,
                    "Employee ID must be 3-20 letters or digits".to_string(),
                ));
            }
        }
        if self.full_name.trim().is_empty() {
            errors.push((FIELD_FULL_NAME, "Full name is required".to_string()));
        }
        if !editing {
            let email = self.email.trim();
            if email.is_empty() {
                errors.push((FIELD_EMAIL, "Email is required".to_string()));
            } else if !is_plausible_email(email) {
                errors.push((FIELD_EMAIL, "Enter a valid email address".to_string()));
            }
        }
        if self.department.trim().is_empty() {
            errors.push((FIELD_DEPARTMENT, "Department is required".to_string()));
        }
        errors
    }

    /// `validate` folded into a `VALIDATION_ERROR` with per-field details.
    pub fn check(&self, editing: bool) -> ApiResult<()> {
        let errors = self.validate(editing);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::invalid_fields(INVALID_FORM, errors))
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilters {
    pub search: String,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeFilters {
    pub fn matches(&self, employee: &Employee) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || [&employee.full_name, &employee.email, &employee.role]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        let matches_department = self
            .department
            .as_deref()
            .map_or(true, |dept| employee.department_or_unassigned() == dept);
        let matches_status = self.status.map_or(true, |status| employee.status == status);
        matches_search && matches_department && matches_status
    }

    pub fn set_department_option(&mut self, option: &str) {
        self.department = (option != ALL_DEPARTMENTS).then(|| option.to_string());
    }

    pub fn set_status_option(&mut self, option: &str) {
        self.status = (option != ALL_STATUSES).then(|| EmployeeStatus::from_label(option));
    }
}

pub fn filter_employees(employees: &[Employee], filters: &EmployeeFilters) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| filters.matches(employee))
        .cloned()
        .collect()
}

/// Distinct departments, sorted, for the filter dropdown.
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    let mut options: Vec<String> = employees
        .iter()
        .map(|employee| employee.department_or_unassigned().to_string())
        .collect();
    options.sort();
    options.dedup();
    options
}

/// First letter of each word, upper-cased. `EM` for a blank name.
pub fn card_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase();
    if initials.is_empty() {
        "EM".to_string()
    } else {
        initials
    }
}

const AVATAR_PALETTE: [(&str, &str); 8] = [
    ("bg-blue-100", "text-blue-700"),
    ("bg-purple-100", "text-purple-700"),
    ("bg-pink-100", "text-pink-700"),
    ("bg-green-100", "text-green-700"),
    ("bg-orange-100", "text-orange-700"),
    ("bg-red-100", "text-red-700"),
    ("bg-indigo-100", "text-indigo-700"),
    ("bg-cyan-100", "text-cyan-700"),
];

pub fn avatar_classes(name: &str) -> String {
    let index = name
        .chars()
        .next()
        .map(|c| c as usize % AVATAR_PALETTE.len())
        .unwrap_or(0);
    let (bg, text) = AVATAR_PALETTE[index];
    format!("{} {}", bg, text)
}

pub fn status_badge_class(status: EmployeeStatus) -> &'static str {
    match status {
        EmployeeStatus::Active => "bg-green-100 text-green-800",
        EmployeeStatus::OnLeave => "bg-yellow-100 text-yellow-800",
        EmployeeStatus::Inactive => "bg-gray-100 text-gray-800",
    }
}
