use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ApiError {
    pub const NETWORK: &'static str = "NETWORK_ERROR";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const PARSE: &'static str = "PARSE_ERROR";
    pub const VALIDATION: &'static str = "VALIDATION_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";

    fn with_code(message: impl Into<String>, code: &str) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
            details: None,
        }
    }

    /// Transport failure. The user sees a generic message, the cause stays in `details`.
    pub fn network(cause: impl Into<String>) -> Self {
        Self {
            details: Some(Value::String(cause.into())),
            ..Self::with_code("Network error", Self::NETWORK)
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::with_code(message, Self::REQUEST_FAILED)
    }

    pub fn parse(cause: impl Into<String>) -> Self {
        Self {
            details: Some(Value::String(cause.into())),
            ..Self::with_code("Failed to parse response", Self::PARSE)
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_code(message, Self::VALIDATION)
    }

    /// Validation failure carrying per-field messages under `details.fields`.
    pub fn invalid_fields<'a>(
        message: impl Into<String>,
        fields: impl IntoIterator<Item = (&'a str, String)>,
    ) -> Self {
        let fields: serde_json::Map<String, Value> = fields
            .into_iter()
            .map(|(field, message)| (field.to_string(), Value::String(message)))
            .collect();
        Self {
            details: Some(serde_json::json!({ "fields": fields })),
            ..Self::validation(message)
        }
    }

    /// Field messages of a validation error, in field-name order.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        if !self.is_validation() {
            return Vec::new();
        }
        self.details
            .as_ref()
            .and_then(|details| details.get("fields"))
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(field, message)| {
                        message.as_str().map(|m| (field.clone(), m.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::with_code(message, Self::UNKNOWN)
    }

    /// Builds the error for a non-2xx response. `message` wins, then FastAPI's
    /// `detail` (plain string or validation list), then `fallback`.
    pub fn from_failure_body(status: u16, body: &str, fallback: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| fallback.to_string());
        Self {
            details: Some(serde_json::json!({ "status": status })),
            ..Self::request_failed(message)
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == Self::VALIDATION
    }
}

fn server_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        if !message.trim().is_empty() {
            return Some(message.to_string());
        }
    }
    match body.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// Wire shape shared by every endpoint: `{success, message, data}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "on leave" => EmployeeStatus::OnLeave,
            "inactive" => EmployeeStatus::Inactive,
            _ => EmployeeStatus::Active,
        }
    }
}

impl From<Option<String>> for EmployeeStatus {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(EmployeeStatus::from_label)
            .unwrap_or_default()
    }
}

impl From<EmployeeStatus> for String {
    fn from(value: EmployeeStatus) -> Self {
        value.label().to_string()
    }
}

fn default_role() -> String {
    "Employee".to_string()
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|role| role.trim().to_string())
        .filter(|role| !role.is_empty())
        .unwrap_or_else(default_role))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<String>,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_role", deserialize_with = "deserialize_role")]
    pub role: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Employee {
    pub fn department_or_unassigned(&self) -> &str {
        self.department
            .as_deref()
            .map(str::trim)
            .filter(|dept| !dept.is_empty())
            .unwrap_or("Unassigned")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial update. `employee_id` and `email` are fixed after creation and are
/// deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(deserialize_with = "deserialize_record_date")]
    pub attendance_date: NaiveDate,
    pub is_present: bool,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub attendance_date: NaiveDate,
    pub is_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Accepts `YYYY-MM-DD` or any ISO datetime; only the calendar date is kept.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn deserialize_record_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_record_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid attendance_date: {raw}")))
}

/// Time of day from `HH:MM`, `HH:MM:SS` or an ISO datetime.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.time());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt.time());
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
