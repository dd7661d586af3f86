use chrono::NaiveDate;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiResult, AttendanceRecord, MarkAttendance},
};

impl ApiClient {
    pub async fn list_attendance(&self) -> ApiResult<Vec<AttendanceRecord>> {
        let url = self.endpoint("attendance/").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::read_list(response, "Failed to fetch attendance").await
    }

    /// Marks attendance for one employee. The id travels in the query string,
    /// the record in the body.
    pub async fn mark_attendance(
        &self,
        employee_id: &str,
        payload: &MarkAttendance,
    ) -> ApiResult<AttendanceRecord> {
        let url = self.endpoint("attendance/").await;
        let response = self
            .send(
                self.http_client()
                    .post(url)
                    .query(&[("employee_id", employee_id)])
                    .json(payload),
            )
            .await?;
        Self::read_item(response, "Failed to mark attendance").await
    }

    pub async fn get_employee_attendance(
        &self,
        employee_id: &str,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        let url = self
            .endpoint(&format!(
                "attendance/employee/{}",
                encode_segment(employee_id)
            ))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::read_list(response, "Failed to fetch attendance").await
    }

    pub async fn get_attendance_by_date(
        &self,
        date: NaiveDate,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        let url = self
            .endpoint(&format!("attendance/date/{}", date.format("%Y-%m-%d")))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::read_list(response, "Failed to fetch attendance").await
    }
}
