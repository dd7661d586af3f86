use crate::api::{ApiClient, ApiResult, AttendanceRecord, Employee, MarkAttendance};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> ApiResult<Vec<Employee>> {
        self.client.list_employees().await
    }

    /// Nothing selected resolves to an empty history without a request.
    pub async fn fetch_history(
        &self,
        employee_id: Option<String>,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        match employee_id {
            Some(id) => self.client.get_employee_attendance(&id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn mark_attendance(
        &self,
        employee_id: String,
        payload: MarkAttendance,
    ) -> ApiResult<AttendanceRecord> {
        self.client.mark_attendance(&employee_id, &payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::{MockServer, GET};
    use serde_json::json;

    #[tokio::test]
    async fn no_selection_skips_the_request() {
        let server = MockServer::start();
        let repo = AttendanceRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let history = repo.fetch_history(None).await.expect("empty history");
        assert!(history.is_empty());
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn selected_employee_loads_their_history() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/employee/E001");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{
                    "id": "a1",
                    "employee_id": "E001",
                    "attendance_date": "2026-10-16",
                    "is_present": false
                }]
            }));
        });
        let repo = AttendanceRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let history = repo
            .fetch_history(Some("E001".into()))
            .await
            .expect("history");
        assert_eq!(history.len(), 1);
        assert!(!history[0].is_present);
    }
}
