use crate::api::{ApiClient, ApiResult, AttendanceRecord, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> ApiResult<Vec<Employee>> {
        self.client.list_employees().await
    }

    pub async fn fetch_attendance(&self) -> ApiResult<Vec<AttendanceRecord>> {
        self.client.list_attendance().await
    }
}
