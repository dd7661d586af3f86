use log::debug;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiResult, Employee, EmployeeUpdate, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let url = self.endpoint("employees").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::read_list(response, "Failed to fetch employees").await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> ApiResult<Employee> {
        debug!("Creating employee {}", payload.employee_id);
        let url = self.endpoint("employees").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        Self::read_item(response, "Failed to add employee").await
    }

    pub async fn update_employee(
        &self,
        employee_id: &str,
        payload: &EmployeeUpdate,
    ) -> ApiResult<Employee> {
        let url = self
            .endpoint(&format!("employees/{}", encode_segment(employee_id)))
            .await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        Self::read_item(response, "Failed to update employee").await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> ApiResult<()> {
        let url = self
            .endpoint(&format!("employees/{}", encode_segment(employee_id)))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::read_empty(response, "Failed to delete employee").await
    }
}
