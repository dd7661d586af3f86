use crate::api::{ApiClient, ApiResult, Employee, EmployeeUpdate, NewEmployee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> ApiResult<Vec<Employee>> {
        self.client.list_employees().await
    }

    pub async fn create_employee(&self, payload: NewEmployee) -> ApiResult<Employee> {
        self.client.create_employee(&payload).await
    }

    pub async fn update_employee(
        &self,
        employee_id: String,
        payload: EmployeeUpdate,
    ) -> ApiResult<Employee> {
        self.client.update_employee(&employee_id, &payload).await
    }

    pub async fn delete_employee(&self, employee_id: String) -> ApiResult<()> {
        self.client.delete_employee(&employee_id).await
    }
}
