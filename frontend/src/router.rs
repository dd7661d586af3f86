use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
            </Routes>
        </Router>
    }
}
