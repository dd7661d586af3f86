use super::{repository::DashboardRepository, utils::DashboardStats};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, Employee},
    state::fetch::{use_fetch, FetchState},
    utils::time::today_local,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub employees: FetchState<Vec<Employee>>,
    pub attendance: FetchState<Vec<AttendanceRecord>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<ApiError>>,
    pub stats: Memo<DashboardStats>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));
    let today = today_local();

    let repo = repository.clone();
    let employees = use_fetch(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_employees().await }
        },
    );
    let repo = repository;
    let attendance = use_fetch(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_attendance().await }
        },
    );

    let loading = Signal::derive(move || employees.loading.get() || attendance.loading.get());
    let error = Signal::derive(move || employees.error.get().or_else(|| attendance.error.get()));
    let stats = create_memo(move |_| {
        let employees = employees.data.get().unwrap_or_default();
        let records = attendance.data.get().unwrap_or_default();
        DashboardStats::build(&employees, &records, today)
    });

    DashboardViewModel {
        employees,
        attendance,
        loading,
        error,
        stats,
    }
}
