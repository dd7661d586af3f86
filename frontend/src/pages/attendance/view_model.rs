use super::{
    repository::AttendanceRepository,
    utils::{AttendanceFormValues, HistoryQuery},
};
use crate::{
    api::{ApiClient, ApiError, ApiResult, AttendanceRecord, Employee},
    components::error::{flash_success, MessageState},
    state::{
        fetch::{use_fetch, FetchState},
        form::{submit_form, use_form, FormState, SUBMIT_ERROR_FIELD},
    },
    utils::time::today_local,
};
use chrono::NaiveDate;
use leptos::*;
use std::{future::Future, rc::Rc};

pub const NO_EMPLOYEE_SELECTED: &str = "Please select an employee";

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub today: NaiveDate,
    pub employees: FetchState<Vec<Employee>>,
    pub history_query: RwSignal<HistoryQuery>,
    pub history: FetchState<Vec<AttendanceRecord>>,
    pub form: RwSignal<FormState<AttendanceFormValues>>,
    pub messages: RwSignal<MessageState>,
    repository: StoredValue<AttendanceRepository>,
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));
    let today = today_local();

    let repo = repository.clone();
    let employees = use_fetch(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_employees().await }
        },
    );

    let history_query = create_rw_signal(HistoryQuery::default());
    let repo = repository.clone();
    let history = use_fetch(
        move || history_query.get(),
        move |query: HistoryQuery| {
            let repo = repo.clone();
            async move { repo.fetch_history(query.employee_id).await }
        },
    );

    AttendanceViewModel {
        today,
        employees,
        history_query,
        history,
        form: use_form(AttendanceFormValues::for_date(today)),
        messages: create_rw_signal(MessageState::default()),
        repository: store_value(repository),
    }
}

impl AttendanceViewModel {
    pub fn selected_employee(&self) -> Option<String> {
        self.history_query.with(|query| query.employee_id.clone())
    }

    pub fn select_employee(&self, employee_id: Option<String>) {
        let employee_id = employee_id.filter(|id| !id.trim().is_empty());
        self.history_query
            .update(|query| *query = query.with_employee(employee_id));
    }

    /// The employee to mark, or a `VALIDATION_ERROR` when none is chosen.
    pub fn require_selection(&self) -> ApiResult<String> {
        self.history_query
            .with_untracked(|query| query.employee_id.clone())
            .ok_or_else(|| ApiError::validation(NO_EMPLOYEE_SELECTED))
    }

    pub fn submit(&self) {
        if let Some(task) = self.start_submit() {
            spawn_local(task);
        }
    }

    /// Checks the selection now and returns the request to await. A missing
    /// selection is reported in the alert region and yields `None`.
    pub fn start_submit(&self) -> Option<impl Future<Output = ()> + 'static> {
        let vm = *self;
        let employee_id = match vm.require_selection() {
            Ok(employee_id) => employee_id,
            Err(err) => {
                vm.messages.update(|state| state.set_error(err.error));
                return None;
            }
        };

        vm.messages.update(MessageState::clear);
        let repo = vm.repository.get_value();
        let today = vm.today;
        Some(async move {
            let succeeded = submit_form(vm.form, move |values| async move {
                repo.mark_attendance(employee_id, values.to_request(today))
                    .await
                    .map(|_| ())
                    .map_err(|err| err.error)
            })
            .await;

            if succeeded {
                flash_success(vm.messages, "Attendance marked successfully!");
                vm.form.update(FormState::reset);
                vm.history_query.update(|query| *query = query.refresh());
            } else if let Some(message) = vm
                .form
                .with_untracked(|form| form.error(SUBMIT_ERROR_FIELD).map(str::to_string))
            {
                vm.messages.update(|state| state.set_error(message));
            }
        })
    }

    pub fn clear(&self) {
        self.form.update(FormState::reset);
        self.select_employee(None);
        self.messages.update(MessageState::clear);
    }
}
