use super::{
    repository::EmployeesRepository,
    utils::{department_options, filter_employees, EmployeeFilters, EmployeeFormValues},
};
use crate::{
    api::{ApiClient, ApiResult, Employee},
    components::error::{flash_success, MessageState},
    state::{
        fetch::{use_fetch, FetchState},
        form::{submit_form, use_form, FormState, SUBMIT_ERROR_FIELD},
    },
};
use leptos::*;
use std::{future::Future, rc::Rc};

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_reload: RwSignal<u32>,
    pub employees: FetchState<Vec<Employee>>,
    pub filters: RwSignal<EmployeeFilters>,
    pub visible: Memo<Vec<Employee>>,
    pub departments: Memo<Vec<String>>,
    pub form: RwSignal<FormState<EmployeeFormValues>>,
    pub messages: RwSignal<MessageState>,
    pub modal_open: RwSignal<bool>,
    pub editing: RwSignal<Option<Employee>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub delete_action: Action<String, ApiResult<()>>,
    repository: StoredValue<EmployeesRepository>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let employees_reload = create_rw_signal(0u32);
    let repo_for_fetch = repository.clone();
    let employees = use_fetch(
        move || employees_reload.get(),
        move |_| {
            let repo = repo_for_fetch.clone();
            async move { repo.fetch_employees().await }
        },
    );

    let filters = create_rw_signal(EmployeeFilters::default());
    let visible = create_memo(move |_| {
        let all = employees.data.get().unwrap_or_default();
        filters.with(|filters| filter_employees(&all, filters))
    });
    let departments = create_memo(move |_| {
        employees
            .data
            .with(|data| department_options(data.as_deref().unwrap_or_default()))
    });

    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<Employee>);

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |employee_id: &String| {
        let repo = repo_for_delete.clone();
        let employee_id = employee_id.clone();
        async move { repo.delete_employee(employee_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    flash_success(messages, "Employee deleted successfully!");
                    employees_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => messages.update(|state| state.set_error(err.error)),
            }
        }
    });

    EmployeesViewModel {
        employees_reload,
        employees,
        filters,
        visible,
        departments,
        form: use_form(EmployeeFormValues::default()),
        messages,
        modal_open: create_rw_signal(false),
        editing: create_rw_signal(None),
        pending_delete,
        delete_action,
        repository: store_value(repository),
    }
}

impl EmployeesViewModel {
    pub fn open_create(&self) {
        self.editing.set(None);
        self.form.update(FormState::reset);
        self.messages.update(MessageState::clear);
        self.modal_open.set(true);
    }

    pub fn open_edit(&self, employee: Employee) {
        self.form.update(|form| {
            form.reset();
            form.set_values(EmployeeFormValues::from_employee(&employee));
        });
        self.editing.set(Some(employee));
        self.messages.update(MessageState::clear);
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.editing.set(None);
        self.form.update(FormState::reset);
    }

    /// Validates locally, then creates or updates. The modal stays open on failure.
    pub fn submit(&self) {
        if let Some(task) = self.start_submit() {
            spawn_local(task);
        }
    }

    /// Runs validation now. Returns the request to await, or `None` when
    /// the form was rejected before any network call.
    pub fn start_submit(&self) -> Option<impl Future<Output = ()> + 'static> {
        let vm = *self;
        let editing = vm.editing.get_untracked();
        let checked = vm
            .form
            .with_untracked(|form| form.values.check(editing.is_some()));
        if let Err(err) = checked {
            vm.form.update(|form| {
                for (field, message) in err.field_errors() {
                    form.set_field_error(&field, message);
                }
            });
            return None;
        }

        vm.messages.update(MessageState::clear);
        let repo = vm.repository.get_value();
        let is_edit = editing.is_some();
        Some(async move {
            let succeeded = submit_form(vm.form, move |values| async move {
                let result = match editing {
                    Some(existing) => repo
                        .update_employee(existing.employee_id, values.to_update())
                        .await
                        .map(|_| ()),
                    None => repo.create_employee(values.to_new()).await.map(|_| ()),
                };
                result.map_err(|err| err.error)
            })
            .await;

            if succeeded {
                vm.close_modal();
                flash_success(
                    vm.messages,
                    if is_edit {
                        "Employee updated successfully!"
                    } else {
                        "Employee added successfully!"
                    },
                );
                vm.employees_reload
                    .update(|value| *value = value.wrapping_add(1));
            } else if let Some(message) = vm
                .form
                .with_untracked(|form| form.error(SUBMIT_ERROR_FIELD).map(str::to_string))
            {
                vm.messages.update(|state| state.set_error(message));
            }
        })
    }

    pub fn request_delete(&self, employee: Employee) {
        self.messages.update(MessageState::clear);
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(employee.employee_id);
        }
    }
}
