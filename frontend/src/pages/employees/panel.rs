use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::{AlertBanner, InlineErrorMessage},
        layout::LoadingSpinner,
    },
    pages::employees::{
        components::{filters::EmployeeFilterBar, form_modal::EmployeeFormModal, list::EmployeeGrid},
        layout::EmployeesFrame,
        view_model::use_employees_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let total = Signal::derive(move || vm.employees.data.with(|d| d.as_ref().map_or(0, Vec::len)));
    let has_data = move || vm.employees.data.with(Option::is_some);
    let first_load = move || vm.employees.loading.get() && !has_data();
    let is_empty = move || total.get() == 0;

    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee| format!("Delete {}? This cannot be undone.", employee.full_name))
            .unwrap_or_default()
    });

    view! {
        <EmployeesFrame total=total on_add=Callback::new(move |_| vm.open_create())>
            <AlertBanner messages=vm.messages />
            <InlineErrorMessage error=vm.employees.error.into() />
            {move || {
                if first_load() {
                    view! {
                        <div class="text-center py-12">
                            <LoadingSpinner />
                            <p class="text-fg-muted">{"Loading employees..."}</p>
                        </div>
                    }
                    .into_view()
                } else if is_empty() {
                    view! {
                        <div class="space-y-4 text-center">
                            <EmptyState title="No employees found" description="Add your first employee to get started." />
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                on:click=move |_| vm.open_create()
                            >
                                {"Add Your First Employee"}
                            </button>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <EmployeeFilterBar filters=vm.filters departments=vm.departments />
                        <EmployeeGrid
                            employees=vm.visible
                            on_edit=Callback::new(move |employee| vm.open_edit(employee))
                            on_delete=Callback::new(move |employee| vm.request_delete(employee))
                        />
                    }
                    .into_view()
                }
            }}
            <EmployeeFormModal vm=vm />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete employee"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                busy=vm.delete_action.pending()
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </EmployeesFrame>
    }
}
