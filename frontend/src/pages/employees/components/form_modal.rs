use crate::{
    api::EmployeeStatus,
    components::common::{Button, ButtonVariant},
    pages::employees::{
        utils::{
            avatar_classes, card_initials, EmployeeFormValues, FIELD_DEPARTMENT, FIELD_EMAIL,
            FIELD_EMPLOYEE_ID, FIELD_FULL_NAME,
        },
        view_model::EmployeesViewModel,
    },
    state::form::SUBMIT_ERROR_FIELD,
};
use leptos::{ev, *};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-border rounded-md bg-surface-elevated text-sm text-fg disabled:opacity-60";
const LABEL_CLASS: &str = "block text-xs font-semibold text-fg mb-2 uppercase tracking-wide";

#[component]
pub fn EmployeeFormModal(vm: EmployeesViewModel) -> impl IntoView {
    let is_edit = move || vm.editing.with(Option::is_some);
    let submitting = Signal::derive(move || vm.form.with(|f| f.is_submitting));
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        vm.submit();
    };

    view! {
        <Show when=move || vm.modal_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| vm.close_modal()
                ></button>
                <div
                    class="relative z-[61] w-full max-w-2xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-6"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="flex items-center gap-4">
                        {move || vm.editing.get().map(|employee| view! {
                            <div class=format!(
                                "size-14 rounded-full flex items-center justify-center font-bold text-2xl {}",
                                avatar_classes(&employee.full_name)
                            )>
                                {card_initials(&employee.full_name)}
                            </div>
                        })}
                        <div>
                            <h2 class="text-xl font-semibold text-fg">
                                {move || if is_edit() { "Edit Employee" } else { "Add New Employee" }}
                            </h2>
                            <p class="text-sm text-fg-muted">
                                {move || if is_edit() {
                                    "Update employee information"
                                } else {
                                    "Add a new employee to the system"
                                }}
                            </p>
                        </div>
                    </div>

                    <Show when=move || vm.form.with(|f| f.error(SUBMIT_ERROR_FIELD).is_some())>
                        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-2 rounded text-sm">
                            {move || vm.form.with(|f| f.error(SUBMIT_ERROR_FIELD).unwrap_or_default().to_string())}
                        </div>
                    </Show>

                    <form class="space-y-5" on:submit=on_submit>
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                            <TextField
                                vm=vm
                                field=FIELD_EMPLOYEE_ID
                                label="Employee ID *"
                                read=|v| v.employee_id.clone()
                                write=|v, value| v.employee_id = value
                                locked_when_editing=true
                            />
                            <TextField
                                vm=vm
                                field="role"
                                label="Role"
                                read=|v| v.role.clone()
                                write=|v, value| v.role = value
                            />
                        </div>
                        <TextField
                            vm=vm
                            field=FIELD_FULL_NAME
                            label="Full Name *"
                            read=|v| v.full_name.clone()
                            write=|v, value| v.full_name = value
                        />
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                            <TextField
                                vm=vm
                                field=FIELD_EMAIL
                                label="Email *"
                                input_type="email"
                                read=|v| v.email.clone()
                                write=|v, value| v.email = value
                                locked_when_editing=true
                            />
                            <TextField
                                vm=vm
                                field=FIELD_DEPARTMENT
                                label="Department *"
                                read=|v| v.department.clone()
                                write=|v, value| v.department = value
                            />
                        </div>
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                            <div>
                                <label class=LABEL_CLASS for="status">{"Status"}</label>
                                <select
                                    id="status"
                                    class=INPUT_CLASS
                                    on:change=move |ev| {
                                        let status = EmployeeStatus::from_label(&event_target_value(&ev));
                                        vm.form.update(|f| f.change("status", |v| v.status = status));
                                    }
                                >
                                    {EmployeeStatus::ALL.iter().map(|status| {
                                        let status = *status;
                                        view! {
                                            <option
                                                value=status.label()
                                                selected=move || vm.form.with(|f| f.values.status == status)
                                            >
                                                {status.label()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                            <TextField
                                vm=vm
                                field="phone"
                                label="Phone"
                                input_type="tel"
                                read=|v| v.phone.clone()
                                write=|v, value| v.phone = value
                            />
                            <TextField
                                vm=vm
                                field="location"
                                label="Location"
                                read=|v| v.location.clone()
                                write=|v, value| v.location = value
                            />
                        </div>
                        <div class="flex justify-end gap-2 pt-2">
                            <Button
                                variant=ButtonVariant::Secondary
                                attr:type="button"
                                on:click=move |_| vm.close_modal()
                            >
                                {"Cancel"}
                            </Button>
                            <Button attr:type="submit" loading=submitting>
                                {move || if is_edit() { "Update" } else { "Add Employee" }}
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn TextField(
    vm: EmployeesViewModel,
    field: &'static str,
    label: &'static str,
    read: fn(&EmployeeFormValues) -> String,
    write: fn(&mut EmployeeFormValues, String),
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] locked_when_editing: bool,
) -> impl IntoView {
    let error = move || vm.form.with(|f| f.error(field).map(str::to_string));
    view! {
        <div>
            <label class=LABEL_CLASS for=field>{label}</label>
            <input
                id=field
                name=field
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                disabled=move || locked_when_editing && vm.editing.with(Option::is_some)
                prop:value=move || vm.form.with(|f| read(&f.values))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| f.change(field, |v| write(v, value)));
                }
            />
            {move || error().map(|message| view! {
                <p class="mt-1 text-xs text-status-error-text">{message}</p>
            })}
        </div>
    }
}
