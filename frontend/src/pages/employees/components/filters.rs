use crate::{
    api::EmployeeStatus,
    pages::employees::utils::{EmployeeFilters, ALL_DEPARTMENTS, ALL_STATUSES},
};
use leptos::*;

const CONTROL_CLASS: &str = "px-3 py-2 border border-border rounded-md bg-surface-elevated text-sm text-fg";

#[component]
pub fn EmployeeFilterBar(
    filters: RwSignal<EmployeeFilters>,
    #[prop(into)] departments: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="mb-8 flex flex-col gap-2 sm:flex-row sm:items-center">
            <input
                type="text"
                class=format!("flex-1 {}", CONTROL_CLASS)
                placeholder="Search employees..."
                prop:value=move || filters.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.search = value);
                }
            />
            <select
                class=CONTROL_CLASS
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.set_department_option(&value));
                }
            >
                <option value=ALL_DEPARTMENTS>{ALL_DEPARTMENTS}</option>
                {move || departments.get().into_iter().map(|dept| {
                    let selected = filters.with(|f| f.department.as_deref() == Some(dept.as_str()));
                    view! { <option value=dept.clone() selected=selected>{dept.clone()}</option> }
                }).collect_view()}
            </select>
            <select
                class=CONTROL_CLASS
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.set_status_option(&value));
                }
            >
                <option value=ALL_STATUSES>{ALL_STATUSES}</option>
                {EmployeeStatus::ALL.iter().map(|status| {
                    let status = *status;
                    view! {
                        <option
                            value=status.label()
                            selected=move || filters.with(|f| f.status == Some(status))
                        >
                            {status.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
