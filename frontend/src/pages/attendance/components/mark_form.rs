use crate::{
    api::Employee,
    components::common::{Button, ButtonVariant},
    pages::attendance::{
        utils::{employee_option_label, presence_label},
        view_model::AttendanceViewModel,
    },
    utils::time::format_long_date,
};
use leptos::{ev, *};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-border rounded-md bg-surface-elevated text-sm text-fg";
const LABEL_CLASS: &str = "block text-xs font-semibold text-fg mb-2 uppercase tracking-wide";

#[component]
pub fn MarkAttendanceForm(
    vm: AttendanceViewModel,
    #[prop(into)] employees: Signal<Vec<Employee>>,
) -> impl IntoView {
    let submitting = Signal::derive(move || vm.form.with(|f| f.is_submitting));
    let is_present = move || vm.form.with(|f| f.values.is_present);
    let selected = move || vm.selected_employee().unwrap_or_default();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        vm.submit();
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">{"Mark Attendance"}</h2>
            <form class="space-y-5" on:submit=on_submit>
                <div>
                    <label class=LABEL_CLASS for="employee">{"Employee"}</label>
                    <select
                        id="employee"
                        class=INPUT_CLASS
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.select_employee(Some(value));
                        }
                    >
                        <option value="" selected=move || selected().is_empty()>
                            {"-- Select an employee --"}
                        </option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|employee| {
                                    let id = employee.employee_id.clone();
                                    let label = employee_option_label(&employee);
                                    let value = id.clone();
                                    view! {
                                        <option value=value selected=move || selected() == id>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <span class=LABEL_CLASS>{"Date"}</span>
                        <p class="px-3 py-2 text-sm text-fg bg-surface-muted rounded-md">
                            {format_long_date(vm.today)}
                        </p>
                    </div>
                    <div>
                        <label class=LABEL_CLASS for="is_present">{"Status"}</label>
                        <select
                            id="is_present"
                            class=INPUT_CLASS
                            on:change=move |ev| {
                                let present = event_target_value(&ev) == "present";
                                vm.form.update(|f| f.change("is_present", |v| v.is_present = present));
                            }
                        >
                            <option value="present" selected=is_present>{presence_label(true)}</option>
                            <option value="absent" selected=move || !is_present()>{presence_label(false)}</option>
                        </select>
                    </div>
                </div>

                <Show when=is_present>
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                        <div>
                            <label class=LABEL_CLASS for="check_in_time">{"Check In"}</label>
                            <input
                                id="check_in_time"
                                type="time"
                                class=INPUT_CLASS
                                prop:value=move || vm.form.with(|f| f.values.check_in_time.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.change("check_in_time", |v| v.check_in_time = value));
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS for="check_out_time">{"Check Out"}</label>
                            <input
                                id="check_out_time"
                                type="time"
                                class=INPUT_CLASS
                                prop:value=move || vm.form.with(|f| f.values.check_out_time.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.change("check_out_time", |v| v.check_out_time = value));
                                }
                            />
                        </div>
                    </div>
                </Show>

                <div>
                    <label class=LABEL_CLASS for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        rows="3"
                        class=INPUT_CLASS
                        placeholder="Optional notes..."
                        prop:value=move || vm.form.with(|f| f.values.notes.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.change("notes", |v| v.notes = value));
                        }
                    ></textarea>
                </div>

                <div class="flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| vm.clear()
                    >
                        {"Clear"}
                    </Button>
                    <Button attr:type="submit" loading=submitting>
                        {"Mark Attendance"}
                    </Button>
                </div>
            </form>
        </section>
    }
}
