use crate::{
    api::Employee,
    pages::employees::utils::{avatar_classes, card_initials, status_badge_class},
};
use leptos::*;

#[component]
pub fn EmployeeGrid(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.get().is_empty()
            fallback=|| view! {
                <div class="text-center py-12">
                    <p class="text-fg-muted">{"No employees match your filters"}</p>
                </div>
            }
        >
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4">
                <For
                    each=move || employees.get()
                    key=|employee| employee.employee_id.clone()
                    children=move |employee| view! {
                        <EmployeeCard employee=employee on_edit=on_edit on_delete=on_delete />
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn EmployeeCard(
    employee: Employee,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let for_edit = employee.clone();
    let for_delete = employee.clone();
    let avatar = format!(
        "size-12 rounded-full flex items-center justify-center font-bold text-lg {}",
        avatar_classes(&employee.full_name)
    );
    let badge = format!(
        "text-xs font-medium px-2 py-0.5 rounded {}",
        status_badge_class(employee.status)
    );

    view! {
        <div class="bg-surface-elevated rounded-xl border border-border hover:shadow-lg transition-shadow">
            <div class="p-5 flex justify-between items-start border-b border-border">
                <div class=avatar>{card_initials(&employee.full_name)}</div>
                <div class="relative">
                    <button
                        type="button"
                        aria-label="Employee actions"
                        class="text-fg-muted hover:text-fg text-lg"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {"⋮"}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="absolute right-0 mt-1 w-28 rounded-md bg-surface-elevated shadow-lg border border-border z-10">
                            <button
                                type="button"
                                class="block w-full text-left px-3 py-2 text-sm text-fg hover:bg-surface-muted"
                                on:click={
                                    let employee = for_edit.clone();
                                    move |_| {
                                        set_menu_open.set(false);
                                        on_edit.call(employee.clone());
                                    }
                                }
                            >
                                {"Edit"}
                            </button>
                            <button
                                type="button"
                                class="block w-full text-left px-3 py-2 text-sm text-status-error-text hover:bg-surface-muted"
                                on:click={
                                    let employee = for_delete.clone();
                                    move |_| {
                                        set_menu_open.set(false);
                                        on_delete.call(employee.clone());
                                    }
                                }
                            >
                                {"Delete"}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
            <div class="p-5">
                <h3 class="font-bold text-fg text-lg mb-1">{employee.full_name.clone()}</h3>
                <p class="text-sm text-fg-muted mb-4">{employee.role.clone()}</p>
                <div class="space-y-3 text-sm mb-5 text-fg-muted">
                    <div class="flex items-center gap-3">
                        <span>{"✉"}</span>
                        <a href=format!("mailto:{}", employee.email) class="break-all">{employee.email.clone()}</a>
                    </div>
                    {employee.phone.clone().map(|phone| view! {
                        <div class="flex items-center gap-3">
                            <span>{"☎"}</span>
                            <a href=format!("tel:{}", phone)>{phone.clone()}</a>
                        </div>
                    })}
                    {employee.location.clone().map(|location| view! {
                        <div class="flex items-center gap-3">
                            <span>{"📍"}</span>
                            <span>{location}</span>
                        </div>
                    })}
                </div>
                <div class="flex justify-between items-center pt-4 border-t border-border">
                    <span class="text-sm text-fg-muted font-medium">
                        {employee.department_or_unassigned().to_string()}
                    </span>
                    <span class=badge>{employee.status.label()}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EmployeeStatus;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn grid_renders_cards_with_initials_and_status() {
        let html = render_to_string(move || {
            let mut bob = employee("E002", "Bob Builder", None);
            bob.status = EmployeeStatus::OnLeave;
            bob.phone = Some("555-0100".into());
            let employees = Signal::derive(move || {
                vec![employee("E001", "Alice Example", Some("Engineering")), bob.clone()]
            });
            view! {
                <EmployeeGrid
                    employees=employees
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Alice Example"));
        assert!(html.contains("AE"));
        assert!(html.contains("BB"));
        assert!(html.contains("On Leave"));
        assert!(html.contains("Unassigned"));
        assert!(html.contains("tel:555-0100"));
        assert!(html.contains("mailto:e001@example.com"));
    }

    #[test]
    fn grid_shows_no_match_message_when_empty() {
        let html = render_to_string(move || {
            view! {
                <EmployeeGrid
                    employees=Signal::derive(Vec::new)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No employees match your filters"));
    }
}
