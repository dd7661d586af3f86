use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn EmployeesFrame(
    #[prop(into)] total: Signal<usize>,
    on_add: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex justify-between items-start">
                    <div>
                        <span class="text-xs uppercase tracking-wider text-action-primary-bg font-medium">
                            {"Manage Team"}
                        </span>
                        <h1 class="mt-2 text-3xl font-light tracking-tight text-fg">{"Employee Management"}</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            {move || format!("{} total employees", total.get())}
                        </p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| on_add.call(())
                    >
                        {"+ Add Employee"}
                    </button>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
