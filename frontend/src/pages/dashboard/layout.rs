use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-8">
                <div>
                    <span class="text-xs uppercase tracking-wider text-action-primary-bg font-medium">
                        {"System Overview"}
                    </span>
                    <h1 class="mt-2 text-3xl font-light tracking-tight text-fg">{"HR Dashboard"}</h1>
                    <p class="mt-2 text-sm text-fg-muted">
                        {"Employee headcount, attendance and department overview"}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}

#[component]
pub fn BackendUnavailable(message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
            <p class="font-semibold">{"Unable to Connect to Backend"}</p>
            <p class="text-sm mt-1">{message}</p>
        </div>
    }
}
