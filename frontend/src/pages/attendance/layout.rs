use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <span class="text-xs uppercase tracking-wider text-action-primary-bg font-medium">
                        {"Track & Manage"}
                    </span>
                    <h1 class="mt-2 text-3xl font-light tracking-tight text-fg">{"Attendance Tracker"}</h1>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
