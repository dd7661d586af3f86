use crate::{
    components::charts::ChartCard,
    pages::dashboard::utils::{employees_label, DashboardStats},
};
use leptos::*;

#[component]
pub fn OverviewSection(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <ChartCard title="Recent Attendance">
                <RecentAttendance stats=stats />
            </ChartCard>
            <ChartCard title="Department Summary">
                <DepartmentSummary stats=stats />
            </ChartCard>
        </div>
    }
}

#[component]
fn RecentAttendance(stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {move || {
                let recent = stats.get().recent;
                if recent.is_empty() {
                    return view! {
                        <p class="text-sm text-fg-muted text-center py-4">{"No attendance records"}</p>
                    }
                    .into_view();
                }
                recent
                    .into_iter()
                    .map(|entry| view! {
                        <div class="flex items-center gap-4">
                            <div class="w-10 h-10 rounded-full bg-surface-muted flex items-center justify-center text-sm font-semibold text-action-primary-bg">
                                {entry.initials}
                            </div>
                            <div class="flex-1 min-w-0">
                                <p class="text-sm font-medium text-fg">{entry.name}</p>
                                <p class="text-sm text-fg-muted">{entry.status}</p>
                            </div>
                            <p class="text-xs text-fg-muted whitespace-nowrap">
                                {entry.date.format("%b %-d, %Y").to_string()}
                            </p>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn DepartmentSummary(stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {move || {
                let departments = stats.get().departments;
                if departments.is_empty() {
                    return view! {
                        <p class="text-sm text-fg-muted text-center py-4">{"No employee data"}</p>
                    }
                    .into_view();
                }
                departments
                    .into_iter()
                    .map(|dept| view! {
                        <div>
                            <div class="flex justify-between items-center mb-2">
                                <p class="text-sm font-medium text-fg">{dept.name}</p>
                                <p class="text-sm font-semibold text-action-primary-bg">{dept.count}</p>
                            </div>
                            <div class="w-full bg-surface-muted rounded-full h-2">
                                <div
                                    class="bg-action-primary-bg h-2 rounded-full"
                                    style=format!("width: {:.1}%", dept.width)
                                ></div>
                            </div>
                            <p class="text-xs text-fg-muted mt-1">
                                {format!("{} {}", dept.count, employees_label(dept.count))}
                            </p>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
