use crate::pages::dashboard::utils::DashboardStats;
use leptos::*;

#[component]
pub fn SummarySection(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatCard
                label="Total Employees"
                value=Signal::derive(move || stats.get().total_employees.to_string())
            />
            <StatCard
                label="Attendance Records"
                value=Signal::derive(move || stats.get().total_records.to_string())
            />
            <StatCard
                label="Present Today"
                value=Signal::derive(move || stats.get().present_today.count.to_string())
                hint=Signal::derive(move || format!("{}% of employees", stats.get().present_today.rate))
            />
            <StatCard
                label="Absent Records"
                value=Signal::derive(move || stats.get().status.absent.to_string())
                hint=Signal::derive(move || format!("{}% of records", stats.get().status.absent_percent))
            />
        </div>
    }
}

#[component]
fn StatCard(
    #[prop(into)] label: String,
    value: Signal<String>,
    #[prop(optional)] hint: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-xl bg-surface-elevated border border-border shadow-sm">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</p>
            {hint.map(|hint| view! {
                <p class="mt-2 text-sm text-status-success-text">{move || hint.get()}</p>
            })}
        </div>
    }
}
