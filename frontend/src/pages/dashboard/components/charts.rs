use crate::{
    components::charts::{
        ChartCard, Datum, HorizontalBarChart, LineChart, StackedColumn, StackedColumnChart,
    },
    pages::dashboard::utils::DashboardStats,
};
use leptos::*;

const PRESENT_CLASS: &str = "bg-status-success-border";
const ABSENT_CLASS: &str = "bg-status-error-border";

#[component]
pub fn ChartsSection(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    let monthly = Signal::derive(move || {
        stats
            .get()
            .monthly
            .into_iter()
            .map(|bucket| StackedColumn {
                label: bucket.label,
                segments: vec![(bucket.present, PRESENT_CLASS), (bucket.absent, ABSENT_CLASS)],
            })
            .collect::<Vec<_>>()
    });
    let daily = Signal::derive(move || {
        stats
            .get()
            .daily
            .into_iter()
            .map(|point| Datum::new(point.label, point.count as f64))
            .collect::<Vec<_>>()
    });
    let rates = Signal::derive(move || {
        stats
            .get()
            .employee_rates
            .into_iter()
            .map(|rate| Datum::new(rate.name, rate.rate))
            .collect::<Vec<_>>()
    });
    let split = Signal::derive(move || {
        let status = stats.get().status;
        vec![
            Datum::new("Present", status.present_percent as f64),
            Datum::new("Absent", status.absent_percent as f64),
        ]
    });

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <ChartCard title="Attendance Trends">
                <p class="text-sm text-fg-muted">{"Monthly attendance overview"}</p>
                <StackedColumnChart columns=monthly />
                <div class="flex gap-4 text-xs text-fg-muted">
                    <span class="flex items-center gap-1">
                        <span class=format!("inline-block h-2 w-2 {}", PRESENT_CLASS)></span>
                        {"Present"}
                    </span>
                    <span class="flex items-center gap-1">
                        <span class=format!("inline-block h-2 w-2 {}", ABSENT_CLASS)></span>
                        {"Absent"}
                    </span>
                </div>
            </ChartCard>
            <ChartCard title="Daily Attendance">
                <p class="text-sm text-fg-muted">{"Records over the last 7 days"}</p>
                <LineChart data=daily />
            </ChartCard>
            <ChartCard title="Employee Attendance Rate">
                <HorizontalBarChart data=rates max=100.0 suffix="%" />
            </ChartCard>
            <ChartCard title="Attendance Status">
                <HorizontalBarChart data=split max=100.0 suffix="%" bar_class=PRESENT_CLASS />
            </ChartCard>
        </div>
    }
}
