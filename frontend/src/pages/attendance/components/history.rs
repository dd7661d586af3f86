use crate::{
    api::{ApiError, AttendanceRecord},
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::attendance::utils::{format_history_date, presence_badge_class, presence_label},
    utils::time::format_clock_time,
};
use leptos::*;

#[component]
pub fn HistorySection(
    #[prop(into)] history: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] has_selection: Signal<bool>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">{"Attendance History"}</h2>
            <InlineErrorMessage error=error />
            {move || {
                if !has_selection.get() {
                    view! {
                        <p class="text-sm text-fg-muted">{"Select an employee to see their history."}</p>
                    }
                    .into_view()
                } else if loading.get() {
                    view! {
                        <div class="flex items-center gap-2 text-sm text-fg-muted">
                            <LoadingSpinner />
                            <span>{"Loading attendance..."}</span>
                        </div>
                    }
                    .into_view()
                } else if history.with(Vec::is_empty) {
                    view! {
                        <p class="text-sm text-fg-muted">{"No attendance records for this employee"}</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <ul class="divide-y divide-border">
                            <For
                                each=move || history.get()
                                key=|record| (record.id.clone(), record.attendance_date)
                                children=move |record| view! { <HistoryRow record=record /> }
                            />
                        </ul>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[component]
fn HistoryRow(record: AttendanceRecord) -> impl IntoView {
    let (check_in, check_out) = if record.is_present {
        (
            format_clock_time(record.check_in_time.as_deref()),
            format_clock_time(record.check_out_time.as_deref()),
        )
    } else {
        (format_clock_time(None), format_clock_time(None))
    };

    view! {
        <li class="py-3 flex flex-wrap items-center justify-between gap-3">
            <div class="space-y-1">
                <p class="text-sm font-medium text-fg">{format_history_date(record.attendance_date)}</p>
                <p class="text-xs text-fg-muted">
                    {format!("In: {}  Out: {}", check_in, check_out)}
                </p>
                {record.notes.filter(|n| !n.trim().is_empty()).map(|notes| view! {
                    <p class="text-xs text-fg-muted italic">{notes}</p>
                })}
            </div>
            <span class=format!(
                "px-2 py-1 rounded-full text-xs font-semibold {}",
                presence_badge_class(record.is_present)
            )>
                {presence_label(record.is_present)}
            </span>
        </li>
    }
}
