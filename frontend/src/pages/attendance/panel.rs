use super::{
    components::{history::HistorySection, mark_form::MarkAttendanceForm},
    layout::AttendanceFrame,
    view_model::use_attendance_view_model,
};
use crate::components::error::{AlertBanner, InlineErrorMessage};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let employees = Signal::derive(move || vm.employees.data.get().unwrap_or_default());
    let history = Signal::derive(move || vm.history.data.get().unwrap_or_default());
    let has_selection = Signal::derive(move || vm.history_query.with(|q| q.employee_id.is_some()));

    view! {
        <AttendanceFrame>
            <AlertBanner messages=vm.messages />
            <InlineErrorMessage error=vm.employees.error.into() />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <MarkAttendanceForm vm=vm employees=employees />
                <HistorySection
                    history=history
                    loading=vm.history.loading
                    error=vm.history.error
                    has_selection=has_selection
                />
            </div>
        </AttendanceFrame>
    }
}
