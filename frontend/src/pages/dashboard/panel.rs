use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::{
    components::{ChartsSection, OverviewSection, SummarySection},
    layout::{BackendUnavailable, DashboardFrame},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let stats = Signal::derive(move || vm.stats.get());

    view! {
        <DashboardFrame>
            {move || {
                if vm.loading.get() {
                    view! {
                        <div class="text-center py-16">
                            <LoadingSpinner />
                            <p class="text-sm text-fg-muted">{"Loading dashboard data..."}</p>
                        </div>
                    }
                    .into_view()
                } else if let Some(err) = vm.error.get() {
                    view! { <BackendUnavailable message=err.error /> }.into_view()
                } else {
                    view! {
                        <SummarySection stats=stats />
                        <ChartsSection stats=stats />
                        <OverviewSection stats=stats />
                    }
                    .into_view()
                }
            }}
        </DashboardFrame>
    }
}
