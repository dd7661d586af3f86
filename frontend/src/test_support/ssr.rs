use crate::api::ApiClient;
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders a page with an `ApiClient` for `base_url` in context, so nothing
/// reaches for the runtime configuration.
pub fn render_page<F, N>(base_url: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let client = ApiClient::new_with_base_url(base_url);
    render_to_string(move || {
        provide_context(client);
        view()
    })
}
