use leptos::*;

/// Navigation entries shown in the header, as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "Dashboard"),
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
];

const NAV_LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"HRMS Lite"</h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                                .collect_view()}
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class=format!("block {}", NAV_LINK_CLASS)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_all_navigation_links() {
        let html = render_to_string(move || view! { <Header /> });
        assert!(html.contains("HRMS Lite"));
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || view! { <Layout><div>"child"</div></Layout> });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_spinner() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
    }
}
