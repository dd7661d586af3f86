use crate::components::common::{Button, ButtonVariant};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal yes/no prompt. Backdrop click, the close button and Escape all cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm")] confirm_label: &'static str,
    #[prop(default = "Cancel")] cancel_label: &'static str,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let cancel = move || {
        if !busy.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="confirm-dialog-title"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 id="confirm-dialog-title" class="text-lg font-semibold text-fg">{title}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| cancel()
                        >
                            {"✕"}
                        </button>
                    </div>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=busy
                            attr:type="button"
                            on:click=move |_| cancel()
                        >
                            {cancel_label}
                        </Button>
                        <Button
                            variant=confirm_variant
                            loading=busy
                            attr:type="button"
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(is_open: bool, busy: bool) -> String {
        render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(move || is_open)
                    title="Delete employee"
                    message=Signal::derive(|| "Delete Alice Example? This cannot be undone.".to_string())
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Delete"
                    busy=busy
                    destructive=true
                />
            }
        })
    }

    #[test]
    fn open_dialog_shows_message_and_labels() {
        let html = render(true, false);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Delete Alice Example?"));
        assert!(html.contains("Delete"));
        assert!(html.contains("Cancel"));
        assert!(html.contains("bg-action-danger-bg"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn busy_dialog_shows_spinner() {
        let html = render(true, true);
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        assert!(!render(false, false).contains("role=\"dialog\""));
    }
}
