use crate::api::ApiError;
use leptos::*;

/// How long a success alert stays up before clearing itself.
pub const SUCCESS_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }
}

/// Shows `message` as a success alert and clears it after a few seconds,
/// unless another message replaced it in the meantime.
pub fn flash_success(messages: RwSignal<MessageState>, message: impl Into<String>) {
    let message = message.into();
    messages.update(|state| state.set_success(message.clone()));
    schedule_success_clear(messages, message);
}

#[cfg(target_arch = "wasm32")]
fn schedule_success_clear(messages: RwSignal<MessageState>, message: String) {
    gloo_timers::callback::Timeout::new(SUCCESS_DISMISS_MS, move || {
        messages.try_update(|state| {
            if state.success.as_deref() == Some(message.as_str()) {
                state.success = None;
            }
        });
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_success_clear(_messages: RwSignal<MessageState>, _message: String) {}

/// Page-level alert region. Both kinds can be dismissed by hand.
#[component]
pub fn AlertBanner(messages: RwSignal<MessageState>) -> impl IntoView {
    let dismiss = move |_| messages.update(MessageState::clear);
    view! {
        <Show when=move || messages.get().error.is_some()>
            <div role="alert" class="flex items-start justify-between bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
                <p class="text-sm">{move || messages.get().error.unwrap_or_default()}</p>
                <button type="button" aria-label="Dismiss" class="ml-4 text-sm font-semibold" on:click=dismiss>
                    {"✕"}
                </button>
            </div>
        </Show>
        <Show when=move || messages.get().success.is_some()>
            <div role="status" class="flex items-start justify-between bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
                <p class="text-sm">{move || messages.get().success.unwrap_or_default()}</p>
                <button type="button" aria-label="Dismiss" class="ml-4 text-sm font-semibold" on:click=dismiss>
                    {"✕"}
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if e.code == ApiError::NETWORK {
                        view! {
                            <div class="text-xs opacity-75">
                                {"Check that the HR service is reachable and try again."}
                            </div>
                        }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_one_kind_at_a_time() {
        let mut state = MessageState::default();
        state.set_error("Failed to add employee");
        assert!(state.error.is_some());
        assert!(state.success.is_none());

        state.set_success("Employee added successfully");
        assert!(state.success.is_some());
        assert!(state.error.is_none());

        state.clear();
        assert!(state.is_empty());
    }
}
