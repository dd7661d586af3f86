use std::{cell::Cell, future::Future, rc::Rc};

use leptos::*;
use log::debug;

use crate::api::{ApiError, ApiResult};

/// Hands out monotonically increasing tickets. Only the most recently issued
/// ticket is accepted, and nothing is accepted once the guard is disposed.
#[derive(Clone, Default)]
pub struct FetchGuard {
    inner: Rc<GuardInner>,
}

#[derive(Default)]
struct GuardInner {
    latest: Cell<u64>,
    disposed: Cell<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchGuard {
    pub fn issue(&self) -> FetchTicket {
        let next = self.inner.latest.get() + 1;
        self.inner.latest.set(next);
        FetchTicket(next)
    }

    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        !self.inner.disposed.get() && self.inner.latest.get() == ticket.0
    }

    pub fn dispose(&self) {
        self.inner.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }
}

/// Issues a ticket now and resolves to `None` if, by the time `fut` finishes,
/// a newer ticket exists or the guard was disposed.
pub fn run_guarded<Fut>(guard: &FetchGuard, fut: Fut) -> impl Future<Output = Option<Fut::Output>>
where
    Fut: Future,
{
    let ticket = guard.issue();
    let guard = guard.clone();
    async move {
        let output = fut.await;
        if guard.accepts(&ticket) {
            Some(output)
        } else {
            debug!("Discarding fetch result for ticket {}", ticket.0);
            None
        }
    }
}

pub struct FetchState<T: 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

// Signals are handles; copying the state never requires `T: Copy`.
impl<T: 'static> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchState<T> {}

impl<T: 'static> FetchState<T> {
    pub fn new() -> Self {
        Self {
            data: create_rw_signal(None),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }

    pub fn apply(&self, result: ApiResult<T>) {
        match result {
            Ok(value) => self.data.set(Some(value)),
            Err(err) => self.error.set(Some(err)),
        }
        self.loading.set(false);
    }
}

impl<T: 'static> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads data whenever `key` changes. A resolution is applied only if it
/// belongs to the latest request and the owning scope is still alive.
pub fn use_fetch<K, T, F, Fut>(key: impl Fn() -> K + 'static, producer: F) -> FetchState<T>
where
    K: PartialEq + Clone + 'static,
    T: 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let state = FetchState::new();
    let guard = FetchGuard::default();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.dispose());
    }

    let key = create_memo(move |_| key());
    create_effect(move |_| {
        spawn_local(issue_fetch(state, &guard, producer(key.get())));
    });

    state
}

/// Marks `state` as loading and takes a ticket immediately. The returned
/// future applies the result only if that ticket is still current.
pub fn issue_fetch<T, Fut>(
    state: FetchState<T>,
    guard: &FetchGuard,
    fut: Fut,
) -> impl Future<Output = ()>
where
    T: 'static,
    Fut: Future<Output = ApiResult<T>>,
{
    state.loading.set(true);
    state.error.set(None);
    let pending = run_guarded(guard, fut);
    async move {
        if let Some(result) = pending.await {
            state.apply(result);
        }
    }
}
