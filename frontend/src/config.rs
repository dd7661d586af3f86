use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes. Blank input yields `None`.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First usable candidate in priority order, else the default.
pub fn resolve_base_url(candidates: &[Option<String>]) -> String {
    candidates
        .iter()
        .flatten()
        .find_map(|candidate| normalize_base_url(candidate))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn build_time_base_url() -> Option<String> {
    option_env!("HRMS_API_URL").map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global: window.__HRMS_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__HRMS_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_globals = get_from_env_js();
    let from_file = if from_globals.is_some() {
        None
    } else {
        fetch_runtime_config().await.and_then(|cfg| cfg.api_base_url)
    };
    let resolved = resolve_base_url(&[from_globals, from_file, build_time_base_url()]);
    log::info!("API base URL: {}", resolved);
    API_BASE_URL.get_or_init(|| resolved).clone()
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
