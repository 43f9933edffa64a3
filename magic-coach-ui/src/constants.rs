// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration, read from `window.__APP_CONFIG`.
//!
//! The config object is injected by `index.html` (or the hosting server)
//! before the wasm bundle boots, so one build can target any backend.

use magic_coach_client::GameApiClient;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2000;
pub const DEFAULT_HEARTBEAT_INTERVAL_MS: u32 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "pollIntervalMs")]
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
    #[serde(rename = "heartbeatIntervalMs")]
    #[serde(default = "default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u32,
    #[serde(rename = "debugEnabled")]
    #[serde(default)]
    pub debug_enabled: String,
}

fn default_poll_interval_ms() -> u32 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_heartbeat_interval_ms() -> u32 {
    DEFAULT_HEARTBEAT_INTERVAL_MS
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// A client for the room backend configured from `apiBaseUrl`.
pub fn api_client() -> Result<GameApiClient, String> {
    app_config().map(|c| GameApiClient::new(&c.api_base_url))
}

pub fn poll_interval_ms() -> u32 {
    app_config()
        .map(|c| c.poll_interval_ms)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
}

pub fn heartbeat_interval_ms() -> u32 {
    app_config()
        .map(|c| c.heartbeat_interval_ms)
        .unwrap_or(DEFAULT_HEARTBEAT_INTERVAL_MS)
}

pub fn debug_enabled() -> bool {
    app_config()
        .map(|c| truthy(Some(c.debug_enabled.as_str())))
        .unwrap_or(false)
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true", "1"].contains(&s.trim().to_lowercase().as_str())
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_true_and_one() {
        assert!(truthy(Some("true")));
        assert!(truthy(Some("TRUE")));
        assert!(truthy(Some("1")));
        assert!(!truthy(Some("false")));
        assert!(!truthy(Some("")));
        assert!(!truthy(None));
    }

    #[test]
    fn intervals_default_when_absent() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"apiBaseUrl": "http://localhost:8000"}"#).unwrap();
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.heartbeat_interval_ms, DEFAULT_HEARTBEAT_INTERVAL_MS);
        assert_eq!(config.debug_enabled, "");
    }
}
