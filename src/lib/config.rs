//! Build-time configuration for the post-auth redirect targets with an
//! optional runtime override. The runtime config is read from
//! `window.STUDIOFLOW_CONFIG` (if present) so static deployments can repoint
//! the onboarding or dashboard routes without rebuilding. Configuration
//! values are public; do not store secrets here.

use crate::routes::paths;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Route the auth forms land on after a successful submission.
    pub onboarding_path: String,
    /// Route the onboarding wizard lands on after the last step.
    pub dashboard_path: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let onboarding_path =
            option_env!("STUDIOFLOW_ONBOARDING_PATH").unwrap_or(paths::ONBOARDING);
        let dashboard_path = option_env!("STUDIOFLOW_DASHBOARD_PATH").unwrap_or(paths::DASHBOARD);

        let mut config = Self {
            onboarding_path: onboarding_path.to_string(),
            dashboard_path: dashboard_path.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    onboarding_path: Option<String>,
    dashboard_path: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.onboarding_path {
        config.onboarding_path = value;
    }
    if let Some(value) = runtime.dashboard_path {
        config.dashboard_path = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("STUDIOFLOW_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        onboarding_path: read_runtime_value(&object, "onboarding_path"),
        dashboard_path: read_runtime_value(&object, "dashboard_path"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  /welcome "),
            Some("/welcome".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            onboarding_path: "/onboarding".to_string(),
            dashboard_path: "/dashboard".to_string(),
        };
        let runtime = RuntimeConfig {
            onboarding_path: normalize_runtime_value(""),
            dashboard_path: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.onboarding_path, "/onboarding");
        assert_eq!(config.dashboard_path, "/dashboard");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            onboarding_path: "/onboarding".to_string(),
            dashboard_path: "/dashboard".to_string(),
        };
        let runtime = RuntimeConfig {
            onboarding_path: normalize_runtime_value("/welcome"),
            dashboard_path: normalize_runtime_value("/home"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.onboarding_path, "/welcome");
        assert_eq!(config.dashboard_path, "/home");
    }
}
