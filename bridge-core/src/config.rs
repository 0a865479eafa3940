//! # Bridge Configuration
//!
//! Builder-validated settings for a dispatcher instance: the name of the
//! JavaScript global the bridge installs, the version string advertised in
//! it, and the optional UI-affordance toggle appended to the initialization
//! script.
//!
//! ## Usage
//!
//! ```
//! use bridge_core::config::BridgeConfig;
//!
//! let config = BridgeConfig::builder()
//!     .global_object("AppBridge")
//!     .version("2.1.0")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! `build()` fails fast with an actionable message when the global object
//! name is not a plain JavaScript identifier or the trigger selector could
//! break out of its quoted context.

use bridge_traits::is_js_identifier;

use crate::error::{Error, Result};

/// Name of the JavaScript global installed by default.
pub const DEFAULT_GLOBAL_OBJECT: &str = "BridgeGlobal";

/// Default CSS selector toggled after initialization.
pub const DEFAULT_TRIGGER_SELECTOR: &str = "#bridgeTrigger";

/// Default CSS class toggled on the trigger element.
pub const DEFAULT_TRIGGER_CLASS: &str = "switch";

/// UI-affordance toggle appended to the initialization statement.
///
/// When present, initialization emits
/// `window.$&&$("<selector>").toggleClass("<css_class>");` so pages using a
/// jQuery-style `$` can flip a visual indicator once the bridge is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerToggle {
    pub selector: String,
    pub css_class: String,
}

impl Default for TriggerToggle {
    fn default() -> Self {
        Self {
            selector: DEFAULT_TRIGGER_SELECTOR.to_string(),
            css_class: DEFAULT_TRIGGER_CLASS.to_string(),
        }
    }
}

/// Validated dispatcher settings.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    global_object: String,
    version: String,
    trigger_toggle: Option<TriggerToggle>,
}

impl BridgeConfig {
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Name of the injected JavaScript global object.
    pub fn global_object(&self) -> &str {
        &self.global_object
    }

    /// Version string embedded in the injected global.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn trigger_toggle(&self) -> Option<&TriggerToggle> {
        self.trigger_toggle.as_ref()
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            global_object: DEFAULT_GLOBAL_OBJECT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            trigger_toggle: Some(TriggerToggle::default()),
        }
    }
}

/// Builder for [`BridgeConfig`].
#[derive(Debug, Clone, Default)]
pub struct BridgeConfigBuilder {
    global_object: Option<String>,
    version: Option<String>,
    trigger_toggle: Option<TriggerToggle>,
    disable_trigger: bool,
}

impl BridgeConfigBuilder {
    /// Set the name of the injected global object.
    pub fn global_object(mut self, name: impl Into<String>) -> Self {
        self.global_object = Some(name.into());
        self
    }

    /// Set the advertised bridge version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set a custom UI-affordance toggle.
    pub fn trigger_toggle(
        mut self,
        selector: impl Into<String>,
        css_class: impl Into<String>,
    ) -> Self {
        self.trigger_toggle = Some(TriggerToggle {
            selector: selector.into(),
            css_class: css_class.into(),
        });
        self.disable_trigger = false;
        self
    }

    /// Omit the toggle statement entirely.
    pub fn without_trigger_toggle(mut self) -> Self {
        self.trigger_toggle = None;
        self.disable_trigger = true;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<BridgeConfig> {
        let global_object = self
            .global_object
            .unwrap_or_else(|| DEFAULT_GLOBAL_OBJECT.to_string());
        if !is_js_identifier(&global_object) {
            return Err(Error::Config(format!(
                "Global object name {:?} is not a JavaScript identifier. \
                 Use letters, digits, '_' or '$', starting with a non-digit.",
                global_object
            )));
        }

        let trigger_toggle = if self.disable_trigger {
            None
        } else {
            let toggle = self.trigger_toggle.unwrap_or_default();
            validate_quoted(&toggle.selector, "trigger selector")?;
            validate_quoted(&toggle.css_class, "trigger CSS class")?;
            Some(toggle)
        };

        Ok(BridgeConfig {
            global_object,
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            trigger_toggle,
        })
    }
}

/// The selector and class land inside a double-quoted JavaScript string, so
/// anything able to terminate that string is rejected.
fn validate_quoted(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Config(format!("Empty {}", what)));
    }
    if value.contains(['"', '\\']) || value.chars().any(|c| c.is_control()) {
        return Err(Error::Config(format!(
            "Invalid {} {:?}: quotes, backslashes and control characters are not allowed",
            what, value
        )));
    }
    Ok(())
}
