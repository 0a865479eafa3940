//! # JavaScript Statement Builders
//!
//! Serialization of bridge traffic into executable JavaScript source. Every
//! statement the dispatcher submits is produced here, then wrapped in the
//! canonical injection envelope by [`envelope`].
//!
//! Statement shapes are part of the wire contract with the JavaScript-side
//! library:
//!
//! - install: `window.<G>||(<G>={isReady:true,version:"..",actions:[..],events:[..]});`
//! - event:   `<G>.fireEvent("<wire>",<payload-or-{}>);`
//! - envelope: `javascript:(function(){<statement>})()`

use bridge_traits::error::Result;
use bridge_traits::{ActionDescriptor, EventDescriptor, EventPayload};

use crate::config::TriggerToggle;

/// Statement installing the bridge global, only if no truthy global of that
/// name exists yet.
pub fn install_statement(
    global: &str,
    version: &str,
    actions: &[ActionDescriptor],
    events: &[EventDescriptor],
) -> Result<String> {
    let version_json = serde_json::to_string(version)?;
    let actions_json = serde_json::to_string(actions)?;
    let events_json = serde_json::to_string(events)?;
    Ok(format!(
        "window.{global}||({global}={{isReady:true,version:{version},actions:{actions},events:{events}}});",
        global = global,
        version = version_json,
        actions = actions_json,
        events = events_json,
    ))
}

/// Statement flipping the configured UI affordance, guarded on a
/// jQuery-style `$` being present in the page.
pub fn trigger_statement(toggle: &TriggerToggle) -> String {
    format!(
        "window.$&&$(\"{}\").toggleClass(\"{}\");",
        toggle.selector, toggle.css_class
    )
}

/// Statement dispatching one event to the JavaScript side. A missing payload
/// becomes the empty object literal.
pub fn fire_event_statement(global: &str, wire_name: &str, payload: Option<&EventPayload>) -> String {
    let payload_json = payload
        .map(EventPayload::to_literal)
        .unwrap_or_else(|| "{}".to_string());
    format!("{}.fireEvent(\"{}\",{});", global, wire_name, payload_json)
}

/// Canonical injection envelope: an immediately-invoked anonymous function
/// behind the `javascript:` scheme. Isolates the statement from the page's
/// ambient scope; never bypassed by any dispatch path.
pub fn envelope(statement: &str) -> String {
    format!("javascript:(function(){{{}}})()", statement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_install_statement_shape() {
        let actions = vec![ActionDescriptor::from_value(json!({"name": "download"}))];
        let events = vec![EventDescriptor::from_value(json!("message"))];
        let statement = install_statement("BridgeGlobal", "1.2.3", &actions, &events).unwrap();
        assert_eq!(
            statement,
            "window.BridgeGlobal||(BridgeGlobal={isReady:true,version:\"1.2.3\",\
             actions:[{\"name\":\"download\"}],events:[\"message\"]});"
        );
    }

    #[test]
    fn test_install_statement_empty_manifest() {
        let statement = install_statement("BridgeGlobal", "0.1.0", &[], &[]).unwrap();
        assert!(statement.contains("actions:[]"));
        assert!(statement.contains("events:[]"));
        assert!(statement.contains("isReady:true"));
    }

    #[test]
    fn test_trigger_statement() {
        let toggle = TriggerToggle::default();
        assert_eq!(
            trigger_statement(&toggle),
            "window.$&&$(\"#bridgeTrigger\").toggleClass(\"switch\");"
        );
    }

    #[test]
    fn test_fire_event_without_payload() {
        let statement = fire_event_statement("BridgeGlobal", "pause", None);
        assert_eq!(statement, "BridgeGlobal.fireEvent(\"pause\",{});");
    }

    #[test]
    fn test_fire_event_with_payload() {
        let payload = EventPayload::from_value(json!({"a": 1}));
        let statement = fire_event_statement("BridgeGlobal", "customX", Some(&payload));
        assert_eq!(statement, "BridgeGlobal.fireEvent(\"customX\",{\"a\":1});");
    }

    #[test]
    fn test_envelope() {
        assert_eq!(
            envelope("x();"),
            "javascript:(function(){x();})()"
        );
    }
}
