//! Event Naming and Payloads
//!
//! Types describing what the native side can send across the bridge: fixed
//! lifecycle signals and application-defined named events with an optional
//! structured payload.

use serde::Serialize;
use serde_json::Value;

use crate::error::{BridgeError, Result};

/// Returns true if `name` is a plain JavaScript identifier.
///
/// The bridge embeds names unescaped inside generated source, so anything
/// that could break out of a string literal (quotes, backslashes, control
/// characters) is rejected up front by only accepting identifier characters.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Wire name of an application-defined event.
///
/// The wire name is the string the JavaScript side dispatches on; it is
/// validated at construction so generated `fireEvent` calls are always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName(String);

impl EventName {
    /// Validate and wrap a wire name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_js_identifier(&name) {
            return Err(BridgeError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// The wire name as it appears in generated JavaScript.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque structured payload attached to a named event.
///
/// Callers convert their own types through [`EventPayload::from_serialize`]
/// at the boundary; past that point the bridge treats the payload as an
/// already-validated JSON document and only renders it into an object
/// literal.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload(Value);

impl EventPayload {
    /// Serialize any `Serialize` type into a payload.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }

    /// Wrap an existing JSON value.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Render the payload as a JavaScript-object-literal-compatible string.
    pub fn to_literal(&self) -> String {
        self.0.to_string()
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// Fixed native lifecycle signal. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleSignal {
    Pause,
    Resume,
}

impl LifecycleSignal {
    /// The wire name used in the JavaScript-side dispatch call.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
        }
    }
}

/// Application-defined event: a validated wire name plus optional payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedEvent {
    name: EventName,
    payload: Option<EventPayload>,
}

impl NamedEvent {
    /// Event with no payload; the bridge substitutes an empty object literal.
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    /// Event carrying a structured payload.
    pub fn with_payload(name: EventName, payload: EventPayload) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn payload(&self) -> Option<&EventPayload> {
        self.payload.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_identifier_validation() {
        assert!(is_js_identifier("pause"));
        assert!(is_js_identifier("_private"));
        assert!(is_js_identifier("$global"));
        assert!(is_js_identifier("custom9"));

        assert!(!is_js_identifier(""));
        assert!(!is_js_identifier("9lives"));
        assert!(!is_js_identifier("with space"));
        assert!(!is_js_identifier("quote\"break"));
        assert!(!is_js_identifier("dash-ed"));
    }

    #[test]
    fn test_event_name_rejects_unsafe_input() {
        let err = EventName::new("\");alert(1);(\"").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidName(_)));
    }

    #[test]
    fn test_lifecycle_wire_names() {
        assert_eq!(LifecycleSignal::Pause.wire_name(), "pause");
        assert_eq!(LifecycleSignal::Resume.wire_name(), "resume");
    }

    #[test]
    fn test_payload_from_serialize() {
        #[derive(Serialize)]
        struct Progress {
            percent: u8,
        }

        let payload = EventPayload::from_serialize(&Progress { percent: 42 }).unwrap();
        assert_eq!(payload.to_literal(), r#"{"percent":42}"#);
    }
}
