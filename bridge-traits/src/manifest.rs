//! Capability Manifest Descriptors
//!
//! The manifest provider hands the dispatcher ordered sequences of action
//! and event descriptors. Their shape belongs to the provider; the bridge
//! treats them as opaque JSON records and serializes them verbatim into the
//! injected global object literal.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Opaque description of one native action exposed to JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActionDescriptor(Value);

impl ActionDescriptor {
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// Opaque description of one native-originated event name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventDescriptor(Value);

impl EventDescriptor {
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptors_serialize_transparently() {
        let action = ActionDescriptor::from_value(json!({"name": "download", "args": 1}));
        let rendered = serde_json::to_string(&[action]).unwrap();
        assert_eq!(rendered, r#"[{"args":1,"name":"download"}]"#);
    }

    #[test]
    fn test_descriptor_from_serialize_keeps_shape() {
        #[derive(serde::Serialize)]
        struct Entry {
            event: &'static str,
        }

        let desc = EventDescriptor::from_serialize(&Entry { event: "message" }).unwrap();
        assert_eq!(desc.value(), &json!({"event": "message"}));
    }
}
