//! Inbound message envelope from the dialog surface
//!
//! The surface talks to the controller with JSON-RPC-like records of the form
//! `{"method": "...", "params": {...}}`. There are no ids and no responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

pub const METHOD_SHOWN_CHANGED: &str = "shownChanged";
pub const METHOD_HIDE: &str = "hide";
pub const METHOD_OPEN_ACTIVITY: &str = "openAndroidActivity";

/// Raw envelope as sent by the surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawEnvelope {
    pub method: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub params: Value,
}

#[derive(Debug, Clone, Deserialize)]
struct ShownChangedParams {
    shown: bool,
}

/// Fully typed message from the surface
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceMessage {
    /// The surface finished a visibility transition on its side
    ShownChanged { shown: bool },

    /// The surface asks to be dismissed
    Hide,

    /// The surface asks the host to open the native goto activity
    OpenPlatformActivity,

    /// Anything else, kept verbatim for diagnostics
    Unrecognized(Value),
}

impl SurfaceMessage {
    /// Convert a JSON value into a typed message.
    ///
    /// Never fails: unknown methods, missing methods and malformed params all
    /// end up in [`SurfaceMessage::Unrecognized`] with the full payload.
    pub fn from_value(value: Value) -> Self {
        let envelope: RawEnvelope = match serde_json::from_value(value.clone()) {
            Ok(envelope) => envelope,
            Err(_) => return Self::Unrecognized(value),
        };

        match envelope.method.as_str() {
            METHOD_SHOWN_CHANGED => serde_json::from_value::<ShownChangedParams>(envelope.params)
                .map(|p| Self::ShownChanged { shown: p.shown })
                .unwrap_or(Self::Unrecognized(value)),
            METHOD_HIDE => Self::Hide,
            METHOD_OPEN_ACTIVITY => Self::OpenPlatformActivity,
            _ => Self::Unrecognized(value),
        }
    }

    /// Method name, if the message carried one
    pub fn method(&self) -> Option<&str> {
        match self {
            Self::ShownChanged { .. } => Some(METHOD_SHOWN_CHANGED),
            Self::Hide => Some(METHOD_HIDE),
            Self::OpenPlatformActivity => Some(METHOD_OPEN_ACTIVITY),
            Self::Unrecognized(raw) => raw.get("method").and_then(Value::as_str),
        }
    }

    /// Rebuild the wire envelope for this message
    pub fn to_envelope(&self) -> Value {
        match self {
            Self::ShownChanged { shown } => serde_json::json!({
                "method": METHOD_SHOWN_CHANGED,
                "params": { "shown": shown },
            }),
            Self::Hide => serde_json::json!({ "method": METHOD_HIDE }),
            Self::OpenPlatformActivity => serde_json::json!({ "method": METHOD_OPEN_ACTIVITY }),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// Parses one line of JSON into a surface message.
///
/// Returns an error only when the line is not JSON at all.
pub fn parse_surface_message(line: &str) -> Result<SurfaceMessage> {
    let value: Value = serde_json::from_str(line.trim())?;
    Ok(SurfaceMessage::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_shown_changed() {
        let msg = parse_surface_message(r#"{"method":"shownChanged","params":{"shown":true}}"#)
            .unwrap();
        assert_eq!(msg, SurfaceMessage::ShownChanged { shown: true });
        assert_eq!(msg.method(), Some("shownChanged"));
    }

    #[test]
    fn test_parse_hide_without_params() {
        let msg = parse_surface_message(r#"{"method":"hide"}"#).unwrap();
        assert_eq!(msg, SurfaceMessage::Hide);
    }

    #[test]
    fn test_parse_hide_ignores_params() {
        let msg = SurfaceMessage::from_value(json!({"method": "hide", "params": {"why": "esc"}}));
        assert_eq!(msg, SurfaceMessage::Hide);
    }

    #[test]
    fn test_parse_open_activity() {
        let msg = parse_surface_message(r#"{"method":"openAndroidActivity"}"#).unwrap();
        assert_eq!(msg, SurfaceMessage::OpenPlatformActivity);
    }

    #[test]
    fn test_unknown_method_keeps_payload() {
        let raw = json!({"method": "unknownThing", "params": {}});
        let msg = SurfaceMessage::from_value(raw.clone());
        assert_eq!(msg, SurfaceMessage::Unrecognized(raw));
        assert_eq!(msg.method(), Some("unknownThing"));
        assert!(!msg.is_recognized());
    }

    #[test]
    fn test_shown_changed_with_bad_params_is_unrecognized() {
        let raw = json!({"method": "shownChanged", "params": {"shown": "yes"}});
        assert_eq!(
            SurfaceMessage::from_value(raw.clone()),
            SurfaceMessage::Unrecognized(raw)
        );
    }

    #[test]
    fn test_missing_method_is_unrecognized() {
        let raw = json!({"params": {"shown": true}});
        let msg = SurfaceMessage::from_value(raw.clone());
        assert_eq!(msg, SurfaceMessage::Unrecognized(raw));
        assert_eq!(msg.method(), None);
    }

    #[test]
    fn test_non_object_is_unrecognized() {
        let msg = parse_surface_message("42").unwrap();
        assert_eq!(msg, SurfaceMessage::Unrecognized(json!(42)));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(parse_surface_message("{method: hide").is_err());
    }

    #[test]
    fn test_to_envelope_parses_back() {
        let msg = SurfaceMessage::ShownChanged { shown: false };
        assert_eq!(SurfaceMessage::from_value(msg.to_envelope()), msg);
        assert_eq!(SurfaceMessage::Hide.to_envelope(), json!({"method": "hide"}));
    }
}
