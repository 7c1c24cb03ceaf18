//! Headless mode - JSON event output for driving the dialog without a UI
//!
//! The headless host stands in for the embedding application: it creates
//! in-memory surfaces, and reports every collaborator call as a structured
//! JSON event on stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"surface_created","content":"AddressBarDialog.qml","timestamp":1704700001000}
//! {"event":"auxiliary_input","hidden":true,"timestamp":1704700002000}
//! {"event":"inbound_connected","connected":true,"timestamp":1704700002000}
//! {"event":"surface_visible","visible":true,"timestamp":1704700002000}
//! ```

pub mod host;
pub mod runner;

use chrono::Utc;
use goto_core::Position;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The host created a surface
    SurfaceCreated { content: String, timestamp: i64 },

    /// The surface was asked to change visibility
    SurfaceVisible { visible: bool, timestamp: i64 },

    /// The surface was closed
    SurfaceClosed { timestamp: i64 },

    /// The inbound sink was registered or unregistered
    InboundConnected { connected: bool, timestamp: i64 },

    /// The auxiliary input layer was hidden or restored
    AuxiliaryInput { hidden: bool, timestamp: i64 },

    /// A native activity was requested
    ActivityOpened { name: String, timestamp: i64 },

    /// A record was sent to the surface
    Outbound { payload: Value, timestamp: i64 },

    /// A surface message was injected while nothing was listening
    MessageDropped { payload: Value, timestamp: i64 },

    /// The visibility observer fired
    VisibilityChanged { shown: bool, timestamp: i64 },

    /// The on-hidden hook fired
    Hidden { timestamp: i64 },

    /// Snapshot requested with the `status` command
    Status {
        phase: String,
        visible: bool,
        listening: bool,
        width: f64,
        height: f64,
        position: Option<Position>,
        unrecognized: usize,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn surface_created(content: &str) -> Self {
        Self::SurfaceCreated {
            content: content.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn surface_visible(visible: bool) -> Self {
        Self::SurfaceVisible {
            visible,
            timestamp: Self::now(),
        }
    }

    pub fn surface_closed() -> Self {
        Self::SurfaceClosed {
            timestamp: Self::now(),
        }
    }

    pub fn inbound_connected(connected: bool) -> Self {
        Self::InboundConnected {
            connected,
            timestamp: Self::now(),
        }
    }

    pub fn auxiliary_input(hidden: bool) -> Self {
        Self::AuxiliaryInput {
            hidden,
            timestamp: Self::now(),
        }
    }

    pub fn activity_opened(name: &str) -> Self {
        Self::ActivityOpened {
            name: name.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn outbound(payload: Value) -> Self {
        Self::Outbound {
            payload,
            timestamp: Self::now(),
        }
    }

    pub fn message_dropped(payload: Value) -> Self {
        Self::MessageDropped {
            payload,
            timestamp: Self::now(),
        }
    }

    pub fn visibility_changed(shown: bool) -> Self {
        Self::VisibilityChanged {
            shown,
            timestamp: Self::now(),
        }
    }

    pub fn hidden() -> Self {
        Self::Hidden {
            timestamp: Self::now(),
        }
    }

    pub fn status(controller: &goto_app::DialogController) -> Self {
        Self::Status {
            phase: format!("{:?}", controller.phase()).to_lowercase(),
            visible: controller.is_visible(),
            listening: controller.is_listening(),
            width: controller.width(),
            height: controller.height(),
            position: controller.position(),
            unrecognized: controller.unrecognized_count(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
