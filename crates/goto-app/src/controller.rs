//! DialogController - owns the surface and performs update side effects
//!
//! Every public operation is routed through [`handler::update`] and the
//! returned [`UpdateAction`]s are applied here against the surface and host,
//! in order. The controller is single-threaded and never blocks.

use std::rc::Weak;

use goto_core::prelude::*;
use goto_core::{Position, Size, SurfaceMessage};
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::handler::{self, UpdateAction};
use crate::host::Host;
use crate::message::Message;
use crate::observer::VisibilityObserver;
use crate::state::{DialogPhase, DialogState};
use crate::surface::{InboundReceiver, Surface};

/// Visibility and lifecycle controller for the goto dialog surface
pub struct DialogController {
    state: DialogState,
    settings: Settings,
    host: Box<dyn Host>,
    surface: Option<Box<dyn Surface>>,
    observer: Option<Weak<dyn VisibilityObserver>>,
    on_hidden: Option<Box<dyn FnMut()>>,
    /// Receiving half of the current registration's channel
    inbound_rx: InboundReceiver,
    unrecognized: usize,
}

impl DialogController {
    pub fn new(host: Box<dyn Host>, settings: Settings) -> Self {
        let (_, inbound_rx) = mpsc::unbounded_channel();
        Self {
            state: DialogState::new(),
            settings,
            host,
            surface: None,
            observer: None,
            on_hidden: None,
            inbound_rx,
            unrecognized: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create the dialog surface.
    ///
    /// A surface still held from an earlier `init()` is destroyed first.
    /// Creation failures come from the host and leave the controller
    /// uninitialized.
    pub fn init(&mut self) -> Result<()> {
        self.process(Message::Init);

        let config = self.settings.surface.clone();
        let surface = self
            .host
            .create_surface(&config)
            .with_context(|| format!("Creating surface for {}", config.content))?;

        info!("Created dialog surface for {}", config.content);
        self.surface = Some(surface);
        self.process(Message::SurfaceCreated);
        Ok(())
    }

    pub fn show(&mut self) {
        self.process(Message::Show);
    }

    pub fn hide(&mut self) {
        self.process(Message::Hide);
    }

    /// Close the surface and reset all state. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.process(Message::Destroy);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_listening(&self) -> bool {
        self.state.listening
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn phase(&self) -> DialogPhase {
        self.state.phase()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Surface width, or `0` without a surface
    pub fn width(&self) -> f64 {
        self.size().width()
    }

    /// Surface height, or `0` without a surface
    pub fn height(&self) -> f64 {
        self.size().height()
    }

    fn size(&self) -> Size {
        self.surface.as_ref().map(|s| s.size()).unwrap_or_default()
    }

    /// Surface position, only while a surface exists and is shown
    pub fn position(&self) -> Option<Position> {
        match &self.surface {
            Some(surface) if self.state.visible => Some(surface.position()),
            _ => None,
        }
    }

    /// Number of inbound messages that could not be dispatched
    pub fn unrecognized_count(&self) -> usize {
        self.unrecognized
    }

    // ─────────────────────────────────────────────────────────
    // Hooks
    // ─────────────────────────────────────────────────────────

    /// Replace the visibility observer. Last writer wins.
    pub fn set_on_visibility_change(&mut self, observer: Weak<dyn VisibilityObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_on_visibility_change(&mut self) {
        self.observer = None;
    }

    /// Replace the hook run after the surface asked to be hidden
    pub fn set_on_hidden(&mut self, hook: impl FnMut() + 'static) {
        self.on_hidden = Some(Box::new(hook));
    }

    // ─────────────────────────────────────────────────────────
    // Messaging
    // ─────────────────────────────────────────────────────────

    /// Forward a record to the surface. Fire-and-forget.
    pub fn send_to_surface(&mut self, message: serde_json::Value) {
        match self.surface.as_mut() {
            Some(surface) => surface.send(message),
            None => debug!("Dropping outbound message, no surface: {}", message),
        }
    }

    /// Dispatch one inbound message synchronously
    pub fn dispatch(&mut self, msg: SurfaceMessage) {
        if self.settings.behavior.trace_messages {
            debug!("Surface message: {}", msg.to_envelope());
        }
        self.process(Message::Surface(msg));
    }

    /// Drain everything the surface delivered into the inbound sink.
    ///
    /// Only the current registration's channel is drained. Messages queued
    /// after the sink was unregistered are dropped. Returns how many
    /// messages were dispatched.
    pub fn pump_inbound(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(msg) = self.inbound_rx.try_recv() {
            if !self.state.listening {
                debug!("Not listening, dropping surface message: {:?}", msg.method());
                continue;
            }
            self.dispatch(msg);
            dispatched += 1;
        }
        dispatched
    }

    // ─────────────────────────────────────────────────────────
    // Update loop
    // ─────────────────────────────────────────────────────────

    fn process(&mut self, message: Message) {
        trace!("Processing {:?} in {:?}", message, self.state.phase());
        let result = handler::update(&mut self.state, message);
        for action in result.actions {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::SetAuxiliaryInputHidden(hidden) => {
                self.host.set_auxiliary_input_hidden(hidden);
            }

            UpdateAction::ConnectInbound => {
                if let Some(surface) = self.surface.as_mut() {
                    // Each registration gets its own channel so messages from
                    // an earlier registration never reach this one.
                    let (tx, rx) = mpsc::unbounded_channel();
                    self.inbound_rx = rx;
                    surface.connect_inbound(tx);
                }
            }

            UpdateAction::DisconnectInbound => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.disconnect_inbound();
                }
            }

            UpdateAction::SetSurfaceVisible(visible) => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.set_visible(visible);
                }
            }

            UpdateAction::CloseSurface => {
                if let Some(mut surface) = self.surface.take() {
                    surface.close();
                    info!("Closed dialog surface");
                }
            }

            UpdateAction::NotifyVisibilityChanged(shown) => {
                if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
                    observer.on_visibility_changed(shown);
                }
            }

            UpdateAction::InvokeOnHidden => {
                if let Some(hook) = self.on_hidden.as_mut() {
                    hook();
                }
            }

            UpdateAction::OpenPlatformActivity => {
                let activity = &self.settings.platform.activity;
                debug!("Opening platform activity {}", activity);
                self.host.open_platform_activity(activity);
            }

            UpdateAction::ReportUnrecognized(raw) => {
                self.unrecognized += 1;
                warn!(
                    "Unrecognized message from {}: {}",
                    self.settings.surface.content, raw
                );
            }
        }
    }
}

impl std::fmt::Debug for DialogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogController")
            .field("state", &self.state)
            .field("has_surface", &self.surface.is_some())
            .field("has_observer", &self.observer.is_some())
            .field("unrecognized", &self.unrecognized)
            .finish()
    }
}
