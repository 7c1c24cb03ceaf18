//! Recording host for scenario tests
//!
//! Operates at the trait level: every `Host` and `Surface` call is appended
//! to a shared log so tests can assert the exact order of side effects.
//!
//! # Limitations
//!
//! - Single surface geometry (`320x64` at `(8, 16)`)
//! - Surface creation never fails unless `fail_next_create()` was called
//! - The captured inbound sink is the last one registered, across surfaces

use std::cell::RefCell;
use std::rc::Rc;

use goto_app::{Host, InboundSender, Surface, SurfaceConfig};
use goto_core::{Error, Position, Result, Size, SurfaceMessage};
use serde_json::Value;

/// One observed collaborator call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateSurface(String),
    AuxiliaryInputHidden(bool),
    OpenActivity(String),
    SetVisible(bool),
    Connect,
    Disconnect,
    Close,
    Send(Value),
}

#[derive(Debug, Default)]
struct Shared {
    calls: Vec<Call>,
    sink: Option<InboundSender>,
    fail_next_create: bool,
}

/// Handle kept by the test to inspect what happened
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    shared: Rc<RefCell<Shared>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.shared.borrow().calls.clone()
    }

    pub fn clear(&self) {
        self.shared.borrow_mut().calls.clear();
    }

    pub fn count(&self, call: &Call) -> usize {
        self.shared
            .borrow()
            .calls
            .iter()
            .filter(|c| *c == call)
            .count()
    }

    /// Auxiliary input toggles in order
    pub fn input_toggles(&self) -> Vec<bool> {
        self.shared
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::AuxiliaryInputHidden(hidden) => Some(*hidden),
                _ => None,
            })
            .collect()
    }

    /// Deliver a message the way the live surface would.
    /// Returns `false` if no sink is registered.
    pub fn emit(&self, msg: SurfaceMessage) -> bool {
        match &self.shared.borrow().sink {
            Some(sink) => sink.send(msg).is_ok(),
            None => false,
        }
    }

    pub fn fail_next_create(&self) {
        self.shared.borrow_mut().fail_next_create = true;
    }

    fn record(&self, call: Call) {
        self.shared.borrow_mut().calls.push(call);
    }
}

/// `Host` implementation backed by a [`Recorder`]
pub struct RecordingHost {
    recorder: Recorder,
}

impl RecordingHost {
    pub fn new() -> (Self, Recorder) {
        let recorder = Recorder::default();
        (
            Self {
                recorder: recorder.clone(),
            },
            recorder,
        )
    }
}

impl Host for RecordingHost {
    fn create_surface(&mut self, config: &SurfaceConfig) -> Result<Box<dyn Surface>> {
        let fail = std::mem::take(&mut self.recorder.shared.borrow_mut().fail_next_create);
        if fail {
            return Err(Error::surface_create(config.content.clone(), "host refused"));
        }
        self.recorder
            .record(Call::CreateSurface(config.content.clone()));
        Ok(Box::new(RecordingSurface {
            recorder: self.recorder.clone(),
        }))
    }

    fn set_auxiliary_input_hidden(&mut self, hidden: bool) {
        self.recorder.record(Call::AuxiliaryInputHidden(hidden));
    }

    fn open_platform_activity(&mut self, name: &str) {
        self.recorder.record(Call::OpenActivity(name.to_string()));
    }
}

struct RecordingSurface {
    recorder: Recorder,
}

impl Surface for RecordingSurface {
    fn set_visible(&mut self, visible: bool) {
        self.recorder.record(Call::SetVisible(visible));
    }

    fn close(&mut self) {
        self.recorder.record(Call::Close);
    }

    fn size(&self) -> Size {
        Size::new(320.0, 64.0)
    }

    fn position(&self) -> Position {
        Position::new(8.0, 16.0)
    }

    fn connect_inbound(&mut self, sink: InboundSender) {
        self.recorder.shared.borrow_mut().sink = Some(sink);
        self.recorder.record(Call::Connect);
    }

    fn disconnect_inbound(&mut self) {
        self.recorder.shared.borrow_mut().sink = None;
        self.recorder.record(Call::Disconnect);
    }

    fn send(&mut self, message: Value) {
        self.recorder.record(Call::Send(message));
    }
}
