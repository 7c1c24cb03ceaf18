//! In-memory host and surface used by the headless runner

use std::cell::RefCell;
use std::rc::Rc;

use goto_app::{Host, InboundSender, Surface, SurfaceConfig};
use goto_core::prelude::*;
use goto_core::{Position, Size, SurfaceMessage};
use serde_json::Value;

use super::HeadlessEvent;

/// Nominal geometry reported by headless surfaces
const HEADLESS_SIZE: Size = Size { x: 480.0, y: 96.0 };
const HEADLESS_POSITION: Position = Position { x: 0.0, y: 0.0 };

/// Sink slot shared between the live surface and the injector
type InboundSlot = Rc<RefCell<Option<InboundSender>>>;

/// Host that emits a [`HeadlessEvent`] for every collaborator call
#[derive(Debug, Default)]
pub struct HeadlessHost {
    inbound: InboundSlot,
}

impl HeadlessHost {
    /// Create the host together with an injector for surface messages
    pub fn with_injector() -> (Self, SurfaceInjector) {
        let inbound = InboundSlot::default();
        let injector = SurfaceInjector {
            inbound: inbound.clone(),
        };
        (Self { inbound }, injector)
    }
}

impl Host for HeadlessHost {
    fn create_surface(&mut self, config: &SurfaceConfig) -> Result<Box<dyn Surface>> {
        HeadlessEvent::surface_created(&config.content).emit();
        // A fresh surface never inherits a previous surface's sink.
        self.inbound.borrow_mut().take();
        Ok(Box::new(HeadlessSurface {
            visible: config.initial_visible,
            inbound: self.inbound.clone(),
        }))
    }

    fn set_auxiliary_input_hidden(&mut self, hidden: bool) {
        HeadlessEvent::auxiliary_input(hidden).emit();
    }

    fn open_platform_activity(&mut self, name: &str) {
        HeadlessEvent::activity_opened(name).emit();
    }
}

/// Surface with no UI behind it
#[derive(Debug)]
pub struct HeadlessSurface {
    visible: bool,
    inbound: InboundSlot,
}

impl Surface for HeadlessSurface {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        HeadlessEvent::surface_visible(visible).emit();
    }

    fn close(&mut self) {
        debug!("Closing headless surface (visible: {})", self.visible);
        self.inbound.borrow_mut().take();
        HeadlessEvent::surface_closed().emit();
    }

    fn size(&self) -> Size {
        HEADLESS_SIZE
    }

    fn position(&self) -> Position {
        HEADLESS_POSITION
    }

    fn connect_inbound(&mut self, sink: InboundSender) {
        *self.inbound.borrow_mut() = Some(sink);
        HeadlessEvent::inbound_connected(true).emit();
    }

    fn disconnect_inbound(&mut self) {
        self.inbound.borrow_mut().take();
        HeadlessEvent::inbound_connected(false).emit();
    }

    fn send(&mut self, message: Value) {
        HeadlessEvent::outbound(message).emit();
    }
}

/// Delivers messages as if the live surface emitted them
#[derive(Debug, Clone)]
pub struct SurfaceInjector {
    inbound: InboundSlot,
}

impl SurfaceInjector {
    /// Returns `false` when no sink is registered and the message was dropped
    pub fn inject(&self, msg: SurfaceMessage) -> bool {
        let slot = self.inbound.borrow();
        match slot.as_ref() {
            Some(sink) if sink.send(msg.clone()).is_ok() => true,
            _ => {
                debug!("No inbound sink registered, dropping {:?}", msg.method());
                HeadlessEvent::message_dropped(msg.to_envelope()).emit();
                false
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inbound.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goto_app::{DialogController, Settings};

    #[test]
    fn test_injector_follows_registration() {
        let (host, injector) = HeadlessHost::with_injector();
        let mut controller = DialogController::new(Box::new(host), Settings::default());
        controller.init().unwrap();

        assert!(!injector.is_connected());
        assert!(!injector.inject(SurfaceMessage::Hide));

        controller.show();
        assert!(injector.is_connected());
        assert!(injector.inject(SurfaceMessage::Hide));
        assert_eq!(controller.pump_inbound(), 1);

        assert!(!controller.is_visible());
        assert!(!injector.is_connected());
    }

    #[test]
    fn test_destroy_drops_sink() {
        let (host, injector) = HeadlessHost::with_injector();
        let mut controller = DialogController::new(Box::new(host), Settings::default());
        controller.init().unwrap();
        controller.show();
        controller.destroy();

        assert!(!injector.is_connected());
        assert_eq!(controller.width(), 0.0);
    }

    #[test]
    fn test_message_from_destroyed_surface_is_discarded() {
        let (host, injector) = HeadlessHost::with_injector();
        let mut controller = DialogController::new(Box::new(host), Settings::default());
        controller.init().unwrap();
        controller.show();
        assert!(injector.inject(SurfaceMessage::Hide));

        controller.destroy();
        controller.init().unwrap();
        controller.show();

        assert_eq!(controller.pump_inbound(), 0);
        assert!(controller.is_visible());
        assert!(injector.is_connected());
    }

    #[test]
    fn test_headless_geometry() {
        let (host, _injector) = HeadlessHost::with_injector();
        let mut controller = DialogController::new(Box::new(host), Settings::default());
        controller.init().unwrap();
        controller.show();

        assert_eq!(controller.width(), 480.0);
        assert_eq!(controller.height(), 96.0);
        assert_eq!(controller.position(), Some(Position::new(0.0, 0.0)));
    }
}
