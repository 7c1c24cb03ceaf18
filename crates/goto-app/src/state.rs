//! Dialog presentation state

/// Lifecycle phase derived from [`DialogState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// No surface held (before `init()` or after `destroy()`)
    Uninitialized,
    /// Surface exists but is not shown
    Hidden,
    /// Surface exists and is shown
    Shown,
}

/// Flags the state machine works on.
///
/// Invariants kept by `handler::update`:
/// - `listening` implies `surface_present`
/// - `visible` implies `surface_present`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    /// A surface is currently owned by the controller
    pub surface_present: bool,
    /// Authoritative visibility, independent of the surface's own view
    pub visible: bool,
    /// The inbound sink is registered with the surface
    pub listening: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        match (self.surface_present, self.visible) {
            (false, _) => DialogPhase::Uninitialized,
            (true, false) => DialogPhase::Hidden,
            (true, true) => DialogPhase::Shown,
        }
    }

    /// Forget the surface and everything tied to it
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn invariants_hold(&self) -> bool {
        (!self.listening || self.surface_present) && (!self.visible || self.surface_present)
    }
}
