//! Pointer events at the toolbar boundary.
//!
//! Hosts translate their native press/click events into [`PointerEvent`]
//! before invoking the control, then read the suppression flags back out
//! to cancel the toolkit's default handling.

/// A pointer interaction delivered by the host toolkit.
#[derive(Debug, Clone, Default)]
pub struct PointerEvent {
    /// True once a handler cancelled the default action (here: the focus
    /// shift away from the editor that would drop the selection).
    pub default_prevented: bool,
    /// True once a handler stopped the event from travelling further up
    /// the host's UI tree.
    pub propagation_stopped: bool,
}

impl PointerEvent {
    /// A fresh event with neither flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Keep the event from propagating to enclosing UI elements.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
