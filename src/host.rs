//! Boundary to the host editor engine.
//!
//! The control never owns document state. It reads a snapshot through the
//! host accessor at the top of each render or click, hands it straight
//! back to the host's own entity query, and drops it before returning.

use anyhow::Result;

/// Entity type tag the host attaches to hyperlinked spans.
pub const LINK_ENTITY: &str = "LINK";

/// Capabilities the host editor engine supplies to the control.
///
/// `Snapshot` is opaque: the control obtains one from
/// [`editor_state`](EditorHost::editor_state), passes it back to
/// [`has_entity`](EditorHost::has_entity), and never inspects, mutates, or
/// retains it beyond the current call. The host may replace its state
/// between calls at any time.
pub trait EditorHost {
    /// Immutable read of document content plus selection at one instant.
    type Snapshot;

    /// Current snapshot, if the editor has produced one yet.
    ///
    /// `None` covers both "accessor not wired up yet" and "no state yet",
    /// e.g. during initial mount.
    fn editor_state(&self) -> Option<Self::Snapshot>;

    /// Whether an entity of `entity_type` spans the active selection.
    ///
    /// The granularity ("any character in range" vs "all characters in
    /// range") is this host's contract; the control performs no span
    /// arithmetic of its own.
    fn has_entity(&self, snapshot: &Self::Snapshot, entity_type: &str) -> bool;

    /// Strip the link entity from the active selection and refresh any
    /// toolbar state that depends on it.
    ///
    /// Failures propagate out of the control unmodified.
    fn remove_link_at_selection(&mut self) -> Result<()>;
}
