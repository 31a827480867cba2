//! Selection inspection against the host's entity model.

use crate::host::{EditorHost, LINK_ENTITY};

/// Whether a link entity spans the current selection.
///
/// A missing snapshot reads as "no link present" rather than an error, so
/// the button degrades to its creation behavior during initial mount.
/// Deterministic given the snapshot; no side effects beyond a trace line.
pub fn has_link_at_selection<H: EditorHost>(host: &H, snapshot: Option<&H::Snapshot>) -> bool {
    let has_link = match snapshot {
        Some(snapshot) => host.has_entity(snapshot, LINK_ENTITY),
        None => false,
    };
    tracing::trace!(has_link, "inspected selection for link entity");
    has_link
}
