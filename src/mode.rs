//! Creating/Removing classification for the button.
//!
//! The mode is derived fresh from the selection on every inspection and
//! never stored, so there is no stale-state invariant to maintain.

/// What a click on the button will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    /// No link at the selection: a click opens the link-creation overlay.
    Creating,
    /// A link spans the selection: a click removes it.
    Removing,
}

/// Map the inspector's answer to a mode.
///
/// This is the single decision point the rest of the control branches on;
/// it stays a named function so it remains independently testable.
pub fn select_mode(has_link: bool) -> ButtonMode {
    if has_link {
        ButtonMode::Removing
    } else {
        ButtonMode::Creating
    }
}
