//! Handoff of the link-creation overlay to the host toolbar.
//!
//! The toolbar exposes a single override slot: whatever descriptor is
//! handed to it replaces the toolbar's default content until the host
//! dismisses it. This module builds that descriptor and performs the
//! one-shot handoff; everything after the handoff (rendering, submit,
//! cancel) is the host's lifecycle.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::theme::ButtonTheme;

/// Predicate the overlay form runs against candidate URLs.
pub type UrlValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Descriptor for the link-creation overlay.
///
/// Rendered by the host, it brings up the link form pre-configured with
/// these options. The control builds one per click in creating mode and
/// holds no reference to it after the handoff.
#[derive(Clone)]
pub struct OverlayRequest {
    /// Hint text for the URL input, forwarded unchanged. `None` lets the
    /// form apply its own hint.
    pub placeholder: Option<String>,
    /// Class names forwarded to the form.
    pub theme: ButtonTheme,
    /// URL predicate, forwarded unchanged. `None` lets the form apply its
    /// own default validation; the control never substitutes one.
    pub validate_url: Option<UrlValidator>,
}

impl fmt::Debug for OverlayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayRequest")
            .field("placeholder", &self.placeholder)
            .field("theme", &self.theme)
            .field("validate_url", &self.validate_url.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Hand the overlay descriptor to the host toolbar's override slot.
///
/// `FnOnce` keeps the at-most-one-descriptor-per-click guarantee
/// structural. Slot failures propagate unmodified; there is no retry and
/// no state to roll back.
pub fn request_create_overlay<F>(request: OverlayRequest, on_override_content: F) -> Result<()>
where
    F: FnOnce(OverlayRequest) -> Result<()>,
{
    tracing::debug!("handing link-creation overlay to toolbar override slot");
    on_override_content(request)
}
