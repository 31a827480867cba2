//! The always-visible toolbar button.
//!
//! On every render the button re-derives its mode from a fresh snapshot:
//! there is deliberately no cached "am I active" flag, so the view cannot
//! drift from selection changes the control never sees. A click either
//! removes the link at the selection or hands the link-creation overlay to
//! the toolbar's override slot.

use anyhow::Result;

use crate::config::LinkButtonConfig;
use crate::event::PointerEvent;
use crate::host::EditorHost;
use crate::inspect::has_link_at_selection;
use crate::mode::{select_mode, ButtonMode};
use crate::overlay::{request_create_overlay, OverlayRequest};

/// A single `<path>` element of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgPath {
    /// Path data.
    pub d: &'static str,
    /// Explicit fill, `None` to inherit the button's color.
    pub fill: Option<&'static str>,
}

/// A fixed-size vector icon the host draws inside the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgIcon {
    pub width: u32,
    pub height: u32,
    pub view_box: &'static str,
    pub paths: &'static [SvgPath],
}

/// The 24x24 chain-link glyph.
pub const LINK_ICON: SvgIcon = SvgIcon {
    width: 24,
    height: 24,
    view_box: "0 0 24 24",
    paths: &[
        SvgPath {
            d: "M0 0h24v24H0z",
            fill: Some("none"),
        },
        SvgPath {
            d: "M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z",
            fill: None,
        },
    ],
};

/// Per-render view-model for the button.
#[derive(Debug, Clone)]
pub struct ButtonView {
    /// Class for the wrapper element.
    pub wrapper_class: String,
    /// Space-joined classes for the button element: the base class, plus
    /// the active class while a link spans the selection.
    pub class_name: String,
    /// Icon to draw inside the button.
    pub icon: &'static SvgIcon,
    /// Mode a click will act in, given the same snapshot.
    pub mode: ButtonMode,
}

/// The link toggle button control.
///
/// Holds configuration only; all per-render and per-click state is derived
/// from the host's current snapshot at the moment of the call.
#[derive(Debug, Clone)]
pub struct LinkButton {
    config: LinkButtonConfig,
}

impl LinkButton {
    pub fn new(config: LinkButtonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkButtonConfig {
        &self.config
    }

    /// Compute the view for the current render pass.
    pub fn view<H: EditorHost>(&self, host: &H) -> ButtonView {
        let mode = {
            let snapshot = host.editor_state();
            select_mode(has_link_at_selection(host, snapshot.as_ref()))
        };

        let theme = &self.config.theme;
        let class_name = match mode {
            ButtonMode::Removing => format!("{} {}", theme.button, theme.active),
            ButtonMode::Creating => theme.button.clone(),
        };

        ButtonView {
            wrapper_class: theme.button_wrapper.clone(),
            class_name,
            icon: &LINK_ICON,
            mode,
        }
    }

    /// Wrapper pointer-down handler.
    ///
    /// Always cancels the default focus shift, in both modes, so the
    /// editor's selection survives until the click lands.
    pub fn on_pointer_down(&self, event: &mut PointerEvent) {
        event.prevent_default();
    }

    /// Click entry point: classify the selection and either remove the
    /// existing link or hand the creation overlay to the toolbar.
    ///
    /// Suppression comes first in both modes; the overlay needs the
    /// selection the click would otherwise destroy. Host callback failures
    /// propagate unmodified.
    pub fn on_click<H, F>(
        &self,
        host: &mut H,
        on_override_content: F,
        event: &mut PointerEvent,
    ) -> Result<()>
    where
        H: EditorHost,
        F: FnOnce(OverlayRequest) -> Result<()>,
    {
        event.prevent_default();
        event.stop_propagation();

        let mode = {
            let snapshot = host.editor_state();
            select_mode(has_link_at_selection(host, snapshot.as_ref()))
        };

        match mode {
            ButtonMode::Removing => {
                tracing::debug!("removing link at selection");
                host.remove_link_at_selection()
            }
            ButtonMode::Creating => {
                tracing::debug!("opening link-creation overlay");
                request_create_overlay(
                    OverlayRequest {
                        placeholder: self.config.placeholder.clone(),
                        theme: self.config.theme.clone(),
                        validate_url: self.config.validate_url.clone(),
                    },
                    on_override_content,
                )
            }
        }
    }
}
