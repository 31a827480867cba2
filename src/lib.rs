//! Linkbar - link toggle button for rich-text editor toolbars
//!
//! This crate provides a single toolbar control: a button that inserts a
//! hyperlink around the current selection, or removes an existing one,
//! depending on what the selection holds. The host editor engine and the
//! link-creation overlay form stay behind narrow boundaries; the control
//! only classifies the selection, picks a mode, and hands off.

pub mod button;
pub mod config;
pub mod event;
pub mod host;
pub mod inspect;
pub mod mode;
pub mod overlay;
pub mod theme;

// Re-export commonly used types
pub use button::{ButtonView, LinkButton, LINK_ICON};
pub use config::LinkButtonConfig;
pub use event::PointerEvent;
pub use host::{EditorHost, LINK_ENTITY};
pub use mode::{select_mode, ButtonMode};
pub use overlay::{request_create_overlay, OverlayRequest, UrlValidator};
pub use theme::ButtonTheme;
