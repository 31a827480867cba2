//! Button configuration handed in by the host toolbar.
//!
//! An explicit struct with enumerated optional fields rather than a loose
//! options bag: `theme` is the only required piece, and the optional
//! fields are forwarded to the link-creation overlay unchanged.

use std::fmt;

use crate::overlay::UrlValidator;
use crate::theme::ButtonTheme;

/// Configuration for a [`LinkButton`](crate::button::LinkButton).
#[derive(Clone, Default)]
pub struct LinkButtonConfig {
    /// Class names for the button's visual slots.
    pub theme: ButtonTheme,
    /// Hint text for the overlay's URL input. Defaults to `None`, letting
    /// the overlay apply its own hint.
    pub placeholder: Option<String>,
    /// URL predicate for the overlay form. Defaults to `None`, letting the
    /// overlay apply its own default validation.
    pub validate_url: Option<UrlValidator>,
}

impl LinkButtonConfig {
    /// Create a configuration with the given theme and no optional fields.
    pub fn new(theme: ButtonTheme) -> Self {
        Self {
            theme,
            placeholder: None,
            validate_url: None,
        }
    }

    /// Set the overlay placeholder text (builder pattern)
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the overlay URL validator (builder pattern)
    pub fn with_url_validator(mut self, validate_url: UrlValidator) -> Self {
        self.validate_url = Some(validate_url);
        self
    }
}

impl fmt::Debug for LinkButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkButtonConfig")
            .field("theme", &self.theme)
            .field("placeholder", &self.placeholder)
            .field("validate_url", &self.validate_url.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
