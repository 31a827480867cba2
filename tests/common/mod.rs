//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;

use anyhow::{bail, Result};
use linkbar::{ButtonTheme, EditorHost, LinkButton, LinkButtonConfig};

/// Install a subscriber so failing tests show the control's trace output.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Snapshot stand-in: the entity tags spanning the fake selection.
#[derive(Debug, Clone, Default)]
pub struct FakeSnapshot {
    pub entities: Vec<&'static str>,
}

/// Scriptable host editor engine that records every call the control makes.
#[derive(Default)]
pub struct FakeHost {
    pub snapshot: Option<FakeSnapshot>,
    /// Entity tags the control asked about, in call order.
    pub entity_queries: RefCell<Vec<String>>,
    /// How many times the control invoked the removal command.
    pub removals: usize,
    /// When set, the removal command fails with a fixed message.
    pub fail_removal: bool,
}

impl FakeHost {
    /// Host that has not produced a snapshot yet (initial mount).
    pub fn without_snapshot() -> Self {
        Self::default()
    }

    /// Host whose selection carries no entities.
    pub fn with_plain_selection() -> Self {
        Self {
            snapshot: Some(FakeSnapshot::default()),
            ..Self::default()
        }
    }

    /// Host whose selection is fully covered by a link entity.
    pub fn with_linked_selection() -> Self {
        Self {
            snapshot: Some(FakeSnapshot {
                entities: vec!["LINK"],
            }),
            ..Self::default()
        }
    }
}

impl EditorHost for FakeHost {
    type Snapshot = FakeSnapshot;

    fn editor_state(&self) -> Option<FakeSnapshot> {
        self.snapshot.clone()
    }

    fn has_entity(&self, snapshot: &FakeSnapshot, entity_type: &str) -> bool {
        self.entity_queries
            .borrow_mut()
            .push(entity_type.to_string());
        snapshot.entities.iter().any(|tag| *tag == entity_type)
    }

    fn remove_link_at_selection(&mut self) -> Result<()> {
        if self.fail_removal {
            bail!("host removal failed");
        }
        self.removals += 1;
        Ok(())
    }
}

/// A theme whose three slots are easy to tell apart in assertions.
pub fn test_theme() -> ButtonTheme {
    ButtonTheme {
        button: "toolbar-link".to_string(),
        active: "toolbar-link-active".to_string(),
        button_wrapper: "toolbar-link-wrapper".to_string(),
    }
}

/// A button with the test theme and no optional configuration.
pub fn test_button() -> LinkButton {
    LinkButton::new(LinkButtonConfig::new(test_theme()))
}
