//! Named slot content for slot-model components.
//!
//! Slots are filled by the caller before render. Each slot holds already
//! rendered [`Html`]; a slot whose content is empty or whitespace counts as
//! unfilled, so templates can pass optional fragments through without
//! guarding every one.

use std::collections::BTreeMap;

use crate::html::Html;

/// Conventional name of the main content slot.
pub const BODY: &str = "body";

/// Caller-supplied content keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    inner: BTreeMap<String, Html>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a slot, replacing any previous content under the same name.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Html>) {
        self.inner.insert(name.into(), content.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Html>) -> Self {
        self.insert(name, content);
        self
    }

    /// Shorthand for filling the "body" slot.
    pub fn with_body(self, content: impl Into<Html>) -> Self {
        self.with(BODY, content)
    }

    /// Raw slot content, blank or not.
    pub fn get(&self, name: &str) -> Option<&Html> {
        self.inner.get(name)
    }

    /// Slot content, treating blank content as unfilled.
    pub fn filled(&self, name: &str) -> Option<&Html> {
        self.inner.get(name).filter(|html| !html.is_blank())
    }

    /// The "body" slot, if non-blank.
    pub fn body(&self) -> Option<&Html> {
        self.filled(BODY)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filled(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Names of all filled (non-blank) slots, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.inner
            .iter()
            .filter(|(_, html)| !html.is_blank())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl<N: Into<String>, C: Into<Html>> FromIterator<(N, C)> for Slots {
    fn from_iter<T: IntoIterator<Item = (N, C)>>(iter: T) -> Self {
        let mut slots = Slots::new();
        for (name, content) in iter {
            slots.insert(name, content);
        }
        slots
    }
}

// ===========================================================================
// Tests
// ===========================================================================
