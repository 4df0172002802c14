//! Ordered, de-duplicating CSS class collector.
//!
//! Components derive their class strings by pushing into a [`ClassList`] and
//! joining with single spaces. Order is insertion order; duplicates and empty
//! strings are dropped.

use std::fmt;

/// An ordered set of CSS class names.
///
/// # Examples
///
/// ```
/// use tabler_kit::html::ClassList;
///
/// let mut classes = ClassList::new();
/// classes.push("alert");
/// classes.push("alert-success");
/// classes.push_if(true, "alert-dismissible");
/// assert_eq!(classes.to_string(), "alert alert-success alert-dismissible");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class. No-op if already present or empty.
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Add a class only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, class: impl Into<String>) {
        if condition {
            self.push(class);
        }
    }

    /// Add a class when present.
    pub fn push_opt(&mut self, class: Option<impl Into<String>>) {
        if let Some(class) = class {
            self.push(class);
        }
    }

    /// Add several classes.
    pub fn extend(&mut self, classes: impl IntoIterator<Item = impl Into<String>>) {
        for class in classes {
            self.push(class);
        }
    }

    /// Whether the given class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// ===========================================================================
// Tests
// ===========================================================================
