//! SVG asset store: embedded bundle plus optional filesystem overlay.
//!
//! The crate ships a small icon/illustration set embedded at compile time
//! with `rust-embed`. An application can layer its own set on top by
//! pointing [`AssetStore::with_root`] at a directory with the same layout
//! (`icons/outline/*.svg`, `icons/filled/*.svg`,
//! `illustrations/<variant>/*.svg`). Lookups hit the embedded bundle first,
//! then the filesystem root.

pub mod svg;

use std::fs;
use std::path::PathBuf;

use rust_embed::RustEmbed;
use tracing::{debug, trace};

use crate::html::escape;

/// Embedded assets bundled with the crate.
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
#[include = "illustrations/**/*.svg"]
struct Embedded;

// ---------------------------------------------------------------------------
// AssetStore
// ---------------------------------------------------------------------------

/// Resolves icon and illustration SVGs by name.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    root: Option<PathBuf>,
}

impl AssetStore {
    /// A store serving only the embedded bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that falls back to `root` when a name is not in the bundle.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Fetch an icon SVG. `filled` selects the `filled/` variant directory,
    /// otherwise `outline/`.
    pub fn icon_svg(&self, name: &str, filled: bool) -> Option<String> {
        let variant = if filled { "filled" } else { "outline" };
        if !valid_name(name) {
            debug!(name, "rejected icon name");
            return None;
        }
        self.fetch(&format!("icons/{variant}/{name}.svg"))
    }

    /// Fetch an illustration SVG for the given variant (e.g. "light").
    pub fn illustration_svg(&self, name: &str, variant: &str) -> Option<String> {
        if !valid_name(name) || !valid_name(variant) {
            debug!(name, variant, "rejected illustration name");
            return None;
        }
        self.fetch(&format!("illustrations/{variant}/{name}.svg"))
    }

    fn fetch(&self, relative: &str) -> Option<String> {
        if let Some(file) = Embedded::get(relative) {
            trace!(path = relative, "asset served from embedded bundle");
            return String::from_utf8(file.data.into_owned()).ok();
        }
        if let Some(root) = &self.root {
            let path = root.join(relative);
            if let Ok(data) = fs::read_to_string(&path) {
                trace!(path = %path.display(), "asset served from filesystem root");
                return Some(data);
            }
        }
        debug!(path = relative, "asset not found");
        None
    }
}

/// Asset names are single path segments: no separators, no parent refs.
fn valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}

// ---------------------------------------------------------------------------
// Error glyphs
// ---------------------------------------------------------------------------

/// Fallback icon rendered when an icon name cannot be resolved: a red bug
/// glyph with the `icon-tada` wobble, hard to miss in a page.
pub const ERROR_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="red" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" class="icon icon-tabler icons-tabler-outline icon-tabler-bug icon-tada"><path stroke="none" d="M0 0h24v24H0z" fill="none"/><path d="M9 9v-1a3 3 0 0 1 6 0v1" /><path d="M8 9h8a6 6 0 0 1 1 3v3a5 5 0 0 1 -10 0v-3a6 6 0 0 1 1 -3" /><path d="M3 13l4 0" /><path d="M17 13l4 0" /><path d="M12 20l0 -6" /><path d="M4 19l3.35 -2" /><path d="M20 19l-3.35 -2" /><path d="M4 7l3.75 2.4" /><path d="M20 7l-3.75 2.4" /></svg>"#;

/// Build the fallback illustration for an unresolved name.
///
/// The missing name is printed inside the placeholder so the gap is
/// self-describing in rendered pages.
pub fn error_illustration(name: Option<&str>) -> String {
    let label = escape(name.unwrap_or("unknown"));
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="150" viewBox="0 0 200 150" class="illustration-error">"#,
            r##"<rect width="200" height="150" fill="#f8d7da" rx="8"/>"##,
            r##"<text x="100" y="70" text-anchor="middle" fill="#721c24" font-size="14">Illustration</text>"##,
            r##"<text x="100" y="90" text-anchor="middle" fill="#721c24" font-size="14">not found</text>"##,
            r##"<text x="100" y="115" text-anchor="middle" fill="#721c24" font-size="12" opacity="0.7">{}</text>"##,
            "</svg>"
        ),
        label
    )
}

// ===========================================================================
// Tests
// ===========================================================================
