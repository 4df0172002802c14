//! # tabler-kit
//!
//! Server-rendered view components and a form builder for the
//! [Tabler](https://tabler.io) design system.
//!
//! tabler-kit renders Tabler's widget catalog — alerts, tabs, dropdowns,
//! navbars, ratings, placeholders, statuses, settings pages, icons,
//! illustrations, datagrids — as plain HTML strings, with no template
//! engine of its own. Components are typed builders that also deserialize
//! from attribute maps, so templates can summon them by name through a
//! [`Registry`](component::Registry).
//!
//! ## Core Systems
//!
//! - **[`html`]** — Markup tree: elements, escaping, class lists
//! - **[`component`]** — Component trait, slots, registry
//! - **[`components`]** — The Tabler catalog, one file per component
//! - **[`form`]** — Model-bound form builder with per-type input strategies
//! - **[`assets`]** — Embedded Tabler SVG icons and illustrations
//! - **[`ui`]** — Registry plus assets behind one handle
//! - **[`testing`]** — Render helpers and a sample form model
//!
//! ## Rendering by name
//!
//! ```
//! use tabler_kit::ui::Ui;
//! use serde_json::json;
//!
//! let ui = Ui::new();
//! let html = ui
//!     .render("alert", json!({ "variant": "success", "title": "Saved" })
//!         .as_object()
//!         .cloned()
//!         .unwrap())
//!     .unwrap();
//! assert!(html.as_str().contains("alert-success"));
//! ```
//!
//! ## Typed construction
//!
//! ```
//! use tabler_kit::components::Tabs;
//! use tabler_kit::components::Tab;
//! use tabler_kit::ui::Ui;
//!
//! let tabs = Tabs::new("docs")
//!     .tab(Tab::new("Readme").content("<p>Start here.</p>"))
//!     .tab(Tab::new("License"));
//! let html = Ui::new().component(&tabs);
//! assert!(html.as_str().contains("nav-tabs"));
//! ```

// Foundation
pub mod html;

// Component system
pub mod component;
pub mod components;

// Form builder
pub mod form;

// Assets
pub mod assets;

// Front door
pub mod ui;

// Test support
pub mod testing;
