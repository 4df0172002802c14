//! SVG text surgery: class injection and proportional resizing.
//!
//! Icons and illustrations are stored as plain SVG text. Animation classes,
//! size classes and custom classes are injected into the root `class`
//! attribute; illustrations are resized by rewriting `width`/`height` from
//! the declared `viewBox` aspect ratio. Every rewrite is a no-op when the
//! pattern it targets is absent.

use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class="([^"]*)""#).expect("class attr regex"));

static VIEW_BOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"viewBox="0 0 (\d+) (\d+)""#).expect("viewBox regex"));

// Leading space keeps these from matching `stroke-width` / `line-height`.
static WIDTH_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#" width="[^"]*""#).expect("width attr regex"));

static HEIGHT_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#" height="[^"]*""#).expect("height attr regex"));

/// Append classes to the first `class` attribute in the SVG.
///
/// Returns the input unchanged when `extra` is empty or the SVG carries no
/// `class` attribute.
pub fn append_classes(svg: &str, extra: &[&str]) -> String {
    let extra: Vec<&str> = extra.iter().copied().filter(|c| !c.is_empty()).collect();
    if extra.is_empty() {
        return svg.to_owned();
    }
    CLASS_ATTR
        .replace(svg, |caps: &regex::Captures<'_>| {
            format!(r#"class="{} {}""#, &caps[1], extra.join(" "))
        })
        .into_owned()
}

/// Append a class, adding a `class` attribute to the root `<svg` when the
/// document has none.
pub fn ensure_class(svg: &str, class: &str) -> String {
    if class.is_empty() {
        return svg.to_owned();
    }
    if CLASS_ATTR.is_match(svg) {
        append_classes(svg, &[class])
    } else {
        svg.replacen("<svg", &format!(r#"<svg class="{class}""#), 1)
    }
}

/// Rewrite the root `width`/`height` attributes to `width` cells, keeping the
/// aspect ratio declared by a `viewBox="0 0 W H"` attribute.
///
/// SVGs without such a viewBox are returned unchanged.
pub fn resize_to_width(svg: &str, width: u32) -> String {
    let Some(caps) = VIEW_BOX.captures(svg) else {
        return svg.to_owned();
    };
    let orig_width: f64 = caps[1].parse().unwrap_or(0.0);
    let orig_height: f64 = caps[2].parse().unwrap_or(0.0);
    if orig_width <= 0.0 {
        return svg.to_owned();
    }
    let new_height = (f64::from(width) * orig_height / orig_width).round() as u32;

    let svg = WIDTH_ATTR.replace(svg, format!(r#" width="{width}""#));
    HEIGHT_ATTR
        .replace(&svg, format!(r#" height="{new_height}""#))
        .into_owned()
}

// ===========================================================================
// Tests
// ===========================================================================
