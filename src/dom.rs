use crate::constants::{CSS_TRANSFORM, MARKER_SELECTOR};
use glam::Vec2;
use kinetic_core::constants::MARKER_ATTR;
use kinetic_core::{Bounds, ElementHandle};
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn scroll_offset() -> Vec2 {
    web::window()
        .map(|w| {
            Vec2::new(
                w.scroll_x().unwrap_or(0.0) as f32,
                w.scroll_y().unwrap_or(0.0) as f32,
            )
        })
        .unwrap_or(Vec2::ZERO)
}

/// Managed DOM element.
///
/// The layout box is measured in page space before any transform is applied
/// and cached, so the element's own motion never feeds back into the
/// distance it reacts to. `remeasure` refreshes it after a resize.
pub struct DomElement {
    el: web::HtmlElement,
    page_center: Cell<Vec2>,
    half_extent: Cell<Vec2>,
}

impl DomElement {
    pub fn new(el: web::HtmlElement) -> Self {
        let this = Self {
            el,
            page_center: Cell::new(Vec2::ZERO),
            half_extent: Cell::new(Vec2::ZERO),
        };
        this.measure();
        this
    }

    #[inline]
    pub fn html(&self) -> &web::HtmlElement {
        &self.el
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    /// Measure again with the inline transform lifted for the duration.
    pub fn remeasure(&self) {
        let style = self.el.style();
        let inline = style.get_property_value(CSS_TRANSFORM).unwrap_or_default();
        _ = style.remove_property(CSS_TRANSFORM);
        self.measure();
        if !inline.is_empty() {
            _ = style.set_property(CSS_TRANSFORM, &inline);
        }
    }

    fn measure(&self) {
        let rect = self.el.get_bounding_client_rect();
        let b = Bounds::from_rect(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        self.page_center.set(b.center + scroll_offset());
        self.half_extent.set(b.half_extent);
    }
}

impl ElementHandle for DomElement {
    fn has_marker(&self) -> bool {
        self.el.has_attribute(MARKER_ATTR)
    }

    fn origin_transform(&self) -> String {
        web::window()
            .and_then(|w| w.get_computed_style(&self.el).ok().flatten())
            .and_then(|s| s.get_property_value(CSS_TRANSFORM).ok())
            .unwrap_or_default()
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            center: self.page_center.get() - scroll_offset(),
            half_extent: self.half_extent.get(),
        }
    }
}

/// The container itself (when marked) followed by every marked descendant.
pub fn discover(container: &web::Element) -> Vec<web::HtmlElement> {
    let mut found = Vec::new();
    if container.has_attribute(MARKER_ATTR) {
        if let Some(el) = container.dyn_ref::<web::HtmlElement>() {
            found.push(el.clone());
        }
    }
    if let Ok(list) = container.query_selector_all(MARKER_SELECTOR) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                found.push(el);
            }
        }
    }
    found
}
