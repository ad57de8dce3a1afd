//! The seam between page behavior and whatever renders the page.
//!
//! Feature logic only talks to these traits. The browser implementation lives in
//! `browser::element`; tests run against `dom::fake`.

#[cfg(test)]
pub mod fake;

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

pub trait ClassListMutator {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flips `class` and reports whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn has_class(&self, class: &str) -> bool;
}

pub trait PageElement: ClassListMutator + Clone + PartialEq + 'static {
    /// Sets an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    /// Descendants matching `selector`, in document order.
    fn select_within(&self, selector: &str) -> Vec<Self>;
    fn bounding_rect(&self) -> Rect;
    /// Distance from the top of the document to the element's top edge.
    fn offset_top(&self) -> f64;
    /// Smoothly scrolls the element so its top edge meets the viewport top.
    fn scroll_into_view(&self);
    fn is_connected(&self) -> bool;
}

/// Elements that own input fields and can be reset, i.e. `<form>`.
pub trait FormControl: PageElement {
    fn field_value(&self, selector: &str) -> Option<String>;
    fn reset(&self);
}

pub trait ElementLookup {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn select_first(&self, selector: &str) -> Option<Self::Element> {
        self.select_all(selector).into_iter().next()
    }
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
}
