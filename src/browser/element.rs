use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{ClassListMutator, ElementLookup, FormControl, PageElement, Rect};

/// A live page element. Cloning shares the same node.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn from_element(element: Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(DomElement)
    }

    pub fn html(&self) -> &HtmlElement {
        &self.0
    }
}

fn collect(list: Result<web_sys::NodeList, wasm_bindgen::JsValue>) -> Vec<DomElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(DomElement::from_element)
        .collect()
}

impl ClassListMutator for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or(false)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl PageElement for DomElement {
    fn set_style(&self, property: &str, value: &str) {
        let style = self.0.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set style {}: {:?}", property, e);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn select_within(&self, selector: &str) -> Vec<Self> {
        collect(self.0.query_selector_all(selector))
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }

    fn offset_top(&self) -> f64 {
        f64::from(self.0.offset_top())
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }
}

impl FormControl for DomElement {
    fn field_value(&self, selector: &str) -> Option<String> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|field| field.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    fn reset(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        BrowserDocument { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Raw text of an element, used for the embedded JSON config block.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }
}

impl ElementLookup for BrowserDocument {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.document
            .get_element_by_id(id)
            .and_then(DomElement::from_element)
    }

    fn select_first(&self, selector: &str) -> Option<DomElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(DomElement::from_element)
    }

    fn select_all(&self, selector: &str) -> Vec<DomElement> {
        collect(self.document.query_selector_all(selector))
    }

    fn body(&self) -> Option<DomElement> {
        self.document.body().map(DomElement)
    }
}
