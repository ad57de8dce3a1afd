//! In-memory stand-in for the browser DOM used by unit tests.
//!
//! Supports the small selector subset the page uses: tag names, `.class`,
//! `[attr]`, `[attr="v"]`, `[attr^="v"]`, descendant combinators and
//! comma-separated lists.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{ClassListMutator, ElementLookup, FormControl, PageElement, Rect};

#[derive(Default)]
struct Node {
    tag: String,
    classes: RefCell<Vec<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    children: RefCell<Vec<FakeElement>>,
    parent: RefCell<Weak<Node>>,
    rect: Cell<Rect>,
    offset_top: Cell<f64>,
    connected: Cell<bool>,
    scrolls: Cell<u32>,
    resets: Cell<u32>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeElement")
            .field("tag", &self.0.tag)
            .field("classes", &self.0.classes.borrow())
            .field("attributes", &self.0.attributes.borrow())
            .finish()
    }
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        let node = Node {
            tag: tag.to_string(),
            connected: Cell::new(true),
            ..Node::default()
        };
        FakeElement(Rc::new(node))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        PageElement::set_attribute(&self, name, value);
        self
    }

    pub fn with_child(self, child: FakeElement) -> Self {
        self.append(child);
        self
    }

    pub fn with_rect(self, top: f64, bottom: f64) -> Self {
        self.set_rect(top, bottom);
        self
    }

    pub fn with_offset_top(self, offset_top: f64) -> Self {
        self.0.offset_top.set(offset_top);
        self
    }

    pub fn append(&self, child: FakeElement) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child);
    }

    pub fn set_rect(&self, top: f64, bottom: f64) {
        self.0.rect.set(Rect { top, bottom });
    }

    pub fn detach(&self) {
        self.0.connected.set(false);
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.styles.borrow().get(property).cloned()
    }

    pub fn scroll_count(&self) -> u32 {
        self.0.scrolls.get()
    }

    pub fn reset_count(&self) -> u32 {
        self.0.resets.get()
    }

    fn parent(&self) -> Option<FakeElement> {
        self.0.parent.borrow().upgrade().map(FakeElement)
    }

    fn descendants(&self, out: &mut Vec<FakeElement>) {
        for child in self.0.children.borrow().iter() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn matches(&self, selector: &str) -> bool {
        selector.split(',').any(|complex| {
            let compounds: Vec<&str> = complex.split_whitespace().collect();
            match compounds.split_last() {
                Some((last, ancestors)) => {
                    matches_compound(self, last) && ancestors_match(self.parent(), ancestors)
                }
                None => false,
            }
        })
    }
}

fn ancestors_match(mut candidate: Option<FakeElement>, compounds: &[&str]) -> bool {
    let mut remaining = compounds;
    while let Some((last, rest)) = remaining.split_last() {
        loop {
            match candidate {
                Some(el) => {
                    candidate = el.parent();
                    if matches_compound(&el, last) {
                        break;
                    }
                }
                None => return false,
            }
        }
        remaining = rest;
    }
    true
}

fn matches_compound(el: &FakeElement, compound: &str) -> bool {
    let is_boundary = |c: char| c == '.' || c == '[';
    let tag_end = compound.find(is_boundary).unwrap_or(compound.len());
    let tag = &compound[..tag_end];
    if !tag.is_empty() && tag != el.tag() {
        return false;
    }

    let mut rest = &compound[tag_end..];
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(is_boundary).unwrap_or(after.len());
            if !el.has_class(&after[..end]) {
                return false;
            }
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let Some(end) = after.find(']') else {
                return false;
            };
            if !matches_attribute(el, &after[..end]) {
                return false;
            }
            rest = &after[end + 1..];
        } else {
            return false;
        }
    }
    true
}

fn matches_attribute(el: &FakeElement, condition: &str) -> bool {
    if let Some((name, value)) = condition.split_once("^=") {
        let value = value.trim_matches('"');
        el.attribute(name).is_some_and(|actual| actual.starts_with(value))
    } else if let Some((name, value)) = condition.split_once('=') {
        let value = value.trim_matches('"');
        el.attribute(name).is_some_and(|actual| actual == value)
    } else {
        el.attribute(condition).is_some()
    }
}

impl ClassListMutator for FakeElement {
    fn add_class(&self, class: &str) {
        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }
}

impl PageElement for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        let mut styles = self.0.styles.borrow_mut();
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.attributes.borrow_mut().remove(name);
    }

    fn select_within(&self, selector: &str) -> Vec<Self> {
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter().filter(|el| el.matches(selector)).collect()
    }

    fn bounding_rect(&self) -> Rect {
        self.0.rect.get()
    }

    fn offset_top(&self) -> f64 {
        self.0.offset_top.get()
    }

    fn scroll_into_view(&self) {
        self.0.scrolls.set(self.0.scrolls.get() + 1);
    }

    fn is_connected(&self) -> bool {
        self.0.connected.get()
    }
}

impl FormControl for FakeElement {
    fn field_value(&self, selector: &str) -> Option<String> {
        self.select_within(selector)
            .first()
            .map(|field| field.attribute("value").unwrap_or_default())
    }

    fn reset(&self) {
        self.0.resets.set(self.0.resets.get() + 1);
        for field in self.select_within("input") {
            field.remove_attribute("value");
        }
    }
}

/// A document whose tree hangs off a single `<body>`.
pub struct FakeDocument {
    body: FakeElement,
}

impl FakeDocument {
    pub fn new(body: FakeElement) -> Self {
        FakeDocument { body }
    }

    pub fn with_children(children: Vec<FakeElement>) -> Self {
        let body = FakeElement::new("body");
        for child in children {
            body.append(child);
        }
        FakeDocument::new(body)
    }

    pub fn body_element(&self) -> &FakeElement {
        &self.body
    }
}

impl ElementLookup for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let mut all = Vec::new();
        self.body.descendants(&mut all);
        all.into_iter()
            .find(|el| el.attribute("id").as_deref() == Some(id))
    }

    fn select_all(&self, selector: &str) -> Vec<FakeElement> {
        self.body.select_within(selector)
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_subset_matches_like_the_browser() {
        let doc = FakeDocument::with_children(vec![
            FakeElement::new("section").with_class("hero-bg").with_child(FakeElement::new("img")),
            FakeElement::new("a").with_attr("href", "#about"),
            FakeElement::new("a").with_attr("href", "/blog"),
            FakeElement::new("div").with_class("modal").with_class("active"),
            FakeElement::new("div").with_class("modal"),
        ]);

        assert_eq!(doc.select_all(".hero-bg img").len(), 1);
        assert_eq!(doc.select_all("img").len(), 1);
        assert_eq!(doc.select_all("a[href^=\"#\"]").len(), 1);
        assert_eq!(doc.select_all(".modal.active").len(), 1);
        assert_eq!(doc.select_all(".modal, a").len(), 4);
        assert!(doc.select_all(".process-bg img").is_empty());
    }

    #[test]
    fn lookup_by_id_walks_the_whole_tree() {
        let doc = FakeDocument::with_children(vec![FakeElement::new("div")
            .with_child(FakeElement::new("p").with_id("deep"))]);

        assert_eq!(doc.element_by_id("deep").map(|el| el.tag().to_string()), Some("p".into()));
        assert!(doc.element_by_id("missing").is_none());
    }
}
