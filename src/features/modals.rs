use crate::dom::PageElement;
use crate::markup::ACTIVE_CLASS;

pub const ESCAPE_KEY: &str = "Escape";

/// Privacy/terms dialogs. An open dialog locks page scrolling.
pub struct Modals<E> {
    body: E,
    modals: Vec<E>,
}

impl<E: PageElement> Modals<E> {
    pub fn new(body: E, modals: Vec<E>) -> Self {
        Modals { body, modals }
    }

    pub fn open(&self, modal: &E) {
        modal.add_class(ACTIVE_CLASS);
        self.body.set_style("overflow", "hidden");
    }

    pub fn close(&self, modal: &E) {
        modal.remove_class(ACTIVE_CLASS);
        if !self.any_active() {
            self.body.set_style("overflow", "");
        }
    }

    pub fn close_all(&self) {
        for modal in self.modals.iter().filter(|m| m.has_class(ACTIVE_CLASS)) {
            modal.remove_class(ACTIVE_CLASS);
        }
        self.body.set_style("overflow", "");
    }

    /// Clicks on the dim backdrop close the dialog; clicks that land inside
    /// its content bubble up with a different target and are ignored.
    pub fn on_backdrop_click(&self, modal: &E, target: Option<&E>) -> bool {
        if target != Some(modal) {
            return false;
        }
        self.close(modal);
        true
    }

    pub fn on_key(&self, key: &str) -> bool {
        if key != ESCAPE_KEY || !self.any_active() {
            return false;
        }
        self.close_all();
        true
    }

    pub fn modals(&self) -> &[E] {
        &self.modals
    }

    fn any_active(&self) -> bool {
        self.modals.iter().any(|m| m.has_class(ACTIVE_CLASS))
    }
}
