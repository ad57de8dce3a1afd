use crate::dom::PageElement;
use crate::markup::{ACTIVE_CLASS, MENU_BARS, MENU_LINKS};

// (property, value) for each of the three burger bars.
const CROSS_ICON: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(5px, -5px)"),
];

const BARS_ICON: [(&str, &str); 3] = [("transform", "none"), ("opacity", "1"), ("transform", "none")];

/// The burger button and the panel it slides in.
pub struct MobileMenu<E> {
    button: E,
    panel: E,
}

impl<E: PageElement> MobileMenu<E> {
    pub fn new(button: E, panel: E) -> Self {
        MobileMenu { button, panel }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.panel.has_class(ACTIVE_CLASS)
    }

    pub fn toggle(&self) {
        let open = self.panel.toggle_class(ACTIVE_CLASS);
        self.morph_icon(open);
    }

    pub fn close(&self) {
        self.panel.remove_class(ACTIVE_CLASS);
        self.morph_icon(false);
    }

    /// Links inside the panel; each one closes the menu when followed.
    pub fn links(&self) -> Vec<E> {
        self.panel.select_within(MENU_LINKS)
    }

    fn morph_icon(&self, open: bool) {
        let icon = if open { &CROSS_ICON } else { &BARS_ICON };
        // A button with fewer bars just morphs the ones it has.
        for (bar, (property, value)) in self.button.select_within(MENU_BARS).iter().zip(icon) {
            bar.set_style(property, value);
        }
    }
}
