use crate::dom::ClassListMutator;
use crate::markup::SCROLLED_CLASS;

/// Offsets at or below the threshold still count as the top of the page.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn apply_scroll_state<E: ClassListMutator>(navbar: &E, scroll_y: f64, threshold: f64) {
    if is_scrolled(scroll_y, threshold) {
        navbar.add_class(SCROLLED_CLASS);
    } else {
        navbar.remove_class(SCROLLED_CLASS);
    }
}
