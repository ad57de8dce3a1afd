use crate::dom::PageElement;

/// Raises a card above its neighbours while the pointer rests on it.
/// Only wired up for fine pointers; touch screens never see it.
pub struct HoverLift {
    z_index: String,
}

impl HoverLift {
    pub fn new(z_index: impl Into<String>) -> Self {
        HoverLift {
            z_index: z_index.into(),
        }
    }

    pub fn enabled(coarse_pointer: bool) -> bool {
        !coarse_pointer
    }

    pub fn enter<E: PageElement>(&self, card: &E) {
        card.set_style("z-index", &self.z_index);
    }

    pub fn leave<E: PageElement>(&self, card: &E) {
        card.set_style("z-index", "");
    }
}
