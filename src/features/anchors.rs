use crate::dom::{ElementLookup, PageElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Not an in-page fragment, or the bare `#`.
    Ignored,
    /// No element carries the fragment's id; the browser keeps its default jump.
    Unresolved,
    /// The target was scrolled into view; the default jump must be suppressed.
    Scrolled,
}

impl AnchorOutcome {
    /// Only a link that actually scrolled cancels the browser's own jump.
    pub fn suppresses_default(self) -> bool {
        self == AnchorOutcome::Scrolled
    }
}

/// Element id named by an in-page link, if it names one.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn follow_anchor<L: ElementLookup>(lookup: &L, href: &str) -> AnchorOutcome {
    let Some(id) = fragment_id(href) else {
        return AnchorOutcome::Ignored;
    };
    match lookup.element_by_id(id) {
        Some(target) => {
            target.scroll_into_view();
            AnchorOutcome::Scrolled
        }
        None => AnchorOutcome::Unresolved,
    }
}
