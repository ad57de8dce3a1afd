//! Entrance animations driven by viewport intersection: the fixed fade-in
//! card groups (with per-group stagger) and the attribute-driven reveal.

use crate::dom::{ElementLookup, PageElement};
use crate::markup::{
    FADE_IN_TARGETS, REVEALED_CLASS, REVEAL_DELAY_ATTR, REVEAL_TARGETS, STAGGERED_GROUPS,
    VISIBLE_CLASS,
};
use crate::watch::WatchSet;

/// Transition delay for the `index`-th card of a group, e.g. `0.3s`.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let ms = index as f64 * f64::from(step_ms);
    format!("{}s", ms / 1000.0)
}

/// Gives the members of each staggered group increasing transition delays
/// so siblings animate in sequence.
pub fn apply_stagger<L: ElementLookup>(lookup: &L, step_ms: u32) {
    for group in STAGGERED_GROUPS {
        for (index, card) in lookup.select_all(group).iter().enumerate() {
            card.set_style("transition-delay", &stagger_delay(index, step_ms));
        }
    }
}

pub fn fade_in_targets<L: ElementLookup>(lookup: &L) -> Vec<L::Element> {
    lookup.select_all(FADE_IN_TARGETS)
}

pub fn reveal_targets<L: ElementLookup>(lookup: &L) -> Vec<L::Element> {
    lookup.select_all(REVEAL_TARGETS)
}

/// Cards that become visible the first time they scroll into range.
pub struct FadeIn<E> {
    watches: WatchSet<E>,
}

impl<E: PageElement> FadeIn<E> {
    pub fn new(targets: impl IntoIterator<Item = E>) -> Self {
        let mut watches = WatchSet::new();
        for target in targets {
            watches.observe(target);
        }
        FadeIn { watches }
    }

    /// Returns true when this report made the card visible; the caller
    /// should then stop observing it.
    pub fn on_intersection(&mut self, target: &E, is_intersecting: bool) -> bool {
        self.watches
            .handle(target, is_intersecting, |card| card.add_class(VISIBLE_CLASS))
    }

    #[cfg(test)]
    pub fn watching(&self) -> usize {
        self.watches.watching()
    }
}

/// Delay before a reveal-marked element animates. Missing, malformed or
/// negative values mean no delay; fractions are truncated.
pub fn reveal_delay_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms.min(f64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Reveal-marked elements waiting to scroll into range.
pub struct Reveal<E> {
    watches: WatchSet<E>,
}

impl<E: PageElement> Reveal<E> {
    pub fn new(targets: impl IntoIterator<Item = E>) -> Self {
        let mut watches = WatchSet::new();
        for target in targets {
            watches.observe(target);
        }
        Reveal { watches }
    }

    /// On the first intersection, returns the delay after which
    /// [`reveal`] should be applied to `target`.
    pub fn on_intersection(&mut self, target: &E, is_intersecting: bool) -> Option<u32> {
        let mut delay = None;
        self.watches.handle(target, is_intersecting, |el| {
            delay = Some(reveal_delay_ms(el.attribute(REVEAL_DELAY_ATTR).as_deref()));
        });
        delay
    }
}

/// Applies the revealed state unless the element has left the page meanwhile.
pub fn reveal<E: PageElement>(element: &E) -> bool {
    if !element.is_connected() {
        return false;
    }
    element.add_class(REVEALED_CLASS);
    true
}
