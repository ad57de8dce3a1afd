use crate::dom::{ElementLookup, PageElement};
use crate::markup::{DEFERRED_SRC_ATTR, LAZY_IMAGES, SRC_ATTR};
use crate::watch::WatchSet;

/// Images holding their real source in `data-src` until they come near the viewport.
pub struct LazyImages<E> {
    watches: WatchSet<E>,
}

pub fn lazy_images<L: ElementLookup>(lookup: &L) -> Vec<L::Element> {
    lookup.select_all(LAZY_IMAGES)
}

impl<E: PageElement> LazyImages<E> {
    pub fn new(images: impl IntoIterator<Item = E>) -> Self {
        let mut watches = WatchSet::new();
        for image in images {
            watches.observe(image);
        }
        LazyImages { watches }
    }

    pub fn on_intersection(&mut self, image: &E, is_intersecting: bool) -> bool {
        self.watches.handle(image, is_intersecting, |image| {
            promote_deferred_source(image);
        })
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.watches.watching()
    }
}

/// Moves `data-src` into `src` and drops the marker.
pub fn promote_deferred_source<E: PageElement>(image: &E) -> bool {
    let Some(source) = image.attribute(DEFERRED_SRC_ATTR) else {
        return false;
    };
    image.set_attribute(SRC_ATTR, &source);
    image.remove_attribute(DEFERRED_SRC_ATTR);
    true
}
