use crate::config::SiteConfig;
use crate::dom::{ElementLookup, PageElement, Rect};
use crate::markup::{HERO_BACKGROUND, HERO_SECTION, PROCESS_BACKGROUND, PROCESS_SECTION};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRates {
    pub hero_translate: f64,
    pub hero_scale: f64,
    pub process_translate: f64,
}

impl From<&SiteConfig> for ParallaxRates {
    fn from(config: &SiteConfig) -> Self {
        ParallaxRates {
            hero_translate: config.hero_translate_rate,
            hero_scale: config.hero_scale_rate,
            process_translate: config.process_translate_rate,
        }
    }
}

/// Parallax runs unless the page opted into honoring reduced motion and the
/// visitor asked for it.
pub fn motion_allowed(reduce_motion: bool, prefers_reduced_motion: bool) -> bool {
    !(reduce_motion && prefers_reduced_motion)
}

/// Hero background transform, or `None` once the hero has scrolled away.
pub fn hero_transform(scroll_y: f64, hero: Rect, rates: &ParallaxRates) -> Option<String> {
    if hero.bottom <= 0.0 {
        return None;
    }
    Some(format!(
        "translateY({}px) scale({})",
        scroll_y * rates.hero_translate,
        1.0 + scroll_y * rates.hero_scale
    ))
}

/// Process background transform while its section overlaps the viewport.
/// The offset is measured from the section's own position in the document.
pub fn process_transform(
    scroll_y: f64,
    section: Rect,
    section_offset_top: f64,
    viewport_height: f64,
    rates: &ParallaxRates,
) -> Option<String> {
    if section.top >= viewport_height || section.bottom <= 0.0 {
        return None;
    }
    let offset = scroll_y - section_offset_top;
    Some(format!("translateY({}px)", offset * rates.process_translate))
}

/// A background image and the section that frames it.
struct Layer<E> {
    image: E,
    section: E,
}

pub struct Parallax<E> {
    hero: Option<Layer<E>>,
    process: Option<Layer<E>>,
    rates: ParallaxRates,
}

impl<E: PageElement> Parallax<E> {
    /// Returns `None` when the page has neither parallax layer.
    pub fn locate<L: ElementLookup<Element = E>>(lookup: &L, rates: ParallaxRates) -> Option<Self> {
        let layer = |image: &str, section: &str| {
            Some(Layer {
                image: lookup.select_first(image)?,
                section: lookup.select_first(section)?,
            })
        };
        let hero = layer(HERO_BACKGROUND, HERO_SECTION);
        let process = layer(PROCESS_BACKGROUND, PROCESS_SECTION);
        if hero.is_none() && process.is_none() {
            return None;
        }
        Some(Parallax { hero, process, rates })
    }

    pub fn update(&self, scroll_y: f64, viewport_height: f64) {
        if let Some(hero) = &self.hero {
            if let Some(transform) = hero_transform(scroll_y, hero.section.bounding_rect(), &self.rates) {
                hero.image.set_style("transform", &transform);
            }
        }

        if let Some(process) = &self.process {
            let transform = process_transform(
                scroll_y,
                process.section.bounding_rect(),
                process.section.offset_top(),
                viewport_height,
                &self.rates,
            );
            if let Some(transform) = transform {
                process.image.set_style("transform", &transform);
            }
        }
    }
}
