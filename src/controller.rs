//! The page interaction controller: finds the page's optional elements once the
//! markup is ready and wires every behavior to them. A missing element only
//! switches off its own feature.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Window};

use crate::browser::element::{BrowserDocument, DomElement};
use crate::browser::observer::{intersection_supported, Observer};
use crate::browser::viewport::{media_matches, scroll_y, viewport_height};
use crate::config::SiteConfig;
use crate::dom::{ClassListMutator, ElementLookup, PageElement};
use crate::error::{Result, SiteError};
use crate::features::anchors::follow_anchor;
use crate::features::entrance::{self, FadeIn, Reveal};
use crate::features::hover::HoverLift;
use crate::features::lazy_images::{lazy_images, LazyImages};
use crate::features::mobile_menu::MobileMenu;
use crate::features::modals::Modals;
use crate::features::navbar;
use crate::features::newsletter::{Newsletter, SubmitOutcome};
use crate::features::parallax::{motion_allowed, Parallax, ParallaxRates};
use crate::frame::FrameScheduler;
use crate::markup::*;
use crate::watch::observable;

/// `document.readyState`, as far as startup cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values count as parsed but not fully loaded.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => ReadyState::Loading,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Interactive,
        }
    }

    pub fn of(document: &Document) -> Self {
        Self::parse(&document.ready_state())
    }
}

/// Unlocks the CSS-driven first-load animations.
pub fn mark_loaded<E: ClassListMutator>(body: &E) {
    body.add_class(LOADED_CLASS);
}

/// Reads the embedded config block and applies its log level.
pub fn load_config(raw: Option<&str>) -> SiteConfig {
    let (config, error) = SiteConfig::load(raw);
    if let Some(e) = error {
        warn!("{}; falling back to defaults", e);
    }
    match config.level() {
        Ok(level) => log::set_max_level(level.to_level_filter()),
        Err(e) => warn!("{}", e),
    }
    config
}

/// Starts the controller once the document has been parsed.
pub fn boot() -> Result<()> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;

    if ReadyState::of(&document) == ReadyState::Loading {
        let ready_document = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            start(window, ready_document);
        })
        .forget();
    } else {
        start(window, document);
    }
    Ok(())
}

fn start(window: Window, document: Document) {
    let lookup = BrowserDocument::new(document);
    let config = load_config(lookup.text_of(SITE_CONFIG_ID).as_deref());
    let controller = PageController::start(window, lookup, config);
    std::mem::forget(controller);
    info!("Static site behavior loaded");
}

struct Page {
    window: Window,
    lookup: Rc<BrowserDocument>,
    config: SiteConfig,
    intersection: bool,
}

/// Owns every listener and observer attached to the page.
#[derive(Default)]
pub struct PageController {
    listeners: Vec<EventListener>,
    observers: Vec<Observer>,
}

impl PageController {
    pub fn start(window: Window, lookup: BrowserDocument, config: SiteConfig) -> Self {
        let page = Page {
            intersection: intersection_supported(&window),
            window,
            lookup: Rc::new(lookup),
            config,
        };
        if !page.intersection {
            warn!("IntersectionObserver unavailable; scroll animations and lazy images are off");
        }

        let mut controller = PageController::default();
        let wiring: [(&str, fn(&mut PageController, &Page) -> Result<()>); 11] = [
            ("navbar", Self::wire_navbar),
            ("mobile menu", Self::wire_mobile_menu),
            ("anchor links", Self::wire_anchors),
            ("fade-in", Self::wire_fade_in),
            ("parallax", Self::wire_parallax),
            ("newsletter", Self::wire_newsletter),
            ("modals", Self::wire_modals),
            ("hover lift", Self::wire_hover),
            ("reveal", Self::wire_reveal),
            ("lazy images", Self::wire_lazy_images),
            ("page load", Self::wire_page_load),
        ];
        for (feature, wire) in wiring {
            if let Err(e) = wire(&mut controller, &page) {
                warn!("Could not wire {}: {}", feature, e);
            }
        }

        debug!(
            "Wired {} listeners and {} observers",
            controller.listeners.len(),
            controller.observers.len()
        );
        controller
    }

    fn wire_navbar(&mut self, page: &Page) -> Result<()> {
        let Some(navbar) = page.lookup.element_by_id(NAVBAR_ID) else {
            debug!("No #{}, navbar scroll state off", NAVBAR_ID);
            return Ok(());
        };
        let threshold = page.config.scroll_threshold;

        // Covers pages opened mid-scroll.
        navbar::apply_scroll_state(&navbar, scroll_y(&page.window), threshold);

        let window = page.window.clone();
        self.listeners.push(EventListener::new(&page.window, "scroll", move |_| {
            navbar::apply_scroll_state(&navbar, scroll_y(&window), threshold);
        }));
        Ok(())
    }

    fn wire_mobile_menu(&mut self, page: &Page) -> Result<()> {
        let button = page.lookup.element_by_id(MOBILE_MENU_BUTTON_ID);
        let panel = page.lookup.element_by_id(MOBILE_MENU_ID);
        let (Some(button), Some(panel)) = (button, panel) else {
            debug!("Mobile menu markup missing, menu toggle off");
            return Ok(());
        };

        let menu = Rc::new(MobileMenu::new(button.clone(), panel));
        {
            let menu = menu.clone();
            self.listeners
                .push(EventListener::new(button.html(), "click", move |_| menu.toggle()));
        }
        for link in menu.links() {
            let menu = menu.clone();
            self.listeners
                .push(EventListener::new(link.html(), "click", move |_| menu.close()));
        }
        Ok(())
    }

    fn wire_anchors(&mut self, page: &Page) -> Result<()> {
        for anchor in page.lookup.select_all(ANCHOR_LINKS) {
            let lookup = page.lookup.clone();
            let link = anchor.clone();
            self.listeners.push(EventListener::new_with_options(
                anchor.html(),
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let href = link.attribute(HREF_ATTR).unwrap_or_default();
                    if follow_anchor(&*lookup, &href).suppresses_default() {
                        event.prevent_default();
                    }
                },
            ));
        }
        Ok(())
    }

    fn wire_fade_in(&mut self, page: &Page) -> Result<()> {
        // Delays are set even without an observer; they only matter once a card animates.
        entrance::apply_stagger(&*page.lookup, page.config.stagger_step_ms);

        let Some(targets) = observable(entrance::fade_in_targets(&*page.lookup), page.intersection)
        else {
            return Ok(());
        };

        let mut fade = FadeIn::new(targets.clone());
        let observer = Observer::new(Some(page.config.intersection_threshold), move |card, hit| {
            fade.on_intersection(card, hit)
        })?;
        for target in &targets {
            observer.observe(target);
        }
        self.observers.push(observer);
        Ok(())
    }

    fn wire_parallax(&mut self, page: &Page) -> Result<()> {
        let prefers_reduced = media_matches(&page.window, REDUCED_MOTION_QUERY);
        if !motion_allowed(page.config.reduce_motion, prefers_reduced) {
            debug!("Reduced motion requested, parallax off");
            return Ok(());
        }
        let Some(parallax) = Parallax::locate(&*page.lookup, ParallaxRates::from(&page.config))
        else {
            debug!("No parallax layers on this page");
            return Ok(());
        };

        let update: Rc<dyn Fn()> = {
            let window = page.window.clone();
            Rc::new(move || parallax.update(scroll_y(&window), viewport_height(&window)))
        };
        let scheduler = Rc::new(FrameScheduler::new());
        let frame_handle: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

        self.listeners.push(EventListener::new(&page.window, "scroll", move |_| {
            if !scheduler.request_update() {
                return;
            }
            let (scheduler, update, slot) = (scheduler.clone(), update.clone(), frame_handle.clone());
            let handle = request_animation_frame(move |_| {
                slot.borrow_mut().take();
                scheduler.flush(|| update());
            });
            *frame_handle.borrow_mut() = Some(handle);
        }));
        Ok(())
    }

    fn wire_newsletter(&mut self, page: &Page) -> Result<()> {
        let Some(form) = page.lookup.element_by_id(NEWSLETTER_FORM_ID) else {
            debug!("No #{}, newsletter off", NEWSLETTER_FORM_ID);
            return Ok(());
        };
        let success = page.lookup.element_by_id(NEWSLETTER_SUCCESS_ID);
        let newsletter = Rc::new(Newsletter::new(form.clone(), success));
        let reset_ms = page.config.newsletter_reset_ms;

        self.listeners.push(EventListener::new_with_options(
            form.html(),
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                if newsletter.submit() == SubmitOutcome::Accepted {
                    debug!("Newsletter signup shown, resetting in {} ms", reset_ms);
                    let newsletter = newsletter.clone();
                    Timeout::new(reset_ms, move || {
                        newsletter.restore();
                    })
                    .forget();
                }
            },
        ));
        Ok(())
    }

    fn wire_modals(&mut self, page: &Page) -> Result<()> {
        let Some(body) = page.lookup.body() else {
            return Ok(());
        };
        let modals = Rc::new(Modals::new(body, page.lookup.select_all(MODALS)));

        for binding in MODAL_BINDINGS {
            let Some(modal) = page.lookup.element_by_id(binding.modal_id) else {
                debug!("No #{}", binding.modal_id);
                continue;
            };
            if let Some(trigger) = page.lookup.element_by_id(binding.trigger_id) {
                let (modals, modal) = (modals.clone(), modal.clone());
                self.listeners
                    .push(EventListener::new(trigger.html(), "click", move |_| modals.open(&modal)));
            }
            if let Some(close) = page.lookup.element_by_id(binding.close_id) {
                let (modals, modal) = (modals.clone(), modal.clone());
                self.listeners
                    .push(EventListener::new(close.html(), "click", move |_| modals.close(&modal)));
            }
        }

        for modal in modals.modals() {
            let (backdrop, modals) = (modal.clone(), modals.clone());
            self.listeners
                .push(EventListener::new(modal.html(), "click", move |event: &Event| {
                    let target = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(DomElement::from_element);
                    modals.on_backdrop_click(&backdrop, target.as_ref());
                }));
        }

        self.listeners.push(EventListener::new(
            page.lookup.document(),
            "keydown",
            move |event: &Event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                    modals.on_key(&key.key());
                }
            },
        ));
        Ok(())
    }

    fn wire_hover(&mut self, page: &Page) -> Result<()> {
        if !HoverLift::enabled(media_matches(&page.window, COARSE_POINTER_QUERY)) {
            debug!("Coarse pointer, hover lift off");
            return Ok(());
        }
        let lift = Rc::new(HoverLift::new(page.config.hover_z_index.clone()));
        for card in page.lookup.select_all(HOVER_LIFT_CARDS) {
            let (enter, raised) = (lift.clone(), card.clone());
            self.listeners
                .push(EventListener::new(card.html(), "mouseenter", move |_| enter.enter(&raised)));
            let (leave, lowered) = (lift.clone(), card.clone());
            self.listeners
                .push(EventListener::new(card.html(), "mouseleave", move |_| leave.leave(&lowered)));
        }
        Ok(())
    }

    fn wire_reveal(&mut self, page: &Page) -> Result<()> {
        let Some(targets) = observable(entrance::reveal_targets(&*page.lookup), page.intersection)
        else {
            return Ok(());
        };

        let mut reveal = Reveal::new(targets.clone());
        let observer = Observer::new(Some(page.config.intersection_threshold), move |el, hit| {
            let Some(delay) = reveal.on_intersection(el, hit) else {
                return false;
            };
            let el = el.clone();
            Timeout::new(delay, move || {
                entrance::reveal(&el);
            })
            .forget();
            true
        })?;
        for target in &targets {
            observer.observe(target);
        }
        self.observers.push(observer);
        Ok(())
    }

    fn wire_lazy_images(&mut self, page: &Page) -> Result<()> {
        let Some(images) = observable(lazy_images(&*page.lookup), page.intersection) else {
            return Ok(());
        };

        let mut lazy = LazyImages::new(images.clone());
        let observer = Observer::new(None, move |img, hit| lazy.on_intersection(img, hit))?;
        for image in &images {
            observer.observe(image);
        }
        self.observers.push(observer);
        Ok(())
    }

    fn wire_page_load(&mut self, page: &Page) -> Result<()> {
        let Some(body) = page.lookup.body() else {
            return Ok(());
        };
        if ReadyState::of(page.lookup.document()) == ReadyState::Complete {
            mark_loaded(&body);
            return Ok(());
        }
        self.listeners
            .push(EventListener::new(&page.window, "load", move |_| mark_loaded(&body)));
        Ok(())
    }
}
