// Ids, classes and attributes the page markup is expected to carry.
// Every lookup is optional: a missing element just turns its feature off.

pub const NAVBAR_ID: &str = "navbar";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const NEWSLETTER_SUCCESS_ID: &str = "newsletterSuccess";
pub const SITE_CONFIG_ID: &str = "siteConfig";

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEALED_CLASS: &str = "revealed";
pub const LOADED_CLASS: &str = "loaded";

pub const MENU_BARS: &str = "span";
pub const MENU_LINKS: &str = "a";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const EMAIL_INPUT: &str = "input[type=\"email\"]";

pub const FADE_IN_TARGETS: &str = ".about-image-card, .about-text-card, .service-card, \
    .book-card, .testimonial-card, .newsletter-card, .essays-card, .contact-left, .contact-card";

/// Card groups whose members animate in one after another.
pub const STAGGERED_GROUPS: [&str; 3] = [".service-card", ".book-card", ".testimonial-card"];

pub const HOVER_LIFT_CARDS: &str = ".book-card";

pub const HERO_SECTION: &str = ".hero";
pub const HERO_BACKGROUND: &str = ".hero-bg img";
pub const PROCESS_SECTION: &str = ".process";
pub const PROCESS_BACKGROUND: &str = ".process-bg img";

pub const MODALS: &str = ".modal";

pub const REVEAL_TARGETS: &str = "[data-reveal]";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";

pub const LAZY_IMAGES: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const SRC_ATTR: &str = "src";
pub const HREF_ATTR: &str = "href";

pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// A trigger button, the dialog it opens and the control that closes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalBinding {
    pub trigger_id: &'static str,
    pub modal_id: &'static str,
    pub close_id: &'static str,
}

pub const MODAL_BINDINGS: [ModalBinding; 2] = [
    ModalBinding {
        trigger_id: "privacyBtn",
        modal_id: "privacyModal",
        close_id: "privacyClose",
    },
    ModalBinding {
        trigger_id: "termsBtn",
        modal_id: "termsModal",
        close_id: "termsClose",
    },
];
