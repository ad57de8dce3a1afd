use log::Level;
use serde::Deserialize;

use crate::error::{Result, SiteError};

#[cfg(debug_assertions)]
pub fn default_log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> Level {
    Level::Info
}

/// Tunables for the page behavior, read from the optional
/// `<script type="application/json" id="siteConfig">` block.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset in pixels past which the navbar counts as scrolled.
    pub scroll_threshold: f64,
    /// Visible fraction that triggers fade-in and reveal animations.
    pub intersection_threshold: f64,
    pub stagger_step_ms: u32,
    pub newsletter_reset_ms: u32,
    pub hero_translate_rate: f64,
    pub hero_scale_rate: f64,
    pub process_translate_rate: f64,
    pub hover_z_index: String,
    /// Skip parallax when the visitor asks for reduced motion.
    pub reduce_motion: bool,
    pub log_level: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            scroll_threshold: 100.0,
            intersection_threshold: 0.1,
            stagger_step_ms: 100,
            newsletter_reset_ms: 5000,
            hero_translate_rate: 0.3,
            hero_scale_rate: 0.0002,
            process_translate_rate: 0.2,
            hover_z_index: "10".to_string(),
            reduce_motion: false,
            log_level: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses an optional config block. A broken block yields the defaults
    /// together with the error so it can be logged once logging is up.
    pub fn load(raw: Option<&str>) -> (Self, Option<SiteError>) {
        match raw.map(SiteConfig::from_json) {
            None => (SiteConfig::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (SiteConfig::default(), Some(e)),
        }
    }

    pub fn level(&self) -> Result<Level> {
        match &self.log_level {
            None => Ok(default_log_level()),
            Some(name) => name
                .parse::<Level>()
                .map_err(|_| SiteError::LogLevel(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_block_gives_defaults() {
        let (config, error) = SiteConfig::load(None);
        assert_eq!(config, SiteConfig::default());
        assert!(error.is_none());
        assert_eq!(config.scroll_threshold, 100.0);
        assert_eq!(config.newsletter_reset_ms, 5000);
    }

    #[test]
    fn partial_block_overrides_only_named_fields() {
        let (config, error) =
            SiteConfig::load(Some(r#"{ "scroll_threshold": 250, "log_level": "warn" }"#));

        assert!(error.is_none());
        assert_eq!(config.scroll_threshold, 250.0);
        assert_eq!(config.stagger_step_ms, 100);
        assert_eq!(config.level().ok(), Some(Level::Warn));
    }

    #[test]
    fn malformed_block_falls_back_to_defaults() {
        let (config, error) = SiteConfig::load(Some("{ not json"));

        assert_eq!(config, SiteConfig::default());
        assert!(matches!(error, Some(SiteError::Config(_))));
    }

    #[test]
    fn blank_block_is_treated_as_absent() {
        assert_eq!(SiteConfig::from_json("  \n").ok(), Some(SiteConfig::default()));
    }

    #[test]
    fn unknown_log_level_is_reported() {
        let config = SiteConfig {
            log_level: Some("chatty".into()),
            ..SiteConfig::default()
        };
        assert!(matches!(config.level(), Err(SiteError::LogLevel(name)) if name == "chatty"));
    }
}
