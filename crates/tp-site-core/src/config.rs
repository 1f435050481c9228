//! Site configuration.
//!
//! Every field has a default, so the page works with no configuration at all.
//! A page may override any subset by embedding JSON in
//! `<script id="site-config" type="application/json">`.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::gallery::{self, GalleryImage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Height of the fixed header subtracted from smooth-scroll targets.
    pub header_offset: f64,
    /// Distance below the viewport top used to decide the active section.
    pub scroll_lookahead: f64,
    pub toast_duration_ms: u32,
    pub submit_delay_ms: u32,
    pub animation_restart_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_selector: String,
    pub theme_storage_key: String,
    pub images: Vec<GalleryImage>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_lookahead: 100.0,
            toast_duration_ms: 5_000,
            submit_delay_ms: 1_000,
            animation_restart_ms: 10,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            reveal_selector: ".card, .hero-content, .stats".to_owned(),
            theme_storage_key: "theme".to_owned(),
            images: gallery::default_images(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.images.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_uses_defaults() {
        let config = SiteConfig::from_json("  ").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.images.len(), 4);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{"toastDurationMs": 2000}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 2_000);
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn empty_image_list_is_rejected() {
        let err = SiteConfig::from_json(r#"{"images": []}"#).unwrap_err();
        assert!(matches!(err, SiteError::EmptyGallery));
    }
}
