use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::section::Section;

/// Vertical offset from the top of the viewport that decides which section is
/// active. Sits just below the fixed navigation bar.
pub const DEFAULT_DETECTION_LINE_PX: f64 = 100.0;
/// Fraction of a section's area that must be inside the viewport before it is
/// revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown animation style: {0}")]
    UnknownAnimation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub detection_line_px: f64,
    pub reveal_threshold: f64,
    pub clamp_progress: bool,
    pub pointer_glow: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            detection_line_px: DEFAULT_DETECTION_LINE_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            clamp_progress: true,
            pointer_glow: true,
        }
    }
}

impl TrackerConfig {
    /// A non-finite detection line or threshold falls back to its default; the
    /// threshold is clamped to `[0, 1]` as `IntersectionObserver` requires.
    pub fn normalized(mut self) -> Self {
        if !self.detection_line_px.is_finite() {
            log::warn!(
                "detection line {} is not finite, using {DEFAULT_DETECTION_LINE_PX}",
                self.detection_line_px
            );
            self.detection_line_px = DEFAULT_DETECTION_LINE_PX;
        }
        if !self.reveal_threshold.is_finite() {
            log::warn!(
                "reveal threshold {} is not finite, using {DEFAULT_REVEAL_THRESHOLD}",
                self.reveal_threshold
            );
            self.reveal_threshold = DEFAULT_REVEAL_THRESHOLD;
        } else if !(0.0..=1.0).contains(&self.reveal_threshold) {
            let clamped = self.reveal_threshold.clamp(0.0, 1.0);
            log::warn!("reveal threshold {} clamped to {clamped}", self.reveal_threshold);
            self.reveal_threshold = clamped;
        }
        self
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    #[default]
    Midnight,
    Ember,
    Forest,
    Aurora,
    Mono,
}

impl Theme {
    /// Root class; `input.css` maps it to the palette's custom properties.
    pub fn class(self) -> String {
        format!("theme-{}", self.as_ref())
    }

    /// Accent used for highlighted navigation links and icons.
    pub fn accent_text(self) -> &'static str {
        match self {
            Theme::Midnight => "text-blue-400",
            Theme::Ember => "text-orange-400",
            Theme::Forest => "text-emerald-400",
            Theme::Aurora => "text-fuchsia-400",
            Theme::Mono => "text-gray-100",
        }
    }

    /// Color at the center of the pointer glow.
    pub fn glow_rgba(self) -> &'static str {
        match self {
            Theme::Midnight => "rgba(59, 130, 246, 0.06)",
            Theme::Ember => "rgba(249, 115, 22, 0.06)",
            Theme::Forest => "rgba(16, 185, 129, 0.06)",
            Theme::Aurora => "rgba(217, 70, 239, 0.06)",
            Theme::Mono => "rgba(255, 255, 255, 0.04)",
        }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AnimationStyle {
    #[default]
    SlideUp,
    FadeIn,
    ZoomIn,
    BlurIn,
}

impl AnimationStyle {
    pub fn class(self) -> String {
        format!("animate-{}", self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: Theme,
    pub animation: AnimationStyle,
    pub sections: Vec<Section>,
    pub tracker: TrackerConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            animation: AnimationStyle::default(),
            sections: Section::ALL.to_vec(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl PageConfig {
    /// Drops duplicate sections, keeping the first occurrence, and falls back to
    /// the full list when none are configured. Tracker constants are brought
    /// into a range the browser accepts.
    pub fn normalized(mut self) -> Self {
        self.tracker = self.tracker.normalized();
        let mut seen = Vec::with_capacity(self.sections.len());
        self.sections.retain(|s| {
            if seen.contains(s) {
                false
            } else {
                seen.push(*s);
                true
            }
        });
        if self.sections.is_empty() {
            self.sections = Section::ALL.to_vec();
        }
        self
    }

    /// Section whose content is visible before any observation happens.
    pub fn initial_section(&self) -> Section {
        self.sections.first().copied().unwrap_or(Section::Home)
    }

    pub fn try_with_overrides(
        mut self,
        theme: Option<&str>,
        animation: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = theme {
            self.theme =
                Theme::from_str(name).map_err(|_| ConfigError::UnknownTheme(name.to_string()))?;
        }
        if let Some(name) = animation {
            self.animation = AnimationStyle::from_str(name)
                .map_err(|_| ConfigError::UnknownAnimation(name.to_string()))?;
        }
        Ok(self)
    }

    /// Applies the `PORTFOLIO_THEME` / `PORTFOLIO_ANIMATION` values captured at
    /// build time. An invalid override is logged and ignored.
    pub fn with_build_overrides(self) -> Self {
        self.with_overrides(option_env!("PORTFOLIO_THEME"), option_env!("PORTFOLIO_ANIMATION"))
    }

    pub fn with_overrides(self, theme: Option<&str>, animation: Option<&str>) -> Self {
        match self.clone().try_with_overrides(theme, animation) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page override: {e}");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.theme, Theme::Midnight);
        assert_eq!(config.animation, AnimationStyle::SlideUp);
        assert_eq!(config.sections, Section::ALL.to_vec());
        assert_eq!(config.tracker.detection_line_px, 100.0);
        assert_eq!(config.tracker.reveal_threshold, 0.1);
        assert!(config.tracker.clamp_progress);
        assert_eq!(config.initial_section(), Section::Home);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{"theme":"ember","tracker":{"detection_line_px":64}}"#)
                .unwrap();
        assert_eq!(config.theme, Theme::Ember);
        assert_eq!(config.animation, AnimationStyle::SlideUp);
        assert_eq!(config.tracker.detection_line_px, 64.0);
        assert_eq!(config.tracker.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.sections.len(), 5);
    }

    #[test]
    fn test_normalized_sections() {
        let config = PageConfig {
            sections: vec![Section::Home, Section::Skills, Section::Home],
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.sections, vec![Section::Home, Section::Skills]);

        let empty = PageConfig {
            sections: vec![],
            ..Default::default()
        }
        .normalized();
        assert_eq!(empty.sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_tracker_constants_normalized() {
        let mut config = PageConfig::default();
        config.tracker.reveal_threshold = 1.5;
        config.tracker.detection_line_px = -40.0;
        let config = config.normalized();
        assert_eq!(config.tracker.reveal_threshold, 1.0);
        // a line above the viewport is unusual but finite
        assert_eq!(config.tracker.detection_line_px, -40.0);

        let tracker = TrackerConfig {
            detection_line_px: f64::INFINITY,
            reveal_threshold: f64::NAN,
            ..Default::default()
        }
        .normalized();
        assert_eq!(tracker.detection_line_px, DEFAULT_DETECTION_LINE_PX);
        assert_eq!(tracker.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);

        let negative = TrackerConfig {
            reveal_threshold: -0.2,
            ..Default::default()
        }
        .normalized();
        assert_eq!(negative.reveal_threshold, 0.0);
    }

    #[test]
    fn test_overrides() {
        let config = PageConfig::default()
            .try_with_overrides(Some("aurora"), Some("zoom-in"))
            .unwrap();
        assert_eq!(config.theme, Theme::Aurora);
        assert_eq!(config.animation, AnimationStyle::ZoomIn);

        let err = PageConfig::default()
            .try_with_overrides(Some("neon"), None)
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownTheme("neon".to_string()));

        // invalid overrides are dropped as a whole
        let kept = PageConfig::default().with_overrides(Some("forest"), Some("wobble"));
        assert_eq!(kept, PageConfig::default());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Theme::Midnight.class(), "theme-midnight");
        assert_eq!(AnimationStyle::BlurIn.class(), "animate-blur-in");
        for theme in Theme::iter() {
            assert!(theme.glow_rgba().starts_with("rgba("));
        }
    }
}
