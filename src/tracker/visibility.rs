use std::collections::BTreeSet;
use std::str::FromStr;

use crate::config::{AnimationStyle, PageConfig};
use crate::section::Section;

/// Class applied to content whose section has not been revealed yet.
pub const HIDDEN_CLASS: &str = "opacity-0";

/// One intersection notification, as delivered by an `IntersectionObserver`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry<'a> {
    pub target_id: &'a str,
    pub is_intersecting: bool,
}

/// Sections that have intersected the viewport at least once. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet(BTreeSet<Section>);

impl RevealedSet {
    pub fn with_initial(section: Section) -> Self {
        Self(BTreeSet::from([section]))
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.0.iter().copied()
    }

    fn reveal(&mut self, section: Section) -> bool {
        self.0.insert(section)
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    sections: Vec<Section>,
    threshold: f64,
    revealed: RevealedSet,
}

impl VisibilityTracker {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            sections: config.sections.clone(),
            threshold: config.tracker.reveal_threshold,
            revealed: RevealedSet::with_initial(config.initial_section()),
        }
    }

    /// Area fraction to pass to the observer.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(section)
    }

    /// Applies a batch of notifications. Returns whether anything new was
    /// revealed. Entries that stopped intersecting never hide a section again.
    pub fn observe<'a, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = IntersectionEntry<'a>>,
    {
        let mut changed = false;
        for entry in entries.into_iter().filter(|e| e.is_intersecting) {
            let section = match Section::from_str(entry.target_id) {
                Ok(s) if self.sections.contains(&s) => s,
                _ => {
                    log::trace!("ignoring intersection for unknown target {:?}", entry.target_id);
                    continue;
                }
            };
            if self.revealed.reveal(section) {
                log::debug!("revealed section {section}");
                changed = true;
            }
        }
        changed
    }
}

/// Highest fixed delay step with a matching `delay-N00` class in `input.css`.
pub const MAX_DELAY_STEP: u8 = 6;

/// Entrance animation class for content in `section`, with an optional fixed
/// delay step (`delay-100` up to `delay-600`; larger steps are capped).
pub fn reveal_class(
    revealed: &RevealedSet,
    section: Section,
    animation: AnimationStyle,
    delay_step: Option<u8>,
) -> String {
    if !revealed.contains(section) {
        return HIDDEN_CLASS.to_string();
    }
    match delay_step {
        Some(step) if step > 0 => {
            format!("{} delay-{}00", animation.class(), step.min(MAX_DELAY_STEP))
        }
        _ => animation.class(),
    }
}

/// Inline style staggering the n-th card of a grid.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("animation-delay: {}ms", index as u64 * u64::from(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target_id: &str, is_intersecting: bool) -> IntersectionEntry<'_> {
        IntersectionEntry {
            target_id,
            is_intersecting,
        }
    }

    fn ids(tracker: &VisibilityTracker) -> Vec<Section> {
        tracker.revealed().iter().collect()
    }

    #[test]
    fn test_starts_with_home() {
        let tracker = VisibilityTracker::new(&PageConfig::default());
        assert_eq!(ids(&tracker), vec![Section::Home]);
        assert_eq!(tracker.threshold(), 0.1);
    }

    #[test]
    fn test_accumulates_in_any_order() {
        let mut a = VisibilityTracker::new(&PageConfig::default());
        assert!(a.observe([entry("projects", true)]));
        assert!(a.observe([entry("skills", true)]));

        let mut b = VisibilityTracker::new(&PageConfig::default());
        assert!(b.observe([entry("skills", true), entry("projects", true)]));

        let expected = vec![Section::Home, Section::Projects, Section::Skills];
        assert_eq!(ids(&a), expected);
        assert_eq!(a.revealed(), b.revealed());
    }

    #[test]
    fn test_leaving_viewport_keeps_reveal() {
        let mut tracker = VisibilityTracker::new(&PageConfig::default());
        tracker.observe([entry("projects", true)]);
        assert!(!tracker.observe([entry("projects", false)]));
        assert!(tracker.is_revealed(Section::Projects));

        // re-entering is a no-op
        assert!(!tracker.observe([entry("projects", true)]));
        assert_eq!(tracker.revealed().len(), 2);
    }

    #[test]
    fn test_non_intersecting_entries_do_not_reveal() {
        let mut tracker = VisibilityTracker::new(&PageConfig::default());
        assert!(!tracker.observe([entry("contact", false), entry("skills", false)]));
        assert_eq!(ids(&tracker), vec![Section::Home]);
    }

    #[test]
    fn test_unknown_targets_ignored() {
        let config = PageConfig {
            sections: vec![Section::Home, Section::Projects],
            ..Default::default()
        };
        let mut tracker = VisibilityTracker::new(&config);
        assert!(!tracker.observe([entry("", true), entry("footer", true), entry("skills", true)]));
        assert_eq!(ids(&tracker), vec![Section::Home]);
    }

    #[test]
    fn test_reveal_class() {
        let mut tracker = VisibilityTracker::new(&PageConfig::default());
        let revealed = tracker.revealed().clone();
        assert_eq!(
            reveal_class(&revealed, Section::Home, AnimationStyle::SlideUp, None),
            "animate-slide-up"
        );
        assert_eq!(
            reveal_class(&revealed, Section::Home, AnimationStyle::FadeIn, Some(3)),
            "animate-fade-in delay-300"
        );
        assert_eq!(
            reveal_class(&revealed, Section::Skills, AnimationStyle::SlideUp, Some(4)),
            HIDDEN_CLASS
        );

        tracker.observe([entry("skills", true)]);
        assert_eq!(
            reveal_class(tracker.revealed(), Section::Skills, AnimationStyle::ZoomIn, Some(0)),
            "animate-zoom-in"
        );
    }

    #[test]
    fn test_delay_step_is_capped() {
        let revealed = RevealedSet::with_initial(Section::Home);
        assert_eq!(
            reveal_class(&revealed, Section::Home, AnimationStyle::SlideUp, Some(6)),
            "animate-slide-up delay-600"
        );
        assert_eq!(
            reveal_class(&revealed, Section::Home, AnimationStyle::SlideUp, Some(9)),
            "animate-slide-up delay-600"
        );
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0, 100), "animation-delay: 0ms");
        assert_eq!(stagger_style(3, 150), "animation-delay: 450ms");
    }
}
