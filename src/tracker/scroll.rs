use crate::config::PageConfig;
use crate::section::Section;

/// Vertical extent of an element relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Layout metrics read once per scroll event.
pub trait Layout {
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
    /// `None` while the section has no rendered element.
    fn section_rect(&self, section: Section) -> Option<Rect>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub progress_percent: f64,
    pub active_section: Section,
}

impl ScrollState {
    pub fn new(active_section: Section) -> Self {
        Self {
            scroll_offset: 0.0,
            progress_percent: 0.0,
            active_section,
        }
    }
}

/// Percentage of the scrollable height covered by `offset`.
///
/// A document no taller than the viewport has nothing to scroll and always
/// reports `0`.
pub fn scroll_progress(offset: f64, scrollable_height: f64, clamp: bool) -> f64 {
    if !(scrollable_height.is_finite() && scrollable_height > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    let percent = offset * 100.0 / scrollable_height;
    if clamp {
        percent.clamp(0.0, 100.0)
    } else {
        percent
    }
}

/// First section, in the given order, whose rect crosses the detection line.
pub fn detect_active_section<F>(sections: &[Section], line: f64, rect_of: F) -> Option<Section>
where
    F: Fn(Section) -> Option<Rect>,
{
    sections
        .iter()
        .copied()
        .find(|s| rect_of(*s).is_some_and(|r| r.crosses(line)))
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    detection_line: f64,
    clamp: bool,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            sections: config.sections.clone(),
            detection_line: config.tracker.detection_line_px,
            clamp: config.tracker.clamp_progress,
            state: ScrollState::new(config.initial_section()),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn on_scroll(&mut self, layout: &impl Layout) -> ScrollState {
        let offset = layout.scroll_offset();
        let scrollable = layout.document_height() - layout.viewport_height();
        let progress = scroll_progress(offset, scrollable, self.clamp);

        let active = detect_active_section(&self.sections, self.detection_line, |s| {
            layout.section_rect(s)
        })
        .unwrap_or(self.state.active_section);
        if active != self.state.active_section {
            log::debug!("active section {} -> {}", self.state.active_section, active);
        }

        self.state = ScrollState {
            scroll_offset: offset,
            progress_percent: progress,
            active_section: active,
        };
        log::trace!("scroll {offset}px ({progress:.1}%)");
        self.state
    }
}
