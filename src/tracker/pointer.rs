use crate::config::PageConfig;

/// Pointer position in viewport pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

/// Republishes pointer coordinates for the decorative glow.
///
/// Coordinates are passed through untouched, including positions outside the
/// viewport. A disabled tracker (touch-only devices, or glow turned off) keeps
/// its last state.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    enabled: bool,
    state: PointerState,
}

impl PointerTracker {
    pub fn new(config: &PageConfig, has_fine_pointer: bool) -> Self {
        Self {
            enabled: config.tracker.pointer_glow && has_fine_pointer,
            state: PointerState::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn on_move(&mut self, x: f64, y: f64) -> Option<PointerState> {
        if !self.enabled {
            return None;
        }
        self.state = PointerState { x, y };
        Some(self.state)
    }
}

pub fn glow_background(pointer: PointerState, rgba: &str) -> String {
    format!(
        "radial-gradient(800px circle at {}px {}px, {}, transparent 40%)",
        pointer.x, pointer.y, rgba
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_pass_through() {
        let mut tracker = PointerTracker::new(&PageConfig::default(), true);
        assert!(tracker.is_enabled());
        assert_eq!(tracker.on_move(12.0, 480.5), Some(PointerState { x: 12.0, y: 480.5 }));

        // leaving the viewport is not an error
        let outside = tracker.on_move(-30.0, 5000.0).unwrap();
        assert_eq!(outside, PointerState { x: -30.0, y: 5000.0 });
        assert_eq!(tracker.state(), outside);
    }

    #[test]
    fn test_disabled_without_fine_pointer() {
        let mut tracker = PointerTracker::new(&PageConfig::default(), false);
        assert!(!tracker.is_enabled());
        assert_eq!(tracker.on_move(10.0, 10.0), None);
        assert_eq!(tracker.state(), PointerState::default());

        tracker.set_enabled(true);
        assert!(tracker.on_move(10.0, 10.0).is_some());
    }

    #[test]
    fn test_disabled_by_config() {
        let mut config = PageConfig::default();
        config.tracker.pointer_glow = false;
        let tracker = PointerTracker::new(&config, true);
        assert!(!tracker.is_enabled());
    }

    #[test]
    fn test_glow_background() {
        let bg = glow_background(PointerState { x: 40.0, y: 75.5 }, "rgba(0, 0, 0, 0.1)");
        assert_eq!(
            bg,
            "radial-gradient(800px circle at 40px 75.5px, rgba(0, 0, 0, 0.1), transparent 40%)"
        );
    }
}
