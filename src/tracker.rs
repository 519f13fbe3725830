//! Browser-independent state for the page: scroll progress and active section,
//! pointer glow, reveal-on-scroll latch and the mobile menu flag.
//!
//! Each tracker owns its own state and knows nothing about the others. The
//! `app` module feeds them browser events and holds the [`Subscription`]s that
//! keep those events flowing.

mod menu;
mod pointer;
mod scroll;
mod subscription;
mod visibility;

pub use menu::MenuToggle;
pub use pointer::{glow_background, PointerState, PointerTracker};
pub use scroll::{detect_active_section, scroll_progress, Layout, Rect, ScrollState, ScrollTracker};
pub use subscription::{Subscription, Subscriptions};
pub use visibility::{
    reveal_class, stagger_style, IntersectionEntry, RevealedSet, VisibilityTracker, HIDDEN_CLASS,
    MAX_DELAY_STEP,
};
