//! Leptos bindings for the page trackers.
//!
//! Every hook registers its browser subscription while the page is mounted and
//! hands back a [`Subscription`]; [`use_page_trackers`] tears them all down in
//! `on_cleanup` so a remount starts from a clean slate.

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_intersection_observer_with_options,
    use_media_query, use_window, UseEventListenerOptions, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use web_sys::{IntersectionObserverEntry, PointerEvent};

use crate::config::{AnimationStyle, PageConfig};
use crate::section::Section;
use crate::tracker::{
    reveal_class, IntersectionEntry, Layout, MenuToggle, PointerState, PointerTracker, Rect,
    RevealedSet, ScrollState, ScrollTracker, Subscription, Subscriptions, VisibilityTracker,
};

/// Element handle of every configured section, in page order.
#[derive(Clone)]
pub struct SectionRefs(Vec<(Section, NodeRef<html::Section>)>);

impl SectionRefs {
    pub fn new(sections: &[Section]) -> Self {
        Self(sections.iter().map(|s| (*s, NodeRef::new())).collect())
    }

    /// Handle for a section that is not configured is never mounted, so its
    /// rect reads as missing.
    pub fn get(&self, section: Section) -> NodeRef<html::Section> {
        self.0
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, node)| *node)
            .unwrap_or_else(NodeRef::new)
    }

    fn iter(&self) -> impl Iterator<Item = &(Section, NodeRef<html::Section>)> {
        self.0.iter()
    }
}

struct DomLayout<'a> {
    refs: &'a SectionRefs,
}

impl Layout for DomLayout<'_> {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn document_height(&self) -> f64 {
        document()
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default()
    }

    fn section_rect(&self, section: Section) -> Option<Rect> {
        let el = self.refs.get(section).get_untracked()?;
        let rect = el.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }
}

pub fn use_scroll_tracker(
    config: &PageConfig,
    refs: SectionRefs,
) -> (Signal<ScrollState>, Subscription) {
    let tracker = StoredValue::new(ScrollTracker::new(config));
    let (state, set_state) = signal(tracker.with_value(|t| t.state()));

    let refresh = move || {
        let layout = DomLayout { refs: &refs };
        if let Some(next) = tracker.try_update_value(|t| t.on_scroll(&layout)) {
            set_state.set(next);
        }
    };

    // pick up the offset of a page reloaded mid-scroll
    Effect::new({
        let refresh = refresh.clone();
        move |_| refresh()
    });

    let stop = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| refresh(),
        UseEventListenerOptions::default().passive(true),
    );
    (state.into(), Subscription::new("scroll", stop))
}

pub fn use_pointer_tracker(config: &PageConfig) -> (Signal<PointerState>, Subscription) {
    if !config.tracker.pointer_glow {
        return (
            Signal::stored(PointerState::default()),
            Subscription::inert("pointer"),
        );
    }

    let has_fine_pointer = use_media_query("(pointer: fine)");
    let tracker = StoredValue::new(PointerTracker::new(
        config,
        has_fine_pointer.get_untracked(),
    ));
    let (state, set_state) = signal(PointerState::default());

    Effect::new(move |_| {
        let fine = has_fine_pointer.get();
        tracker.update_value(|t| t.set_enabled(fine));
    });

    let stop = use_event_listener(use_window(), ev::pointermove, move |e: PointerEvent| {
        let moved = tracker
            .try_update_value(|t| t.on_move(f64::from(e.client_x()), f64::from(e.client_y())))
            .flatten();
        if let Some(pointer) = moved {
            set_state.set(pointer);
        }
    });
    (state.into(), Subscription::new("pointer", stop))
}

pub fn use_visibility_tracker(
    config: &PageConfig,
    refs: &SectionRefs,
) -> (Signal<RevealedSet>, Subscription) {
    let tracker = StoredValue::new(VisibilityTracker::new(config));
    let (revealed, set_revealed) = signal(tracker.with_value(|t| t.revealed().clone()));
    let threshold = tracker.with_value(|t| t.threshold());

    let stops = refs
        .iter()
        .map(|(_, node)| {
            let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
                *node,
                move |entries: Vec<IntersectionObserverEntry>, _| {
                    let batch = entries
                        .iter()
                        .map(|e| (e.target().id(), e.is_intersecting()))
                        .collect::<Vec<_>>();
                    let grew = tracker
                        .try_update_value(|t| {
                            t.observe(batch.iter().map(|(id, is_intersecting)| IntersectionEntry {
                                target_id: id,
                                is_intersecting: *is_intersecting,
                            }))
                        })
                        .unwrap_or(false);
                    if grew {
                        set_revealed.set(tracker.with_value(|t| t.revealed().clone()));
                    }
                },
                UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
            );
            stop
        })
        .collect::<Vec<_>>();

    let subscription = Subscription::new("visibility", move || {
        for stop in stops.iter() {
            stop();
        }
    });
    (revealed.into(), subscription)
}

#[derive(Clone, Copy)]
pub struct MenuControls {
    menu: StoredValue<MenuToggle>,
    set_open: WriteSignal<bool>,
    pub open: ReadSignal<bool>,
}

impl MenuControls {
    pub fn toggle(&self) {
        if let Some(open) = self.menu.try_update_value(|m| m.toggle()) {
            self.set_open.set(open);
        }
    }

    pub fn navigate(&self) {
        self.menu.update_value(|m| m.navigate());
        self.set_open.set(false);
    }
}

pub fn use_menu() -> MenuControls {
    let menu = StoredValue::new(MenuToggle::default());
    let (open, set_open) = signal(false);
    MenuControls {
        menu,
        set_open,
        open,
    }
}

/// Read side of the visibility tracker, shared with every section through
/// context.
#[derive(Clone, Copy)]
pub struct Reveal {
    revealed: Signal<RevealedSet>,
    animation: AnimationStyle,
}

impl Reveal {
    /// Entrance animation class for `section`, tracked.
    pub fn class(&self, section: Section, delay_step: Option<u8>) -> String {
        let animation = self.animation;
        self.revealed
            .with(|r| reveal_class(r, section, animation, delay_step))
    }
}

pub fn use_reveal() -> Reveal {
    expect_context::<Reveal>()
}

#[derive(Clone, Copy)]
pub struct PageTrackers {
    pub scroll: Signal<ScrollState>,
    pub pointer: Signal<PointerState>,
    pub menu: MenuControls,
}

/// Mounts every tracker for the page and provides [`Reveal`] to the sections.
pub fn use_page_trackers(config: &PageConfig, refs: &SectionRefs) -> PageTrackers {
    let (scroll, scroll_sub) = use_scroll_tracker(config, refs.clone());
    let (pointer, pointer_sub) = use_pointer_tracker(config);
    let (revealed, visibility_sub) = use_visibility_tracker(config, refs);
    let menu = use_menu();

    provide_context(Reveal {
        revealed,
        animation: config.animation,
    });

    let subscriptions: Subscriptions = [scroll_sub, pointer_sub, visibility_sub]
        .into_iter()
        .collect();
    on_cleanup(move || {
        let mut subscriptions = subscriptions;
        subscriptions.teardown();
    });

    PageTrackers {
        scroll,
        pointer,
        menu,
    }
}
