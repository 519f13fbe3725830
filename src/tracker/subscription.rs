use std::fmt;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Guard for an event registration.
///
/// Releasing happens at most once, either through [`Subscription::cancel`] or
/// when the guard is dropped. Cancelling twice is a no-op.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    label: &'static str,
    release: Option<Release>,
}

impl Subscription {
    pub fn new(label: &'static str, release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release, used where the event source is
    /// unavailable (server rendering, coarse pointers).
    pub fn inert(label: &'static str) -> Self {
        Self {
            label,
            release: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("releasing {} subscription", self.label);
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Every subscription a mounted page holds, torn down together on unmount.
#[derive(Debug, Default)]
pub struct Subscriptions(Vec<Subscription>);

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.0.push(subscription);
    }

    pub fn active(&self) -> usize {
        self.0.iter().filter(|s| s.is_active()).count()
    }

    pub fn teardown(&mut self) {
        for subscription in self.0.iter_mut() {
            subscription.cancel();
        }
    }
}

impl FromIterator<Subscription> for Subscriptions {
    fn from_iter<I: IntoIterator<Item = Subscription>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counting(label: &'static str, counter: &Arc<AtomicUsize>) -> Subscription {
        let counter = counter.clone();
        Subscription::new(label, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let released = Arc::new(AtomicUsize::new(0));
        let mut sub = counting("scroll", &released);
        assert!(sub.is_active());

        sub.cancel();
        sub.cancel();
        assert!(!sub.is_active());
        drop(sub);

        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases() {
        let released = Arc::new(AtomicUsize::new(0));
        {
            let _sub = counting("pointer", &released);
        }
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inert_has_nothing_to_release() {
        let mut sub = Subscription::inert("pointer");
        assert!(!sub.is_active());
        sub.cancel();
        assert_eq!(sub.label(), "pointer");
    }

    #[test]
    fn test_teardown_all_twice() {
        let released = Arc::new(AtomicUsize::new(0));
        let mut subs: Subscriptions = ["scroll", "pointer", "visibility"]
            .into_iter()
            .map(|label| counting(label, &released))
            .collect();
        assert_eq!(subs.active(), 3);

        subs.teardown();
        subs.teardown();
        drop(subs);

        assert_eq!(released.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_repeated_mounts_do_not_accumulate() {
        // stand-in for a browser event target: live handlers keyed by id
        let listeners: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));

        let mount = |id: usize| {
            listeners.lock().unwrap().push(id);
            let listeners = listeners.clone();
            Subscription::new("scroll", move || {
                listeners.lock().unwrap().retain(|l| *l != id);
            })
        };

        for id in 0..5 {
            let mut subs = Subscriptions::new();
            subs.push(mount(id));
            assert_eq!(listeners.lock().unwrap().len(), 1);
            subs.teardown();
        }
        assert!(listeners.lock().unwrap().is_empty());
    }
}
