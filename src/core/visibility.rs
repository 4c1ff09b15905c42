//! Viewport visibility tracking
//!
//! [`VisibilityObserver`] owns the per-element [`VisibilityState`] and the
//! platform watcher that feeds it. The watcher is released when the observer
//! is dropped, and reports that arrive after that point never reach the
//! subscriber.

use std::cell::RefCell;
use std::rc::Rc;

/// Observer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible to count as intersecting
    pub threshold: f64,
    /// CSS margin applied to the viewport before testing, e.g. `"0px 0px -50px 0px"`
    pub root_margin: String,
    /// Latch on first visibility and stop observing
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            once: false,
        }
    }
}

impl VisibilityOptions {
    pub fn once() -> Self {
        Self {
            once: true,
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }
}

/// What the platform should do with its watcher after a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverAction {
    Continue,
    Release,
}

/// Live visibility of one element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisibilityState {
    pub is_intersecting: bool,
    pub has_been_seen: bool,
    /// 0 when the element's top sits at the viewport bottom, 100 once its
    /// bottom has passed the viewport top
    pub scroll_progress: f64,
}

impl VisibilityState {
    /// Apply an intersection report.
    ///
    /// In one-shot mode the state is frozen once the element has been seen.
    pub fn record_intersection(&mut self, intersecting: bool, once: bool) -> ObserverAction {
        if once && self.has_been_seen {
            return ObserverAction::Release;
        }

        self.is_intersecting = intersecting;
        if once {
            self.has_been_seen |= intersecting;
        } else {
            self.has_been_seen = intersecting;
        }

        if once && self.has_been_seen {
            ObserverAction::Release
        } else {
            ObserverAction::Continue
        }
    }

    pub fn record_scroll(&mut self, top: f64, height: f64, viewport_height: f64) {
        self.scroll_progress = scroll_progress(top, height, viewport_height);
    }
}

/// How far an element has travelled through the viewport, in percent
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / span * 100.0).clamp(0.0, 100.0)
}

/// Callback invoked by a platform watcher with the element's intersection status
pub type IntersectionCallback = Box<dyn FnMut(bool) -> ObserverAction>;

/// A source of intersection reports for one element.
///
/// The returned handle keeps the watcher attached; dropping it detaches.
/// Platforms must stop watching when the callback returns
/// [`ObserverAction::Release`].
pub trait ObserverPlatform {
    type Handle;

    fn observe(&self, options: &VisibilityOptions, callback: IntersectionCallback)
    -> Self::Handle;
}

struct Subscription {
    state: VisibilityState,
    once: bool,
    detached: bool,
}

type ChangeCallback = Box<dyn FnMut(VisibilityState)>;

/// Observer state plus the subscriber callback.
///
/// The callback lives in its own cell and is invoked after the state borrow
/// is released, so it may read or feed the observer. A change made from
/// inside the callback is not reported again; it is visible through
/// [`VisibilityObserver::state`].
struct Shared {
    subscription: RefCell<Subscription>,
    on_change: RefCell<ChangeCallback>,
}

impl Shared {
    fn notify(&self, state: VisibilityState) {
        if let Ok(mut on_change) = self.on_change.try_borrow_mut() {
            on_change(state);
        }
    }

    fn deliver_intersection(&self, intersecting: bool) -> ObserverAction {
        let (action, state) = {
            let mut sub = self.subscription.borrow_mut();
            if sub.detached {
                return ObserverAction::Release;
            }
            if sub.once && sub.state.has_been_seen {
                return ObserverAction::Release;
            }
            let once = sub.once;
            let action = sub.state.record_intersection(intersecting, once);
            (action, sub.state)
        };
        self.notify(state);
        action
    }

    fn deliver_scroll(&self, top: f64, height: f64, viewport_height: f64) {
        let changed = {
            let mut sub = self.subscription.borrow_mut();
            if sub.detached {
                return;
            }
            let before = sub.state.scroll_progress;
            sub.state.record_scroll(top, height, viewport_height);
            (sub.state.scroll_progress != before).then_some(sub.state)
        };
        if let Some(state) = changed {
            self.notify(state);
        }
    }
}

/// Scoped visibility subscription for one element
pub struct VisibilityObserver<P: ObserverPlatform> {
    shared: Rc<Shared>,
    handle: Option<P::Handle>,
}

impl<P: ObserverPlatform> VisibilityObserver<P> {
    /// Attach to `platform` and report every state change to `on_change`
    pub fn attach(
        platform: &P,
        options: &VisibilityOptions,
        on_change: impl FnMut(VisibilityState) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            subscription: RefCell::new(Subscription {
                state: VisibilityState::default(),
                once: options.once,
                detached: false,
            }),
            on_change: RefCell::new(Box::new(on_change)),
        });

        let weak = Rc::downgrade(&shared);
        let callback: IntersectionCallback = Box::new(move |intersecting| {
            match weak.upgrade() {
                Some(shared) => shared.deliver_intersection(intersecting),
                None => ObserverAction::Release,
            }
        });

        let handle = platform.observe(options, callback);

        Self {
            shared,
            handle: Some(handle),
        }
    }

    /// Feed the element's bounding box after a scroll event
    pub fn record_scroll(&self, top: f64, height: f64, viewport_height: f64) {
        self.shared.deliver_scroll(top, height, viewport_height);
    }

    pub fn state(&self) -> VisibilityState {
        self.shared.subscription.borrow().state
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the platform watcher; later reports are ignored
    pub fn detach(&mut self) {
        self.shared.subscription.borrow_mut().detached = true;
        self.handle.take();
    }
}

impl<P: ObserverPlatform> Drop for VisibilityObserver<P> {
    fn drop(&mut self) {
        self.detach();
    }
}
