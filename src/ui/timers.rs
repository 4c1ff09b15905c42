//! Component-scoped timers
//!
//! Every timer is owned by a handle stored under the calling component's
//! reactive owner. Unmounting disposes the handle, which cancels the timer
//! before it can fire again.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::{Interval, Timeout};

/// Call `callback` every `period_ms` until the calling component unmounts
pub fn use_interval(period_ms: u32, callback: impl FnMut() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        let interval = StoredValue::new_local(Interval::new(period_ms, callback));
        on_cleanup(move || interval.dispose());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (period_ms, callback);
    }
}

/// One-shot timer that can be (re)started any number of times.
///
/// Running the returned callback schedules `callback` after `delay_ms`,
/// replacing any start that has not fired yet.
pub fn use_timeout<F>(delay_ms: u32, callback: F) -> Callback<()>
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    #[cfg(not(feature = "ssr"))]
    {
        let pending = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || pending.dispose());

        Callback::new(move |_| {
            let callback = callback.clone();
            pending.try_update_value(|slot| {
                *slot = Some(Timeout::new(delay_ms, move || callback()));
            });
        })
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (delay_ms, callback);
        Callback::new(|_| {})
    }
}

/// Drive `frame` once per animation frame with the milliseconds elapsed since
/// the first frame, until it returns `false` or the component unmounts.
pub fn use_animation(start: Signal<bool>, frame: impl FnMut(f64) -> bool + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let request = StoredValue::new(None::<AnimationFrameRequestHandle>);
        on_cleanup(move || {
            if let Some(Some(handle)) = request.try_get_value() {
                handle.cancel();
            }
        });

        let frame = Rc::new(RefCell::new(frame));
        Effect::new(move |started: Option<bool>| {
            if started == Some(true) || !start.get() {
                return started.unwrap_or(false);
            }
            schedule_frame(request, frame.clone(), js_sys::Date::now());
            true
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (start, frame);
    }
}

#[cfg(not(feature = "ssr"))]
fn schedule_frame<F>(
    request: StoredValue<Option<AnimationFrameRequestHandle>>,
    frame: std::rc::Rc<std::cell::RefCell<F>>,
    started_at: f64,
) where
    F: FnMut(f64) -> bool + 'static,
{
    let next = frame.clone();
    let handle = request_animation_frame_with_handle(move || {
        let elapsed = js_sys::Date::now() - started_at;
        if (next.borrow_mut())(elapsed) && request.try_get_value().is_some() {
            schedule_frame(request, next.clone(), started_at);
        }
    });
    match handle {
        Ok(handle) => {
            request.try_set_value(Some(handle));
        }
        Err(err) => leptos::logging::warn!("animation frame request failed: {:?}", err),
    }
}

/// `N` uniform samples in [0, 1) for the live metric random walks
pub fn random_samples<const N: usize>() -> [f64; N] {
    #[cfg(not(feature = "ssr"))]
    {
        std::array::from_fn(|_| js_sys::Math::random())
    }

    #[cfg(feature = "ssr")]
    {
        [0.5; N]
    }
}
