//! Ownership of the canonical colour state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::trace;

use crate::color::{Hsv, Rgb};

type Listener = Box<dyn Fn(Hsv, Rgb)>;

/// Single owner of the canonical HSV triple.
///
/// Widgets read the current value and register callbacks here; only
/// [`ColorState::set`] mutates. Every `set` re-derives RGB before
/// notifying, so observers can never see the two representations drift
/// apart. Calls to `set` made from within a notification (a widget
/// reacting to its own update) are dropped: the update being delivered
/// is the authoritative one.
#[derive(Clone)]
pub struct ColorState {
    inner: Rc<Inner>,
}

struct Inner {
    hsv: Cell<Hsv>,
    listeners: RefCell<Vec<Listener>>,
    // Registrations made while a notification is in flight; `listeners`
    // stays borrowed for the whole notification.
    pending: RefCell<Vec<Listener>>,
    notifying: Cell<bool>,
}

impl ColorState {
    pub fn new(initial: Hsv) -> Self {
        Self {
            inner: Rc::new(Inner {
                hsv: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                pending: RefCell::new(Vec::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    pub fn get(&self) -> Hsv {
        self.inner.hsv.get()
    }

    /// The derived RGB for the current triple.
    pub fn rgb(&self) -> Rgb {
        self.get().to_rgb()
    }

    /// Register a callback invoked after every accepted `set`.
    ///
    /// Subscribing from inside a notification is allowed; the new
    /// listener takes effect from the next `set`, not the one in flight.
    pub fn subscribe(&self, listener: impl Fn(Hsv, Rgb) + 'static) {
        if self.inner.notifying.get() {
            self.inner.pending.borrow_mut().push(Box::new(listener));
        } else {
            self.inner.listeners.borrow_mut().push(Box::new(listener));
        }
    }

    /// Replace the canonical triple and notify all subscribers.
    pub fn set(&self, hsv: Hsv) {
        if self.inner.notifying.get() {
            return;
        }

        trace!("colour set to hsv({:.3}, {:.3}, {:.3})", hsv.h, hsv.s, hsv.v);
        self.inner.hsv.set(hsv);

        let rgb = hsv.to_rgb();
        self.inner.notifying.set(true);
        for listener in self.inner.listeners.borrow().iter() {
            listener(hsv, rgb);
        }
        self.inner.notifying.set(false);

        let mut pending = self.inner.pending.borrow_mut();
        if !pending.is_empty() {
            self.inner.listeners.borrow_mut().append(&mut pending);
        }
    }

    /// Replace the triple from an edited RGB value. The whole triple is
    /// converted back to HSV, which is lossy at achromatic points.
    pub fn set_rgb(&self, rgb: Rgb) {
        self.set(rgb.to_hsv());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_notifies_with_derived_rgb() {
        let state = ColorState::new(Hsv::new(0.0, 0.0, 0.0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_in = seen.clone();
        state.subscribe(move |hsv, rgb| {
            seen_in.borrow_mut().push((hsv, rgb));
        });

        state.set(Hsv::new(0.5, 1.0, 1.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let (hsv, rgb) = seen[0];
        assert_eq!(hsv, Hsv::new(0.5, 1.0, 1.0));
        // RGB delivered to observers is always the derivation of the triple.
        assert_eq!(rgb, hsv.to_rgb());
        assert!((rgb.r).abs() < 1e-9 && (rgb.g - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reentrant_set_is_dropped() {
        let state = ColorState::new(Hsv::new(0.1, 0.1, 0.1));
        let echoes = Rc::new(Cell::new(0u32));

        let state_in = state.clone();
        let echoes_in = echoes.clone();
        state.subscribe(move |hsv, _| {
            echoes_in.set(echoes_in.get() + 1);
            // A widget echoing its own update back must not recurse.
            state_in.set(hsv);
        });

        state.set(Hsv::new(0.9, 0.5, 0.5));
        assert_eq!(echoes.get(), 1);
        assert_eq!(state.get(), Hsv::new(0.9, 0.5, 0.5));
    }

    #[test]
    fn test_rgb_edit_replaces_canonical_state() {
        let state = ColorState::new(Hsv::new(0.25, 0.5, 0.5));
        state.set_rgb(Rgb::new(0.0, 1.0, 1.0));
        let hsv = state.get();
        assert!((hsv.h - 0.5).abs() < 1e-9);
        assert!((hsv.s - 1.0).abs() < 1e-9);
        assert!((hsv.v - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_subscribe_during_notification_takes_effect_next_set() {
        let state = ColorState::new(Hsv::new(0.0, 0.0, 0.0));
        let late_calls = Rc::new(Cell::new(0u32));

        let state_in = state.clone();
        let late_calls_in = late_calls.clone();
        state.subscribe(move |_, _| {
            let late_calls_inner = late_calls_in.clone();
            state_in.subscribe(move |_, _| {
                late_calls_inner.set(late_calls_inner.get() + 1);
            });
        });

        // The listener registered mid-notification must not see the
        // update that triggered its registration.
        state.set(Hsv::new(0.2, 0.2, 0.2));
        assert_eq!(late_calls.get(), 0);

        state.set(Hsv::new(0.4, 0.4, 0.4));
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_all_subscribers_run_in_order() {
        let state = ColorState::new(Hsv::new(0.0, 0.0, 0.0));
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["raster", "fields", "persist"] {
            let order = order.clone();
            state.subscribe(move |_, _| order.borrow_mut().push(tag));
        }
        state.set(Hsv::new(0.3, 0.3, 0.3));
        assert_eq!(*order.borrow(), vec!["raster", "fields", "persist"]);
    }
}
