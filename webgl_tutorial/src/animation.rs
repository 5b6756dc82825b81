use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Window};

use crate::util::js_error_message;

/// Turns animation frame timestamps into the time elapsed since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    then: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock::default()
    }

    /// Records the frame at `now` (in milliseconds, as passed to `requestAnimationFrame`
    /// callbacks) and returns the seconds elapsed since the previous frame.
    ///
    /// The first call measures from time `0`.
    pub fn tick(&mut self, now: f64) -> f32 {
        let now = now * 0.001;
        let delta = now - self.then;

        self.then = now;

        delta as f32
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Runs a callback on every animation frame.
///
/// Dropping the loop cancels the pending frame request. Dropping it from inside its own
/// callback is not supported.
pub struct AnimationLoop {
    window: Window,
    request_id: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
    // Holds on to the callback for as long as the loop runs; the callback only holds a weak
    // reference to itself to request the next frame.
    _closure: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn start<F>(mut callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
        let request_id = Rc::new(Cell::new(0));
        let cancelled = Rc::new(Cell::new(false));
        let container: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let request_id = request_id.clone();
            let cancelled = cancelled.clone();
            let container = Rc::downgrade(&container);

            Closure::wrap(Box::new(move |time: f64| {
                if cancelled.get() {
                    return;
                }

                callback(time);

                if let Some(container) = container.upgrade() {
                    if let Some(closure) = container.borrow().as_ref() {
                        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                            Ok(id) => request_id.set(id),
                            Err(err) => error!(
                                "failed to request the next animation frame: {}",
                                js_error_message(&err)
                            ),
                        }
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        request_id.set(window.request_animation_frame(closure.as_ref().unchecked_ref())?);

        *container.borrow_mut() = Some(closure);

        Ok(AnimationLoop {
            window,
            request_id,
            cancelled,
            _closure: container,
        })
    }

    /// Keeps the loop running for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancelled.set(true);

        let _ = self.window.cancel_animation_frame(self.request_id.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();

        assert!((clock.tick(500.0) - 0.5).abs() < 1e-6);
        assert!((clock.tick(750.0) - 0.25).abs() < 1e-6);
        assert_eq!(clock.tick(750.0), 0.0);
    }
}
