//! Event binding.
//!
//! Every browser that supports WebGL 2.0 implements `addEventListener`, so unlike the classic
//! shims there is no `attachEvent` fallback here.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Event, EventTarget};

/// A registered event listener.
///
/// The listener is removed from its target when this value is dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: String,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Keeps the listener registered for the lifetime of the page.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self.target.remove_event_listener_with_callback_and_bool(
                &self.event_type,
                closure.as_ref().unchecked_ref(),
                false,
            );
        }
    }
}

/// Registers `handler` as a (non-capturing) listener for `event_type` events on `target`.
pub fn add_event<F>(
    target: &EventTarget,
    event_type: &str,
    handler: F,
) -> Result<EventListener, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback_and_bool(
        event_type,
        closure.as_ref().unchecked_ref(),
        false,
    )?;

    Ok(EventListener {
        target: target.clone(),
        event_type: event_type.to_string(),
        closure: Some(closure),
    })
}

/// Resolves with the first event of any of the `event_types` dispatched on a target.
///
/// The listeners are registered when the future is created, not when it is first polled, so
/// an event triggered right after creating the future is not missed.
pub struct NextEvent {
    receiver: oneshot::Receiver<Event>,
    _listeners: Vec<EventListener>,
}

impl Future for NextEvent {
    type Output = Result<Event, JsValue>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().receiver)
            .poll(cx)
            .map_err(|_| JsValue::from_str("event listener was removed"))
    }
}

pub fn next_event(target: &EventTarget, event_types: &[&str]) -> Result<NextEvent, JsValue> {
    let (sender, receiver) = oneshot::channel();
    let sender = Rc::new(RefCell::new(Some(sender)));
    let mut listeners = Vec::with_capacity(event_types.len());

    for event_type in event_types {
        let sender = sender.clone();

        listeners.push(add_event(target, event_type, move |event| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(event);
            }
        })?);
    }

    Ok(NextEvent {
        receiver,
        _listeners: listeners,
    })
}

pub fn once(target: &EventTarget, event_type: &str) -> Result<NextEvent, JsValue> {
    next_event(target, &[event_type])
}

/// Waits for the window `load` event, unless the document has already finished loading.
pub async fn window_loaded() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;

    let complete = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);

    if !complete {
        once(&window, "load")?.await?;
    }

    Ok(())
}
