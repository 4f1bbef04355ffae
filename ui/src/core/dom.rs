//! Browser event glue (wasm only).
//!
//! Listeners from [`listen`] live for the rest of the page; their closures
//! are leaked with `forget` once attached. [`listen_first`] groups detach
//! themselves after the first event.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::once::FirstOf;

pub fn window_target() -> Option<EventTarget> {
    web_sys::window().map(Into::into)
}

pub fn document_target() -> Option<EventTarget> {
    web_sys::window()
        .and_then(|win| win.document())
        .map(Into::into)
}

/// Attach `handler` to `target` for `event`. `passive` listeners cannot
/// call `prevent_default`.
pub fn listen(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

/// Same as [`listen`] on the window, logging instead of failing.
pub fn listen_window(event: &str, passive: bool, handler: impl FnMut(Event) + 'static) {
    let Some(target) = window_target() else {
        return;
    };
    if let Err(err) = listen(&target, event, passive, handler) {
        tracing::warn!(?err, event, "failed to attach window listener");
    }
}

type WindowListener = (String, Closure<dyn FnMut(Event)>);
type SharedGroup = Rc<RefCell<FirstOf<WindowListener, Box<dyn FnOnce(Event)>>>>;

/// Run `handler` on the first of `events` to reach the window, then
/// remove every listener in the group. Each listener is also `once`.
pub fn listen_first(
    events: &[&str],
    handler: impl FnOnce(Event) + 'static,
) -> Result<(), JsValue> {
    let window = window_target().ok_or_else(|| JsValue::from_str("no window"))?;
    let handler: Box<dyn FnOnce(Event)> = Box::new(handler);
    let group: SharedGroup = Rc::new(RefCell::new(FirstOf::new(handler)));

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    options.set_once(true);

    for event in events {
        let shared = Rc::clone(&group);
        let target = window.clone();
        let callback = Closure::wrap(Box::new(move |evt: Event| {
            let Some((handler, listeners)) = shared.borrow_mut().fire() else {
                return;
            };
            for (name, listener) in &listeners {
                let _ = target
                    .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
            }
            // This callback is among them; drop the closures after it returns.
            wasm_bindgen_futures::spawn_local(async move { drop(listeners) });
            handler(evt);
        }) as Box<dyn FnMut(Event)>);

        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        if let Some((name, late)) = group.borrow_mut().register((event.to_string(), callback)) {
            let _ =
                window.remove_event_listener_with_callback(&name, late.as_ref().unchecked_ref());
        }
    }
    Ok(())
}

/// Schedule `callback` for the next animation frame.
pub fn request_frame(callback: impl FnOnce(f64) + 'static) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::once_into_js(callback);
    window.request_animation_frame(closure.unchecked_ref())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_height() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_height() -> f64 {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

/// Set a CSS custom property on the document root element.
pub fn set_root_property(name: &str, value: &str) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property(name, value);
    }
}
