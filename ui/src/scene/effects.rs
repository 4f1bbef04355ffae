//! Direct DOM effects driven by scroll and wheel input (wasm only).

use std::cell::Cell;
use std::rc::Rc;

use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, WheelEvent,
};

use crate::audio::playback::USER_SIGNALS;
use crate::core::format::format_width;
use crate::core::{dom, timing};

use super::scroll::{
    current_section, parallax_offset, progress_pct, should_reveal, snap_target, SectionRect,
    SnapLock,
};

pub const PROGRESS_BAR_ID: &str = "progressBar";
const SNAP_SELECTOR: &str = "#hero, .section";

fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn update_scroll_effects() {
    let inner_height = dom::inner_height();

    let bar = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(PROGRESS_BAR_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(bar) = bar {
        let pct = progress_pct(dom::scroll_y(), dom::scroll_height(), inner_height);
        let _ = bar.style().set_property("width", &format_width(pct));
    }

    for layer in query_all("[data-speed]") {
        let speed = layer
            .get_attribute("data-speed")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let offset = parallax_offset(layer.get_bounding_client_rect().top(), inner_height, speed);
        if let Ok(layer) = layer.dyn_into::<HtmlElement>() {
            let _ = layer
                .style()
                .set_property("transform", &format!("translateY({offset:.2}px)"));
        }
    }

    for element in query_all(".reveal:not(.visible)") {
        if should_reveal(element.get_bounding_client_rect().top(), inner_height) {
            let _ = element.class_list().add_1("visible");
        }
    }
}

fn snap_on_wheel(lock: &Cell<SnapLock>, hold_ms: u64, event: &web_sys::Event) {
    let sections = query_all(SNAP_SELECTOR);
    if sections.is_empty() {
        return;
    }
    let now = timing::now_ms();
    let mut current_lock = lock.get();
    if !current_lock.try_acquire(now, hold_ms) {
        return;
    }
    lock.set(current_lock);
    event.prevent_default();

    let delta_y = event
        .dyn_ref::<WheelEvent>()
        .map(WheelEvent::delta_y)
        .unwrap_or(0.0);
    let rects: Vec<SectionRect> = sections
        .iter()
        .map(|section| {
            let rect = section.get_bounding_client_rect();
            SectionRect {
                top: rect.top(),
                bottom: rect.bottom(),
            }
        })
        .collect();
    let current = current_section(&rects, dom::inner_height());
    if let Some(target) = snap_target(current, sections.len(), delta_y) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        sections[target].scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Progress bar, parallax layers and reveal-on-scroll, plus wheel snapping
/// between `#hero` and each `.section`.
pub fn install(snap_lock_ms: u64) {
    update_scroll_effects();
    dom::listen_window("scroll", true, |_| update_scroll_effects());
    dom::listen_window("resize", true, |_| update_scroll_effects());

    let lock = Rc::new(Cell::new(SnapLock::default()));
    dom::listen_window("wheel", false, move |event| {
        snap_on_wheel(&lock, snap_lock_ms, &event)
    });
}

/// Sends once on the first user input of any kind.
pub fn watch_first_interaction(tx: UnboundedSender<()>) {
    if let Err(err) = dom::listen_first(&USER_SIGNALS, move |_| {
        let _ = tx.unbounded_send(());
    }) {
        tracing::warn!(?err, "could not watch for first interaction");
    }
}
