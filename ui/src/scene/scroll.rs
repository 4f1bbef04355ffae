//! Scroll-driven effects: reading progress, parallax and wheel snapping.

/// Share of the page scrolled, as a percentage in `0..=100`.
pub fn progress_pct(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let scrollable = scroll_height - inner_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Vertical offset in px for a layer with `data-speed = speed`.
pub fn parallax_offset(rect_top: f64, inner_height: f64, speed: f64) -> f64 {
    (rect_top - inner_height * 0.5) * speed * -0.3
}

/// Reveal once the element's top crosses 80% of the viewport height.
pub fn should_reveal(rect_top: f64, inner_height: f64) -> bool {
    rect_top <= inner_height * 0.8
}

/// Vertical extent of a snap section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// Section under the viewport's midline, if any.
pub fn current_section(sections: &[SectionRect], inner_height: f64) -> Option<usize> {
    let midline = inner_height * 0.5;
    sections
        .iter()
        .position(|rect| rect.top <= midline && rect.bottom >= midline)
}

/// Neighbouring section in the wheel direction. Without a current section
/// the first one is used; the ends do not wrap.
pub fn snap_target(current: Option<usize>, count: usize, delta_y: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let mut target = current.unwrap_or(0).min(count - 1);
    if delta_y > 0.0 && target < count - 1 {
        target += 1;
    }
    if delta_y < 0.0 && target > 0 {
        target -= 1;
    }
    Some(target)
}

/// Swallows wheel input while a smooth scroll is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapLock {
    locked_until_ms: f64,
}

impl SnapLock {
    pub fn is_locked(&self, now_ms: f64) -> bool {
        now_ms < self.locked_until_ms
    }

    /// Take the lock for `hold_ms`; `false` if it is still held.
    pub fn try_acquire(&mut self, now_ms: f64, hold_ms: u64) -> bool {
        if self.is_locked(now_ms) {
            return false;
        }
        self.locked_until_ms = now_ms + hold_ms as f64;
        true
    }
}
