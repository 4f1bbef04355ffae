//! Millisecond clock and timer helpers shared by the frame loops and
//! fire-and-forget UI timers.

/// Milliseconds from an arbitrary, monotonic origin.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolve on the next animation frame.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    match crate::core::dom::request_frame(move |_| {
        let _ = tx.send(());
    }) {
        Ok(_) => {
            let _ = rx.await;
        }
        // No window to animate in; fall back to a ~60 Hz timer.
        Err(_) => sleep_ms(16).await,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    sleep_ms(16).await;
}
