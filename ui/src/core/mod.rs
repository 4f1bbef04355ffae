pub mod clock;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod format;
pub mod once;
pub mod platform;
pub mod timing;
