//! Shared crate for the Slumber page: sleep heuristics, chart renderers,
//! audio control and the components the launchers mount.

pub mod audio;
pub mod calculator;
pub mod charts;
pub mod components;
pub mod core;
pub mod error;
pub mod i18n;
pub mod scene;
pub mod views;
