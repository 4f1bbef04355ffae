//! Sleep-quality calculator: heuristics, shared metrics state and the form view.

pub mod advice;
pub mod engine;
pub mod metrics;
pub mod rating;
pub mod reading;
mod view;

pub use advice::{select_advice, Advice};
pub use engine::{assess, Assessment, CalculatorState, SleepForm};
pub use metrics::MetricsState;
pub use rating::{rate, Rating};
pub use reading::SleepReading;
pub use view::{MetricsProgress, SleepCalculator};
