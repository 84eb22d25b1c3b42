//! chart-interaction: interaction core for Cartesian charts.
//!
//! The crate turns decoded pointer and gesture input into axis zoom/pan
//! changes, a trackball readout with non-overlapping labels, and point or
//! series selection. It never paints: floating views are handed to the host
//! through [`render::InteractionLayer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartGesture, InteractionConfig, InteractiveChart};
pub use error::{ChartError, ChartResult};
