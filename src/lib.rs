//! kundali-layout: placement engine for Vedic chart drawings.
//!
//! Given an ascendant, body longitudes and optionally true house cusps, the
//! engine decides which cell of a North Indian or South Indian chart each
//! body occupies, stacks bodies sharing a cell, and overlays transits without
//! disturbing natal slots. Everything is pure and synchronous; drawing is left
//! to a `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod placement;
pub mod render;
pub mod telemetry;

pub use api::{ChartInput, ChartLayoutConfig, ChartLayoutEngine};
pub use error::{LayoutError, LayoutResult};
