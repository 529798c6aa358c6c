//! Body placement: house resolution, per-cell stacking and transit overlay.

mod assembler;
mod label;
mod slots;
mod strategy;

pub use assembler::{CellGroup, ChartPlacement, PlacementAssembler, PlacementEntry, PlacementRequest};
pub use label::{LabelConfig, body_abbreviation, format_body_label};
pub use slots::{SlotAllocator, SlotLayoutConfig, slot_position};
pub use strategy::{PlacementStrategy, ResolvedPosition};
