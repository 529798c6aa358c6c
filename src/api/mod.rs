mod chart_input;
mod engine;
mod json_contract;

pub use chart_input::{AscendantRecord, BodyRecord, ChartInput};
pub use engine::{ChartLayoutConfig, ChartLayoutEngine};
pub use json_contract::{PLACEMENT_JSON_SCHEMA_V1, PlacementJsonContractV1};
